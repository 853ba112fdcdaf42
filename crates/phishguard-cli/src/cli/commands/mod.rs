//! CLI command handlers. Each command is in its own file.

mod bundle_info;
mod completions;
mod features;
mod predict;
mod serve;

pub use bundle_info::run_bundle_info;
pub use completions::run_completions;
pub use features::run_features;
pub use predict::run_predict;
pub use serve::run_serve;
