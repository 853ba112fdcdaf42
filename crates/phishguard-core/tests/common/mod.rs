//! Shared fixtures: small hand-built bundles written to temp files.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `doc` to a temp file and returns the handle (deleted on drop).
pub fn write_bundle(doc: &Value) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(serde_json::to_string_pretty(doc).unwrap().as_bytes())
        .unwrap();
    f.flush().unwrap();
    f
}

/// Identity preprocessor over all columns, one leaf tree scoring 0.0
/// (probability 0.5 for every URL).
pub fn coin_flip_bundle() -> Value {
    json!({
        "preprocessor": { "kind": "identity" },
        "booster": {
            "kind": "tree_ensemble",
            "num_features": 41,
            "trees": [ { "leaf_value": [0.0] } ]
        }
    })
}

/// Scales `url_length` and `having_query`, then splits on `having_query`:
/// URLs with a query score sigmoid(2.0), the rest sigmoid(-2.0).
/// A second round adds `late_round` to every score.
pub fn query_bundle(late_round: f64) -> Value {
    json!({
        "preprocessor": {
            "kind": "standard_scaler",
            "columns": ["url_length", "having_query"],
            "mean": [30.0, 0.0],
            "scale": [10.0, 1.0]
        },
        "booster": {
            "kind": "tree_ensemble",
            "num_features": 2,
            "objective": "binary",
            "trees": [
                {
                    "split_feature": [1],
                    "threshold": [0.5],
                    "default_left": [true],
                    "left_child": [-1],
                    "right_child": [-2],
                    "leaf_value": [-2.0, 2.0]
                },
                { "leaf_value": [late_round] }
            ]
        }
    })
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
