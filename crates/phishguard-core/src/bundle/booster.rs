//! Gradient-boosted tree scoring.
//!
//! Trees use the flat-array layout of common GBDT dumps: node `i` splits on
//! `split_feature[i]` at `threshold[i]`, `x <= threshold` goes left, NaN
//! follows `default_left[i]`, and a negative child `c` names leaf `!c`.

use serde::Deserialize;
use std::fmt;

use super::error::{BundleFormatError, ScoreError};

/// Scores one input row, returning one probability per model output.
pub trait Booster: fmt::Debug + Send + Sync {
    /// `num_iteration` limits the boosting rounds used; `None` uses all.
    fn predict(&self, row: &[f64], num_iteration: Option<usize>) -> Result<Vec<f64>, ScoreError>;

    fn kind(&self) -> &'static str;

    /// Total boosting rounds available.
    fn num_iterations(&self) -> usize;

    /// Row width the booster expects, if known.
    fn input_width(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// One logistic output.
    #[default]
    Binary,
    /// Softmax over `num_class` outputs.
    Multiclass,
}

/// A single regression tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub split_feature: Vec<usize>,
    #[serde(default)]
    pub threshold: Vec<f64>,
    #[serde(default)]
    pub default_left: Vec<bool>,
    #[serde(default)]
    pub left_child: Vec<i32>,
    #[serde(default)]
    pub right_child: Vec<i32>,
    pub leaf_value: Vec<f64>,
}

impl Tree {
    /// A tree with no splits that always yields `value`.
    pub fn leaf(value: f64) -> Self {
        Self {
            split_feature: Vec::new(),
            threshold: Vec::new(),
            default_left: Vec::new(),
            left_child: Vec::new(),
            right_child: Vec::new(),
            leaf_value: vec![value],
        }
    }

    fn validate(&self, index: usize, num_features: usize) -> Result<(), BundleFormatError> {
        let invalid =
            |reason: String| BundleFormatError::invalid("booster", format!("tree {index}: {reason}"));
        let nodes = self.split_feature.len();
        if self.threshold.len() != nodes
            || self.left_child.len() != nodes
            || self.right_child.len() != nodes
            || !(self.default_left.is_empty() || self.default_left.len() == nodes)
        {
            return Err(invalid("node arrays differ in length".to_string()));
        }
        if self.leaf_value.len() != nodes + 1 {
            return Err(invalid(format!(
                "{} internal nodes need {} leaves, found {}",
                nodes,
                nodes + 1,
                self.leaf_value.len()
            )));
        }
        for i in 0..nodes {
            if self.split_feature[i] >= num_features {
                return Err(invalid(format!(
                    "node {i} splits on feature {} of {num_features}",
                    self.split_feature[i]
                )));
            }
            for child in [self.left_child[i], self.right_child[i]] {
                let ok = if child < 0 {
                    ((!child) as usize) < self.leaf_value.len()
                } else {
                    // children after their parent rule out cycles
                    (child as usize) > i && (child as usize) < nodes
                };
                if !ok {
                    return Err(invalid(format!("node {i} has invalid child {child}")));
                }
            }
        }
        Ok(())
    }

    /// Leaf value reached by `row`.
    ///
    /// Trees built in code skip load-time validation, so every index is
    /// checked here. A well-formed tree reaches a leaf within one step per
    /// internal node; anything longer is a cycle.
    pub fn evaluate(&self, row: &[f64]) -> Result<f64, String> {
        if self.split_feature.is_empty() {
            return self
                .leaf_value
                .first()
                .copied()
                .ok_or_else(|| "tree has no leaves".to_string());
        }
        let mut node = 0usize;
        for _ in 0..self.split_feature.len() {
            let (feature, threshold, left, right) = match (
                self.split_feature.get(node),
                self.threshold.get(node),
                self.left_child.get(node),
                self.right_child.get(node),
            ) {
                (Some(&f), Some(&t), Some(&l), Some(&r)) => (f, t, l, r),
                _ => return Err(format!("node {node} is missing from the node arrays")),
            };
            let x = row.get(feature).copied().ok_or_else(|| {
                format!("node {node} splits on feature {feature} of {}", row.len())
            })?;
            let go_left = if x.is_nan() {
                self.default_left.get(node).copied().unwrap_or(false)
            } else {
                x <= threshold
            };
            let child = if go_left { left } else { right };
            if child < 0 {
                let leaf = (!child) as usize;
                return self
                    .leaf_value
                    .get(leaf)
                    .copied()
                    .ok_or_else(|| format!("node {node} points at missing leaf {leaf}"));
            }
            node = child as usize;
        }
        Err("no leaf reached, the tree has a cycle".to_string())
    }
}

fn default_num_class() -> usize {
    1
}

/// Additive tree ensemble; trees are stored round-major with `num_class`
/// trees per boosting round.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsemble {
    pub num_features: usize,
    #[serde(default)]
    pub objective: Objective,
    #[serde(default = "default_num_class")]
    pub num_class: usize,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Structural checks run by the bundle loader. Callers assembling an
    /// ensemble in code can run them too; scoring stays safe either way.
    pub fn validate(&self) -> Result<(), BundleFormatError> {
        if self.num_class == 0 {
            return Err(BundleFormatError::invalid("booster", "num_class must be positive"));
        }
        if self.objective == Objective::Binary && self.num_class != 1 {
            return Err(BundleFormatError::invalid(
                "booster",
                format!("binary objective with num_class {}", self.num_class),
            ));
        }
        if self.trees.len() % self.num_class != 0 {
            return Err(BundleFormatError::invalid(
                "booster",
                format!(
                    "{} trees is not a multiple of num_class {}",
                    self.trees.len(),
                    self.num_class
                ),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.num_features)?;
        }
        Ok(())
    }

    fn raw_scores(&self, row: &[f64], rounds: usize) -> Result<Vec<f64>, ScoreError> {
        let mut raw = vec![self.base_score; self.num_class];
        let used = self.trees.chunks(self.num_class).take(rounds);
        for (r, round) in used.enumerate() {
            for (c, (score, tree)) in raw.iter_mut().zip(round).enumerate() {
                *score += tree
                    .evaluate(row)
                    .map_err(|reason| ScoreError::MalformedTree {
                        tree: r * self.num_class + c,
                        reason,
                    })?;
            }
        }
        Ok(raw)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(raw: &[f64]) -> Vec<f64> {
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = raw.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

impl Booster for TreeEnsemble {
    fn predict(&self, row: &[f64], num_iteration: Option<usize>) -> Result<Vec<f64>, ScoreError> {
        if self.num_class == 0 {
            return Err(ScoreError::NoClasses);
        }
        if row.len() != self.num_features {
            return Err(ScoreError::FeatureCount {
                expected: self.num_features,
                actual: row.len(),
            });
        }
        let total = self.num_iterations();
        let rounds = num_iteration
            .filter(|&n| n > 0)
            .map_or(total, |n| n.min(total));
        let raw = self.raw_scores(row, rounds)?;
        Ok(match self.objective {
            Objective::Binary => raw.into_iter().map(sigmoid).collect(),
            Objective::Multiclass => softmax(&raw),
        })
    }

    fn kind(&self) -> &'static str {
        "tree_ensemble"
    }

    fn num_iterations(&self) -> usize {
        self.trees.len().checked_div(self.num_class).unwrap_or(0)
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.num_features)
    }
}
