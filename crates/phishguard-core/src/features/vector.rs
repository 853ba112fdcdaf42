//! Ordered feature vector keyed by [`FEATURE_COLUMNS`](super::FEATURE_COLUMNS).

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::{FEATURE_COLUMNS, FEATURE_COUNT};

/// A single feature value. Flags and counts are integers; averages and
/// entropies are floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(i) => i as f64,
            FeatureValue::Float(f) => f,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(flag: bool) -> Self {
        FeatureValue::Int(i64::from(flag))
    }
}

impl From<usize> for FeatureValue {
    fn from(count: usize) -> Self {
        FeatureValue::Int(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(i) => write!(f, "{i}"),
            FeatureValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FeatureValue::Int(i) => serializer.serialize_i64(i),
            FeatureValue::Float(v) => serializer.serialize_f64(v),
        }
    }
}

/// Exactly one value per feature column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    /// Builds a vector by asking `value_for` for each column in order.
    pub fn from_fn(mut value_for: impl FnMut(&'static str) -> FeatureValue) -> Self {
        Self {
            values: std::array::from_fn(|i| value_for(FEATURE_COLUMNS[i])),
        }
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|i| self.values[i])
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &FEATURE_COLUMNS
    }

    /// Values as a dense numeric row, in column order.
    pub fn to_row(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.as_f64()).collect()
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Renders the first `n` features as `{name: value, ...}`.
    pub fn preview(&self, n: usize) -> String {
        let body: Vec<String> = self
            .iter()
            .take(n)
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        format!("{{{}}}", body.join(", "))
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_in_column_order() {
        let v = FeatureVector::from_fn(|name| match name {
            "url_length" => FeatureValue::Int(10),
            "entropy_of_domain" => FeatureValue::Float(1.5),
            _ => FeatureValue::Int(0),
        });
        assert_eq!(v.len(), FEATURE_COUNT);
        assert_eq!(v.get("url_length"), Some(FeatureValue::Int(10)));
        assert_eq!(v.get("entropy_of_domain"), Some(FeatureValue::Float(1.5)));
        assert_eq!(v.get("no_such_feature"), None);
        let row = v.to_row();
        assert_eq!(row[0], 10.0);
        assert_eq!(row[FEATURE_COUNT - 1], 1.5);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let v = FeatureVector::from_fn(|_| FeatureValue::Int(1));
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.starts_with("{\"url_length\":1,\"number_of_dots_in_url\":1"));
        assert!(json.ends_with("\"entropy_of_domain\":1}"));
    }

    #[test]
    fn preview_truncates() {
        let v = FeatureVector::from_fn(|_| FeatureValue::Float(0.5));
        assert_eq!(
            v.preview(2),
            "{url_length: 0.5, number_of_dots_in_url: 0.5}"
        );
    }

    #[test]
    fn bool_and_count_conversions() {
        assert_eq!(FeatureValue::from(true), FeatureValue::Int(1));
        assert_eq!(FeatureValue::from(false), FeatureValue::Int(0));
        assert_eq!(FeatureValue::from(7usize), FeatureValue::Int(7));
        assert_eq!(FeatureValue::from(0.25).as_f64(), 0.25);
    }
}
