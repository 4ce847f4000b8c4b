//! # Theme Values
//!
//! Raw theme data is a loosely typed nested mapping. [StyleValue] is its Rust
//! form: strings, numbers, booleans and nested [StyleMap]s. A string whose
//! first character is the reference marker (`@` by default) is an alias to
//! another key; absence is plain `None`.
//!
//! ```rust
//! use themekit_theme::value::{StyleMap, StyleValue};
//!
//! let mut data = StyleMap::new();
//! data.insert("primary".into(), "#3366ff".into());
//! data.insert("accent".into(), "@primary".into());
//!
//! assert_eq!(data["accent"].reference_target('@'), Some("primary"));
//! assert_eq!(data["primary"].reference_target('@'), None);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A nested mapping of theme keys to values, in insertion order.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single raw entry of theme data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A string value. May be a reference, see [StyleValue::reference_target].
    String(String),
    /// A nested style block.
    Map(StyleMap),
}

impl StyleValue {
    /// The key this value points at, if it is a reference.
    ///
    /// Only the leading marker is stripped. `"@"` alone yields an empty target.
    pub fn reference_target(&self, marker: char) -> Option<&str> {
        match self {
            StyleValue::String(value) => value.strip_prefix(marker),
            _ => None,
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the integer value, if this is natively an integer.
    ///
    /// Floats with no fractional part count as integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StyleValue::Integer(value) => Some(*value),
            StyleValue::Float(value)
                if value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value <= i64::MAX as f64 =>
            {
                Some(*value as i64)
            },
            _ => None,
        }
    }

    /// Get the numeric value, if this is natively a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Integer(value) => Some(*value as f64),
            StyleValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the nested mapping, if this is a style block.
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Numeric value of a native number or a numeric string.
    pub fn to_f64(&self) -> Option<f64> {
        self.as_f64()
            .or_else(|| self.as_str().and_then(|s| s.parse::<f64>().ok()))
    }

    /// Convert already parsed JSON into theme data.
    ///
    /// `null` and arrays have no theme counterpart and yield `None`; inside
    /// objects those entries are dropped.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null | Value::Array(_) => None,
            Value::Bool(value) => Some(StyleValue::Bool(value)),
            Value::Number(number) => match number.as_i64() {
                Some(value) => Some(StyleValue::Integer(value)),
                None => number.as_f64().map(StyleValue::Float),
            },
            Value::String(value) => Some(StyleValue::String(value)),
            Value::Object(object) => Some(StyleValue::Map(
                object
                    .into_iter()
                    .filter_map(|(key, value)| Self::from_json(value).map(|value| (key, value)))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Integer(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Integer(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Float(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Float(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_target_strips_only_leading_marker() {
        assert_eq!(StyleValue::from("@a@b").reference_target('@'), Some("a@b"));
        assert_eq!(StyleValue::from("a@b").reference_target('@'), None);
        assert_eq!(StyleValue::from("$a").reference_target('$'), Some("a"));
        assert_eq!(StyleValue::Integer(5).reference_target('@'), None);
    }

    #[test]
    fn integral_floats_are_integers() {
        assert_eq!(StyleValue::Float(4.0).as_i64(), Some(4));
        assert_eq!(StyleValue::Float(4.5).as_i64(), None);
        assert_eq!(StyleValue::from("4").as_i64(), None);
    }

    #[test]
    fn to_f64_accepts_numeric_strings() {
        assert_eq!(StyleValue::from("1.5").to_f64(), Some(1.5));
        assert_eq!(StyleValue::Integer(2).to_f64(), Some(2.0));
        assert_eq!(StyleValue::from("wide").to_f64(), None);
        assert_eq!(StyleValue::from(true).to_f64(), None);
    }

    #[test]
    fn from_json_drops_nulls_and_arrays() {
        let value = StyleValue::from_json(json!({
            "size": 14,
            "scale": 1.5,
            "name": "Avenir",
            "hidden": null,
            "stops": [1, 2],
            "nested": { "bold": true }
        }))
        .unwrap();

        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map["size"], StyleValue::Integer(14));
        assert_eq!(map["scale"], StyleValue::Float(1.5));
        assert_eq!(map["nested"].as_map().unwrap()["bold"], StyleValue::Bool(true));
        assert!(!map.contains_key("hidden"));
        assert!(!map.contains_key("stops"));
    }

    #[test]
    fn deserializes_untagged() {
        let value: StyleValue = serde_json::from_str(r#"{"a": "@b", "n": 3}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["a"].reference_target('@'), Some("b"));
        assert_eq!(map["n"].as_i64(), Some(3));
    }
}
