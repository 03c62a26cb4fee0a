// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Layer argument values and their kind tags.

/// A single layer argument value.
///
/// Covers the value space the builder UI produces: booleans, integers,
/// floats, strings, and arrays of these. Values are stored verbatim and
/// re-emitted verbatim by the serializer; whether a value matches the
/// kind its schema expects is advisory only (see
/// [`crate::LayerRegistry::check_args`]).
///
/// The serde representation is untagged, so an `ArgValue` reads and writes
/// as the plain JSON value it wraps:
///
/// ```
/// use layer_registry::ArgValue;
///
/// let v: ArgValue = serde_json::from_str("64").unwrap();
/// assert_eq!(v, ArgValue::Int(64));
/// assert_eq!(serde_json::to_string(&v).unwrap(), "64");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer (JSON numbers without a fractional part).
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// String.
    Str(String),
    /// Array of argument values.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns the [`ValueKind`] tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ArgValue::Bool(_) => ValueKind::Bool,
            ArgValue::Int(_) => ValueKind::Int,
            ArgValue::Float(_) => ValueKind::Float,
            ArgValue::Str(_) => ValueKind::Str,
            ArgValue::List(_) => ValueKind::List,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        ArgValue::Bool(v)
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        ArgValue::Int(v.into())
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Float(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Str(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Str(v)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(v: Vec<ArgValue>) -> Self {
        ArgValue::List(v)
    }
}

impl From<&ArgValue> for serde_json::Value {
    /// Total conversion into a JSON value.
    ///
    /// Non-finite floats map to JSON `null`, matching
    /// `serde_json::Value::from(f64)`, so this conversion never fails.
    fn from(v: &ArgValue) -> Self {
        match v {
            ArgValue::Bool(b) => serde_json::Value::Bool(*b),
            ArgValue::Int(i) => serde_json::Value::from(*i),
            ArgValue::Float(f) => serde_json::Value::from(*f),
            ArgValue::Str(s) => serde_json::Value::String(s.clone()),
            ArgValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

/// The expected kind of an argument value, as declared by a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Boolean flag.
    Bool,
    /// Integer count or index.
    Int,
    /// Floating-point quantity.
    Float,
    /// String label.
    Str,
    /// Array of values.
    List,
}

impl ValueKind {
    /// Returns a human-readable label for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
        }
    }

    /// Returns `true` if `value` satisfies this expected kind.
    ///
    /// An integer satisfies a `Float` expectation (the form widget for a
    /// rate happily submits `1` instead of `1.0`); no other widening is
    /// accepted.
    pub fn accepts(self, value: &ArgValue) -> bool {
        match (self, value.kind()) {
            (expected, found) if expected == found => true,
            (ValueKind::Float, ValueKind::Int) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(ArgValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(ArgValue::from(64i64).kind(), ValueKind::Int);
        assert_eq!(ArgValue::from(0.5).kind(), ValueKind::Float);
        assert_eq!(ArgValue::from("relu").kind(), ValueKind::Str);
        assert_eq!(ArgValue::List(vec![]).kind(), ValueKind::List);
    }

    #[test]
    fn test_accepts_exact() {
        assert!(ValueKind::Int.accepts(&ArgValue::Int(3)));
        assert!(ValueKind::Str.accepts(&ArgValue::from("x")));
        assert!(!ValueKind::Int.accepts(&ArgValue::from("3")));
        assert!(!ValueKind::Bool.accepts(&ArgValue::Int(1)));
    }

    #[test]
    fn test_accepts_int_where_float_expected() {
        assert!(ValueKind::Float.accepts(&ArgValue::Int(1)));
        assert!(!ValueKind::Int.accepts(&ArgValue::Float(1.0)));
    }

    #[test]
    fn test_serde_untagged() {
        let v: ArgValue = serde_json::from_str("0.25").unwrap();
        assert_eq!(v, ArgValue::Float(0.25));

        let v: ArgValue = serde_json::from_str(r#"["Z0", "Z1"]"#).unwrap();
        assert_eq!(
            v,
            ArgValue::List(vec![ArgValue::from("Z0"), ArgValue::from("Z1")])
        );

        assert_eq!(
            serde_json::to_string(&ArgValue::Int(64)).unwrap(),
            "64"
        );
    }

    #[test]
    fn test_json_value_conversion_is_total() {
        let v = serde_json::Value::from(&ArgValue::Float(f64::NAN));
        assert!(v.is_null());

        let v = serde_json::Value::from(&ArgValue::List(vec![
            ArgValue::Int(1),
            ArgValue::from("a"),
        ]));
        assert_eq!(v, serde_json::json!([1, "a"]));
    }
}
