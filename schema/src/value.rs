use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a single field within a schema model.
///
/// In the plain-mapping schema representation these are named with their
/// lowercase serde names: `string`, `int`, `float`, `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::Bool => write!(f, "bool"),
        }
    }
}

/// One decoded field value.
///
/// Fields decoded against an empty model are always [`Str`](Value::Str);
/// otherwise the variant matches the declared [`FieldType`]. Serializes
/// untagged, so a decoded tree prints as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// A convenience method to extract the text out of a [Str](Value::Str).
    /// Returns `""` for other value kinds.
    pub fn as_str(&self) -> &str {
        match *self {
            Value::Str(ref value) => value.as_str(),
            _ => "",
        }
    }

    /// A convenience method to extract the value out of an [Int](Value::Int).
    /// Returns `0` for other value kinds.
    pub fn as_int(&self) -> i64 {
        match *self {
            Value::Int(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [Float](Value::Float).
    /// Returns `0.0` for other value kinds.
    pub fn as_float(&self) -> f64 {
        match *self {
            Value::Float(value) => value,
            _ => 0.0,
        }
    }

    /// A convenience method to extract the value out of a [Bool](Value::Bool).
    /// Returns `false` for other value kinds.
    pub fn as_bool(&self) -> bool {
        match *self {
            Value::Bool(value) => value,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_names_round_trip() {
        for (name, ty) in [
            ("string", FieldType::String),
            ("int", FieldType::Int),
            ("float", FieldType::Float),
            ("bool", FieldType::Bool),
        ] {
            assert_eq!(ty.to_string(), name);
            let parsed: FieldType =
                serde_json::from_str(&format!("\"{}\"", name)).unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_value_accessors_default_on_mismatch() {
        assert_eq!(Value::Int(7).as_int(), 7);
        assert_eq!(Value::Str("7".into()).as_int(), 0);
        assert_eq!(Value::Bool(true).as_bool(), true);
        assert_eq!(Value::Float(1.5).as_str(), "");
    }
}
