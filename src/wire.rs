use std::fmt;

use indexmap::IndexMap;

use crate::num::{format_f64, format_i64, format_u64};

/// String-keyed, insertion-ordered object of wire values.
pub type Object = IndexMap<String, WireValue>;

/// The shape a decoded node actually had on the wire.
///
/// Every wrapper keeps one of these next to its coerced value, so re-encoding
/// writes back what was read instead of the coercion result. `Absent` covers
/// both an explicit wire `null` and a missing record key.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum WireValue {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Array(Vec<WireValue>),
    Object(Object),
}

impl WireValue {
    pub const fn is_absent(&self) -> bool {
        matches!(self, WireValue::Absent)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, WireValue::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, WireValue::Int(_))
    }

    pub const fn is_uint(&self) -> bool {
        matches!(self, WireValue::UInt(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, WireValue::Float(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, WireValue::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, WireValue::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, WireValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            WireValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            WireValue::Int(i) => Some(*i),
            WireValue::UInt(u) => {
                if *u <= i64::MAX as u64 {
                    Some(*u as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            WireValue::UInt(u) => Some(*u),
            WireValue::Int(i) => {
                if *i >= 0 {
                    Some(*i as u64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            WireValue::Int(i) => Some(*i as f64),
            WireValue::UInt(u) => Some(*u as f64),
            WireValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<WireValue>> {
        match self {
            WireValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            WireValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&WireValue> {
        match self {
            WireValue::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&WireValue> {
        match self {
            WireValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    pub fn take(&mut self) -> WireValue {
        std::mem::replace(self, WireValue::Absent)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            WireValue::Absent => "null",
            WireValue::Bool(_) => "boolean",
            WireValue::Int(_) => "integer",
            WireValue::UInt(_) => "unsigned integer",
            WireValue::Float(_) => "float",
            WireValue::String(_) => "string",
            WireValue::Array(_) => "array",
            WireValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Absent => write!(f, "null"),
            WireValue::Bool(b) => write!(f, "{b}"),
            WireValue::Int(i) => write!(f, "{}", format_i64(*i)),
            WireValue::UInt(u) => write!(f, "{}", format_u64(*u)),
            WireValue::Float(x) => write!(f, "{}", format_f64(*x)),
            WireValue::String(s) => write!(f, "\"{s}\""),
            WireValue::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            WireValue::Object(obj) => {
                write!(f, "{{")?;
                for (i, (k, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<serde_json::Value> for WireValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => WireValue::Absent,
            serde_json::Value::Bool(b) => WireValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    WireValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    WireValue::UInt(u)
                } else if let Some(x) = n.as_f64() {
                    WireValue::Float(x)
                } else {
                    WireValue::Absent
                }
            }
            serde_json::Value::String(s) => WireValue::String(s),
            serde_json::Value::Array(arr) => {
                WireValue::Array(arr.into_iter().map(WireValue::from).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut entries = Object::with_capacity(obj.len());
                for (k, v) in obj {
                    entries.insert(k, WireValue::from(v));
                }
                WireValue::Object(entries)
            }
        }
    }
}

impl From<&serde_json::Value> for WireValue {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

impl From<WireValue> for serde_json::Value {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Absent => serde_json::Value::Null,
            WireValue::Bool(b) => serde_json::Value::Bool(b),
            WireValue::Int(i) => serde_json::Value::Number(i.into()),
            WireValue::UInt(u) => serde_json::Value::Number(u.into()),
            WireValue::Float(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            WireValue::String(s) => serde_json::Value::String(s),
            WireValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(Into::into).collect())
            }
            WireValue::Object(obj) => {
                let mut entries = serde_json::Map::new();
                for (k, v) in obj {
                    entries.insert(k, v.into());
                }
                serde_json::Value::Object(entries)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Object, WireValue};

    #[rstest::rstest]
    fn test_accessors() {
        assert_eq!(WireValue::Bool(true).as_bool(), Some(true));
        assert_eq!(WireValue::Int(-3).as_i64(), Some(-3));
        assert_eq!(WireValue::Int(-3).as_u64(), None);
        assert_eq!(WireValue::Int(7).as_u64(), Some(7));
        assert_eq!(WireValue::UInt(u64::MAX).as_i64(), None);
        assert_eq!(WireValue::UInt(9).as_i64(), Some(9));
        assert_eq!(WireValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(WireValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(WireValue::String("hi".into()).as_str(), Some("hi"));
        assert!(WireValue::Absent.is_absent());
        assert!(WireValue::default().is_absent());
    }

    #[rstest::rstest]
    fn test_object_and_array_access() {
        let mut obj = Object::new();
        obj.insert("a".to_string(), WireValue::Int(1));
        let value = WireValue::Object(obj);
        assert_eq!(value.get("a").and_then(WireValue::as_i64), Some(1));
        assert!(value.get("missing").is_none());
        assert_eq!(value.type_name(), "object");

        let arr = WireValue::Array(vec![WireValue::Bool(false)]);
        assert_eq!(arr.get_index(0).and_then(WireValue::as_bool), Some(false));
        assert!(arr.get_index(1).is_none());
        assert!(arr.get("key").is_none());
    }

    #[rstest::rstest]
    fn test_take() {
        let mut value = WireValue::String("kept".to_string());
        let prior = value.take();
        assert!(value.is_absent());
        assert_eq!(prior.as_str(), Some("kept"));
    }

    #[rstest::rstest]
    #[case(WireValue::Absent, "null")]
    #[case(WireValue::Bool(true), "true")]
    #[case(WireValue::Int(-42), "-42")]
    #[case(WireValue::UInt(18446744073709551615), "18446744073709551615")]
    #[case(WireValue::Float(180.0), "180.0")]
    #[case(WireValue::String("小明".into()), "\"小明\"")]
    #[case(WireValue::Array(vec![WireValue::Int(1), WireValue::Absent]), "[1, null]")]
    fn test_display(#[case] value: WireValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest::rstest]
    fn test_display_object() {
        let mut obj = Object::new();
        obj.insert("k".to_string(), WireValue::String("v".to_string()));
        obj.insert("n".to_string(), WireValue::Int(1));
        assert_eq!(
            WireValue::Object(obj).to_string(),
            "{\"k\": \"v\", \"n\": 1}"
        );
    }

    #[rstest::rstest]
    fn test_json_value_conversions() {
        let json_value = json!({"a": [1, -2, 1.5], "b": {"c": true, "d": null}});
        let value = WireValue::from(json_value.clone());
        assert_eq!(
            value.get("a").and_then(|a| a.get_index(0)),
            Some(&WireValue::Int(1))
        );
        assert_eq!(
            value.get("b").and_then(|b| b.get("d")),
            Some(&WireValue::Absent)
        );
        let roundtrip: serde_json::Value = value.into();
        assert_eq!(roundtrip, json_value);
    }

    #[rstest::rstest]
    fn test_large_unsigned_conversion() {
        let json_value = json!(18446744073709551615u64);
        assert_eq!(WireValue::from(&json_value), WireValue::UInt(u64::MAX));
    }
}
