use indexmap::IndexMap;

use crate::num::{format_f64, format_i64, format_u64};
use crate::wire::WireValue;

/// Tag identifying which of the four scalar targets a wrapper coerces into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    String,
    Bool,
    Int,
    Float,
}

impl Target {
    /// Name of the concrete wrapper alias, used in error messages and
    /// debug output.
    pub fn wrapper_name(self) -> &'static str {
        match self {
            Target::String => "LenientString",
            Target::Bool => "LenientBool",
            Target::Int => "LenientInt",
            Target::Float => "LenientFloat",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::String => "string",
            Target::Bool => "boolean",
            Target::Int => "integer",
            Target::Float => "float",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for bool {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Total conversion from an observed [`WireValue`] into one of the four
/// scalar targets: `String`, `bool`, `i64`, `f64`.
///
/// Coercion never fails. A shape with no meaningful reading in the target
/// type falls back to the target's `Absent` result (`""`, `false`, `0`,
/// `0.0`), and strings that fail to parse do the same. The trait is sealed:
/// the set of targets is closed by design of the wire model.
pub trait Coerce: sealed::Sealed + Clone {
    /// The target tag for this scalar type.
    const TARGET: Target;

    /// Convert any observed wire shape into this type.
    fn coerce(origin: &WireValue) -> Self;

    /// The wire leaf a directly constructed native value corresponds to.
    fn to_wire(&self) -> WireValue;
}

impl Coerce for String {
    const TARGET: Target = Target::String;

    fn coerce(origin: &WireValue) -> Self {
        match origin {
            WireValue::Absent => String::new(),
            WireValue::Bool(b) => b.to_string(),
            WireValue::Int(i) => format_i64(*i),
            WireValue::UInt(u) => format_u64(*u),
            WireValue::Float(x) => format_f64(*x),
            WireValue::String(s) => s.clone(),
            // Aggregates render as the debug text of their element
            // coercions, so `[1, "2"]` reads back as `["1", "2"]`.
            WireValue::Array(arr) => {
                let items: Vec<String> = arr.iter().map(String::coerce).collect();
                format!("{items:?}")
            }
            WireValue::Object(obj) => {
                let entries: IndexMap<&str, String> = obj
                    .iter()
                    .map(|(k, v)| (k.as_str(), String::coerce(v)))
                    .collect();
                format!("{entries:?}")
            }
        }
    }

    fn to_wire(&self) -> WireValue {
        WireValue::String(self.clone())
    }
}

impl Coerce for bool {
    const TARGET: Target = Target::Bool;

    fn coerce(origin: &WireValue) -> Self {
        match origin {
            WireValue::Absent => false,
            WireValue::Bool(b) => *b,
            WireValue::Int(i) => *i > 0,
            WireValue::UInt(u) => *u > 0,
            WireValue::Float(x) => *x > 0.0,
            WireValue::String(s) => s.parse().unwrap_or(false),
            WireValue::Array(_) | WireValue::Object(_) => false,
        }
    }

    fn to_wire(&self) -> WireValue {
        WireValue::Bool(*self)
    }
}

impl Coerce for i64 {
    const TARGET: Target = Target::Int;

    fn coerce(origin: &WireValue) -> Self {
        match origin {
            WireValue::Absent => 0,
            WireValue::Bool(b) => i64::from(*b),
            WireValue::Int(i) => *i,
            // Probing only yields UInt above i64::MAX, so this is always
            // the saturation case.
            WireValue::UInt(u) => i64::try_from(*u).unwrap_or(i64::MAX),
            // Truncates toward zero; out-of-range saturates, NaN maps to 0.
            WireValue::Float(x) => *x as i64,
            WireValue::String(s) => s.parse().unwrap_or(0),
            WireValue::Array(_) | WireValue::Object(_) => 0,
        }
    }

    fn to_wire(&self) -> WireValue {
        WireValue::Int(*self)
    }
}

impl Coerce for f64 {
    const TARGET: Target = Target::Float;

    fn coerce(origin: &WireValue) -> Self {
        match origin {
            WireValue::Absent => 0.0,
            WireValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            WireValue::Int(i) => *i as f64,
            WireValue::UInt(u) => *u as f64,
            WireValue::Float(x) => *x,
            WireValue::String(s) => s.parse().unwrap_or(0.0),
            WireValue::Array(_) | WireValue::Object(_) => 0.0,
        }
    }

    fn to_wire(&self) -> WireValue {
        WireValue::Float(*self)
    }
}
