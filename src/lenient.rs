use std::fmt;

use serde::de::{Deserialize, Deserializer, Error};
use serde::ser::{Serialize, Serializer};

use crate::coerce::Coerce;
use crate::wire::WireValue;

/// A scalar field that tolerates mismatched wire types.
///
/// Decoding probes the node's native shape, keeps it as [`WireValue`], and
/// coerces it into the declared target. The coerced `value` is always
/// present and always valid for its type; the untouched origin drives
/// encoding, equality, and debug output, so a decode→encode round trip
/// reproduces the input rather than the coercion result.
///
/// ```
/// use serde_lenient::LenientBool;
///
/// let sex: LenientBool = serde_json::from_str("\"true\"").unwrap();
/// assert!(*sex.value());
/// assert_eq!(serde_json::to_string(&sex).unwrap(), "\"true\"");
/// ```
///
/// Record fields should pair the wrapper with `#[serde(default)]` so a
/// missing key decodes like an explicit `null`:
///
/// ```
/// use serde::Deserialize;
/// use serde_lenient::LenientInt;
///
/// #[derive(Deserialize)]
/// struct Person {
///     #[serde(default)]
///     age: LenientInt,
/// }
///
/// let person: Person = serde_json::from_str("{}").unwrap();
/// assert_eq!(*person.age.value(), 0);
/// assert!(person.age.origin().is_absent());
/// ```
#[derive(Clone)]
pub struct Lenient<T: Coerce> {
    value: T,
    origin: WireValue,
}

pub type LenientString = Lenient<String>;
pub type LenientBool = Lenient<bool>;
pub type LenientInt = Lenient<i64>;
pub type LenientFloat = Lenient<f64>;

impl<T: Coerce> Lenient<T> {
    /// Wrap a native value. The origin is the matching wire leaf, so
    /// encoding a directly constructed wrapper writes the value itself.
    pub fn new(value: T) -> Self {
        Self {
            origin: value.to_wire(),
            value,
        }
    }

    /// Wrap an observed wire value, coercing it into the target type.
    /// This is the decode path; it also backs `Default` via `Absent`.
    pub fn from_wire(origin: WireValue) -> Self {
        Self {
            value: T::coerce(&origin),
            origin,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn origin(&self) -> &WireValue {
        &self.origin
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, WireValue) {
        (self.value, self.origin)
    }
}

impl<T: Coerce> Default for Lenient<T> {
    fn default() -> Self {
        Self::from_wire(WireValue::Absent)
    }
}

impl<T: Coerce> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Lenient<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

/// Equality is structural over the origin only: wrappers decoded from `42`
/// and `"42"` coerce to the same value but are not equal.
impl<T: Coerce> PartialEq for Lenient<T> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
    }
}

impl<T: Coerce + fmt::Display> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value: {}, origin: {}", self.value, self.origin)
    }
}

impl<T: Coerce + fmt::Debug> fmt::Debug for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::TARGET.wrapper_name())
            .field("value", &self.value)
            .field("origin", &self.origin)
            .finish()
    }
}

impl<T: Coerce> Serialize for Lenient<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.origin.serialize(serializer)
    }
}

impl<'de, T: Coerce> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let origin = WireValue::deserialize(deserializer).map_err(|err| {
            D::Error::custom(format_args!(
                "{} value cannot be decoded: {err}",
                T::TARGET.wrapper_name()
            ))
        })?;
        Ok(Self::from_wire(origin))
    }
}
