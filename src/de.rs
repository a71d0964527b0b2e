use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::wire::{Object, WireValue};

/// Classification happens on the node's native wire type: the deserializer
/// reports what it actually read, so a quoted `"true"` arrives at
/// `visit_str`, never `visit_bool`. Numeric-looking strings stay strings
/// here; turning them into numbers is the coercion table's business.
impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WireVisitor)
    }
}

struct WireVisitor;

impl<'de> Visitor<'de> for WireVisitor {
    type Value = WireValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any wire value")
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(WireValue::Bool(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(WireValue::Int(v))
    }

    // Non-negative integers classify signed-first; only magnitudes beyond
    // i64::MAX land in UInt.
    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        if v <= i64::MAX as u64 {
            Ok(WireValue::Int(v as i64))
        } else {
            Ok(WireValue::UInt(v))
        }
    }

    fn visit_i128<E: Error>(self, v: i128) -> Result<Self::Value, E> {
        if let Ok(i) = i64::try_from(v) {
            Ok(WireValue::Int(i))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(WireValue::UInt(u))
        } else {
            Ok(WireValue::Float(v as f64))
        }
    }

    fn visit_u128<E: Error>(self, v: u128) -> Result<Self::Value, E> {
        if let Ok(i) = i64::try_from(v) {
            Ok(WireValue::Int(i))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(WireValue::UInt(u))
        } else {
            Ok(WireValue::Float(v as f64))
        }
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(WireValue::Float(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(WireValue::String(v.to_owned()))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(WireValue::String(v))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(WireValue::Absent)
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(WireValue::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        WireValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<WireValue>()? {
            items.push(item);
        }
        Ok(WireValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Object::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, WireValue>()? {
            entries.insert(key, value);
        }
        Ok(WireValue::Object(entries))
    }
}
