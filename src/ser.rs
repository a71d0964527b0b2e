use serde::ser::{Serialize, Serializer};

use crate::wire::WireValue;

/// Writes the observed shape back out: `Absent` becomes the format's null,
/// scalars go through their native calls, aggregates recurse.
impl Serialize for WireValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WireValue::Absent => serializer.serialize_unit(),
            WireValue::Bool(b) => serializer.serialize_bool(*b),
            WireValue::Int(i) => serializer.serialize_i64(*i),
            WireValue::UInt(u) => serializer.serialize_u64(*u),
            WireValue::Float(x) => serializer.serialize_f64(*x),
            WireValue::String(s) => serializer.serialize_str(s),
            WireValue::Array(arr) => serializer.collect_seq(arr),
            WireValue::Object(obj) => serializer.collect_map(obj),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::wire::{Object, WireValue};

    #[rstest::rstest]
    #[case(WireValue::Absent, "null")]
    #[case(WireValue::Bool(true), "true")]
    #[case(WireValue::Int(-42), "-42")]
    #[case(WireValue::UInt(u64::MAX), "18446744073709551615")]
    #[case(WireValue::Float(180.5), "180.5")]
    #[case(WireValue::String("180.00".into()), "\"180.00\"")]
    fn test_scalar_encoding(#[case] value: WireValue, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&value).expect("encode"), expected);
    }

    #[rstest::rstest]
    fn test_aggregate_encoding() {
        let mut obj = Object::new();
        obj.insert("z".to_string(), WireValue::Absent);
        obj.insert(
            "items".to_string(),
            WireValue::Array(vec![WireValue::Int(1), WireValue::String("2".into())]),
        );
        let encoded = serde_json::to_string(&WireValue::Object(obj)).expect("encode");
        assert_eq!(encoded, "{\"z\":null,\"items\":[1,\"2\"]}");
    }

    #[rstest::rstest]
    fn test_wire_roundtrip_through_json() {
        let original = json!({"a": [1, "2", null], "b": {"c": 1.5}});
        let value = WireValue::from(original.clone());
        let encoded = serde_json::to_string(&value).expect("encode");
        let reparsed: serde_json::Value = serde_json::from_str(&encoded).expect("reparse");
        assert_eq!(reparsed, original);
    }
}
