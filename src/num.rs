//! Decimal text for wire numbers, shared by the String coercion rules and
//! [`WireValue`](crate::WireValue)'s display rendering.

pub(crate) fn format_i64(value: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_string()
}

pub(crate) fn format_u64(value: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_string()
}

pub(crate) fn format_f64(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_f64, format_i64, format_u64};

    #[rstest::rstest]
    fn test_integer_formatting() {
        assert_eq!(format_i64(0), "0");
        assert_eq!(format_i64(-42), "-42");
        assert_eq!(format_i64(i64::MIN), "-9223372036854775808");
        assert_eq!(format_u64(u64::MAX), "18446744073709551615");
    }

    #[rstest::rstest]
    fn test_float_formatting() {
        assert_eq!(format_f64(180.0), "180.0");
        assert_eq!(format_f64(1.5), "1.5");
        assert_eq!(format_f64(-0.25), "-0.25");
    }
}
