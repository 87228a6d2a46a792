//! Shortest round-trip decimal rendering of real numbers
//!
//! Fixed notation is used while the value needs no more than
//! `max_decimal_places` fractional digits and its decimal exponent lies in
//! `[-6, 21)`. Everything else uses exponent notation (`1e-20`,
//! `1.12345e120`). Integral values in fixed notation keep a trailing `.0`.

use std::fmt::{Display, LowerExp};

const MIN_FIXED_EXPONENT: i32 = -6;
const MAX_FIXED_EXPONENT: i32 = 21;

/// Format an `f64` as the shortest decimal string that parses back to it
pub fn format_real(value: f64, max_decimal_places: u32) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    format_finite(value, max_decimal_places)
}

/// Same as [`format_real`] using the shortest `f32` round-trip digits
pub fn format_real_f32(value: f32, max_decimal_places: u32) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    format_finite(value, max_decimal_places)
}

fn format_finite<T: Display + LowerExp>(value: T, max_decimal_places: u32) -> String {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    let significant = mantissa.chars().filter(char::is_ascii_digit).count() as i32;
    let fraction_digits = (significant - 1 - exponent).max(0);

    let fixed = (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent)
        && fraction_digits <= max_decimal_places as i32;

    if !fixed {
        return scientific;
    }

    let mut out = value.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(123.4567, "123.4567")]
    #[case(1.0, "1.0")]
    #[case(-2.0, "-2.0")]
    #[case(0.0, "0.0")]
    #[case(0.5, "0.5")]
    #[case(1e-20, "1e-20")]
    #[case(1.12345e120, "1.12345e120")]
    #[case(-3.5e-9, "-3.5e-9")]
    #[case(0.1 + 0.2, "0.30000000000000004")]
    #[case(1e21, "1e21")]
    #[case(123456.0, "123456.0")]
    fn formats_f64(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_real(value, 20), expected);
    }

    #[test]
    fn test_decimal_place_limit() {
        assert_eq!(format_real(0.125, 3), "0.125");
        assert_eq!(format_real(0.125, 2), "1.25e-1");
    }

    #[test]
    fn test_f32_shortest() {
        assert_eq!(format_real_f32(0.1, 20), "0.1");
        assert_eq!(format_real_f32(-1.5, 20), "-1.5");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_real(f64::NAN, 20), "nan");
        assert_eq!(format_real(f64::INFINITY, 20), "inf");
        assert_eq!(format_real(f64::NEG_INFINITY, 20), "-inf");
    }

    #[test]
    fn test_round_trip() {
        for value in [0.1, 2.5e-7, 9.87654321e15, -42.0, 6.02214076e23] {
            let text = format_real(value, 20);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }
}
