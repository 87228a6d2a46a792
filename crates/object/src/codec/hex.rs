//! Hex encoding with leading-zero and odd-length policies

use crate::error::{ValueError, ValueResult};

/// How `decode_hex` treats input with an odd number of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadPolicy {
    /// Odd-length input is rejected
    #[default]
    Disabled,
    /// A zero nibble is prepended to the leading digit
    Front,
}

/// Encode `bytes` as lowercase hex digits after `prefix`.
///
/// With `keep_leading_zero == false` leading `0` digits are dropped; a
/// non-empty all-zero input still renders as a single `0`.
pub fn encode_hex(bytes: &[u8], keep_leading_zero: bool, prefix: &str) -> String {
    let digits = hex::encode(bytes);
    let digits = if keep_leading_zero || digits.is_empty() {
        digits.as_str()
    } else {
        match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        }
    };

    let mut out = String::with_capacity(prefix.len() + digits.len());
    out.push_str(prefix);
    out.push_str(digits);
    out
}

/// Decode hex digits (either case) into bytes.
///
/// With `keep_leading_zero_bytes == false` leading `0x00` bytes are
/// stripped from the result.
pub fn decode_hex(
    chars: &str,
    keep_leading_zero_bytes: bool,
    pad: PadPolicy,
) -> ValueResult<Vec<u8>> {
    let decoded = if chars.len() % 2 == 1 {
        match pad {
            PadPolicy::Disabled => {
                return Err(ValueError::invalid_encoding(
                    "hex",
                    format!("odd number of digits ({})", chars.len()),
                ));
            }
            PadPolicy::Front => hex::decode(format!("0{chars}")),
        }
    } else {
        hex::decode(chars)
    };

    let mut bytes = decoded.map_err(|err| {
        tracing::debug!(error = %err, "hex decode failed");
        ValueError::invalid_encoding("hex", err.to_string())
    })?;

    if !keep_leading_zero_bytes {
        let leading = bytes.iter().take_while(|b| **b == 0).count();
        bytes.drain(..leading);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_hex(&[0x00, 0x0a, 0xff], true, ""), "000aff");
        assert_eq!(encode_hex(&[0x00, 0x0a, 0xff], false, ""), "aff");
        assert_eq!(encode_hex(&[0x12], true, "0x"), "0x12");
        assert_eq!(encode_hex(&[0x00, 0x00], false, "0x"), "0x0");
        assert_eq!(encode_hex(&[], false, "0x"), "0x");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_hex("000aFF", true, PadPolicy::Disabled).unwrap(), vec![0, 0x0a, 0xff]);
        assert_eq!(decode_hex("000aff", false, PadPolicy::Disabled).unwrap(), vec![0x0a, 0xff]);
        assert_eq!(decode_hex("", true, PadPolicy::Disabled).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_odd_length() {
        let err = decode_hex("abc", true, PadPolicy::Disabled).unwrap_err();
        assert_eq!(err.code(), "OBJECT_INVALID_ENCODING");
        assert_eq!(decode_hex("abc", true, PadPolicy::Front).unwrap(), vec![0x0a, 0xbc]);
    }

    #[test]
    fn test_invalid_digit() {
        assert!(decode_hex("zz", true, PadPolicy::Disabled).is_err());
    }
}
