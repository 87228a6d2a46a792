//! Base64 (standard alphabet, padded)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{ValueError, ValueResult};

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_base64(encoded: &str) -> ValueResult<Vec<u8>> {
    STANDARD.decode(encoded).map_err(|err| {
        tracing::debug!(error = %err, "base64 decode failed");
        ValueError::invalid_encoding("base64", err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let data = b"Hello, World!";
        let encoded = encode_base64(data);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(decode_base64(&encoded).unwrap(), data);
    }

    #[test]
    fn test_invalid() {
        assert!(decode_base64("not base64!").is_err());
    }
}
