//! The Bytes category
//!
//! A growable byte string backed by `bytes::BytesMut`. Renders as a quoted
//! run of `\xhh` escapes.

use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::{BufMut, BytesMut};

use crate::codec::{PadPolicy, decode_base64, decode_hex, encode_base64, encode_hex};
use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};

/// Owned binary data, ordered lexicographically
#[derive(Debug, Clone, Default)]
pub struct Bytes {
    inner: BytesMut,
}

impl Bytes {
    pub fn new(data: Vec<u8>) -> Self {
        Self::from_slice(&data)
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            inner: BytesMut::from(data),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: BytesMut::with_capacity(capacity),
        }
    }

    /// Decode hex digits (odd length rejected, leading zero bytes kept)
    pub fn from_hex(digits: &str) -> ValueResult<Self> {
        decode_hex(digits, true, PadPolicy::Disabled).map(Self::new)
    }

    /// Lowercase hex digits of every byte
    pub fn to_hex(&self) -> String {
        encode_hex(&self.inner, true, "")
    }

    pub fn from_base64(encoded: &str) -> ValueResult<Self> {
        decode_base64(encoded).map(Self::new)
    }

    pub fn to_base64(&self) -> String {
        encode_base64(&self.inner)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.to_vec()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn at(&self, index: usize) -> ValueResult<u8> {
        self.inner
            .get(index)
            .copied()
            .ok_or_else(|| ValueError::index_error(index, self.len()))
    }

    pub fn at_mut(&mut self, index: usize) -> ValueResult<&mut u8> {
        let len = self.len();
        self.inner
            .get_mut(index)
            .ok_or_else(|| ValueError::index_error(index, len))
    }

    pub fn push(&mut self, byte: u8) {
        self.inner.put_u8(byte);
    }

    pub fn pop(&mut self) -> Option<u8> {
        let last = self.inner.last().copied()?;
        self.inner.truncate(self.inner.len() - 1);
        Some(last)
    }

    pub fn append(&mut self, data: &[u8]) {
        self.inner.extend_from_slice(data);
    }

    pub fn resize(&mut self, len: usize, fill: u8) {
        self.inner.resize(len, fill);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Whether `needle` occurs as a contiguous run
    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.inner.windows(needle.len()).any(|w| w == needle)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.inner.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.inner.ends_with(suffix)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, u8> {
        self.inner.iter_mut()
    }
}

impl PartialEq for Bytes {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Bytes {}

impl PartialOrd for Bytes {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bytes {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Hash for Bytes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl DebugRender for Bytes {
    fn render(&self, out: &mut dyn fmt::Write, _cfg: &DebugConfig, _depth: usize) -> fmt::Result {
        out.write_char('"')?;
        for byte in self.iter() {
            write!(out, "\\x{byte:02x}")?;
        }
        out.write_char('"')
    }
}

impl BaseObject for Bytes {
    const TYPE_NAME: &'static str = "Bytes";

    fn category(&self) -> Category {
        Category::Bytes
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        Ok(self < other)
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        Ok(self > other)
    }

    fn into_object(self) -> Object {
        Object::Bytes(self)
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::Bytes(bytes) => Ok(bytes),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl Hashable for Bytes {}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(data: [u8; N]) -> Self {
        Self::from_slice(&data)
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(bytes: Bytes) -> Self {
        bytes.inner.to_vec()
    }
}

impl FromIterator<u8> for Bytes {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        let bytes = Bytes::from([0x00, 0x7f, 0xab]);
        assert_eq!(bytes.debug_string(), "\"\\x00\\x7f\\xab\"");
        assert_eq!(Bytes::default().short_debug_string(), "\"\"");
    }

    #[test]
    fn test_index_access() {
        let mut bytes = Bytes::from([1, 2, 3]);
        assert_eq!(bytes.at(2).unwrap(), 3);
        *bytes.at_mut(0).unwrap() = 9;
        assert_eq!(bytes.as_slice(), &[9, 2, 3]);
        assert!(bytes.at(3).unwrap_err().is_index_error());
        assert!(bytes.at_mut(3).is_err());
    }

    #[test]
    fn test_mutation() {
        let mut bytes = Bytes::default();
        bytes.push(1);
        bytes.append(&[2, 3, 4]);
        assert_eq!(bytes.pop(), Some(4));
        bytes.resize(5, 0xff);
        assert_eq!(bytes.to_vec(), vec![1, 2, 3, 0xff, 0xff]);
        bytes.truncate(2);
        assert_eq!(bytes.len(), 2);
        bytes.clear();
        assert_eq!(bytes.pop(), None);
    }

    #[test]
    fn test_search() {
        let bytes = Bytes::from(b"object".as_slice());
        assert!(bytes.contains(b"jec"));
        assert!(bytes.contains(b""));
        assert!(!bytes.contains(b"xyz"));
        assert!(bytes.starts_with(b"ob"));
        assert!(bytes.ends_with(b"ct"));
    }

    #[test]
    fn test_iteration() {
        let mut bytes = Bytes::from([1, 2, 3]);
        for b in bytes.iter_mut() {
            *b *= 2;
        }
        let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
        assert_eq!(reversed, vec![6, 4, 2]);
    }

    #[test]
    fn test_ordering() {
        let a = Bytes::from([1, 2]);
        let b = Bytes::from([1, 3]);
        assert!(a.less(&b).unwrap());
        assert!(Bytes::from([1]).less(&a).unwrap());
        assert!(!a.greater(&b).unwrap());
    }

    #[test]
    fn test_hex_and_base64() {
        let bytes = Bytes::from([0x00, 0xde, 0xad]);
        assert_eq!(bytes.to_hex(), "00dead");
        assert_eq!(Bytes::from_hex("00DEAD").unwrap(), bytes);
        assert!(Bytes::from_hex("abc").is_err());

        let encoded = bytes.to_base64();
        assert_eq!(Bytes::from_base64(&encoded).unwrap(), bytes);
    }
}
