//! The String category
//!
//! `Text` owns a mutable UTF-8 string. Positions passed to [`Text::at`],
//! [`Text::set_at`], [`Text::resize`] and [`Text::truncate`] count
//! characters, not bytes, so no operation can split a code point.

use std::fmt;
use std::ops::Deref;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender, write_quoted};
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};

/// UTF-8 text, ordered lexicographically
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    inner: String,
}

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn as_mut_str(&mut self) -> &mut str {
        &mut self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of characters (O(n))
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Character at `index`
    pub fn at(&self, index: usize) -> ValueResult<char> {
        self.inner
            .chars()
            .nth(index)
            .ok_or_else(|| ValueError::index_error(index, self.char_count()))
    }

    /// Replace the character at `index`
    pub fn set_at(&mut self, index: usize, ch: char) -> ValueResult<()> {
        let (start, old) = self
            .inner
            .char_indices()
            .nth(index)
            .ok_or_else(|| ValueError::index_error(index, self.char_count()))?;
        let mut buf = [0u8; 4];
        self.inner
            .replace_range(start..start + old.len_utf8(), ch.encode_utf8(&mut buf));
        Ok(())
    }

    pub fn push(&mut self, ch: char) {
        self.inner.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.inner.push_str(s);
    }

    pub fn append(&mut self, other: &Text) {
        self.inner.push_str(&other.inner);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.inner.pop()
    }

    /// Grow with `fill` or cut down to exactly `chars` characters
    pub fn resize(&mut self, chars: usize, fill: char) {
        let count = self.char_count();
        if chars <= count {
            self.truncate(chars);
        } else {
            self.inner.extend(std::iter::repeat_n(fill, chars - count));
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Keep the first `chars` characters
    pub fn truncate(&mut self, chars: usize) {
        if let Some((cut, _)) = self.inner.char_indices().nth(chars) {
            self.inner.truncate(cut);
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.contains(pattern)
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.inner.starts_with(pattern)
    }

    pub fn ends_with(&self, pattern: &str) -> bool {
        self.inner.ends_with(pattern)
    }

    /// Characters front to back; `.rev()` walks them back to front
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.inner.chars()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DebugRender for Text {
    fn render(&self, out: &mut dyn fmt::Write, _cfg: &DebugConfig, _depth: usize) -> fmt::Result {
        write_quoted(out, &self.inner)
    }
}

impl BaseObject for Text {
    const TYPE_NAME: &'static str = "String";

    fn category(&self) -> Category {
        Category::String
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        Ok(self < other)
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        Ok(self > other)
    }

    fn into_object(self) -> Object {
        Object::String(self)
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::String(text) => Ok(text),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl Hashable for Text {}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self { inner: s }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self { inner: s.to_owned() }
    }
}

impl From<char> for Text {
    fn from(ch: char) -> Self {
        Self {
            inner: ch.to_string(),
        }
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.inner
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_indexing() {
        let mut text = Text::from("héllo");
        assert_eq!(text.at(1).unwrap(), 'é');
        assert!(text.at(5).unwrap_err().is_index_error());

        text.set_at(1, 'e').unwrap();
        assert_eq!(text, "hello");
        assert!(text.set_at(9, 'x').is_err());
    }

    #[test]
    fn test_push_pop_append() {
        let mut text = Text::default();
        text.push('a');
        text.push_str("bc");
        text.append(&Text::from("de"));
        assert_eq!(text.as_str(), "abcde");
        assert_eq!(text.pop(), Some('e'));
        assert_eq!(text.len(), 4);
    }

    #[test]
    fn test_resize_and_truncate() {
        let mut text = Text::from("ab");
        text.resize(4, '-');
        assert_eq!(text, "ab--");
        text.resize(1, '-');
        assert_eq!(text, "a");
        text.truncate(10);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_search() {
        let text = Text::from("object model");
        assert!(text.contains("ct m"));
        assert!(text.starts_with("obj"));
        assert!(text.ends_with("del"));
        assert!(!text.contains("xyz"));
    }

    #[test]
    fn test_reverse_iteration() {
        let text = Text::from("abc");
        let reversed: Text = text.chars().rev().collect();
        assert_eq!(reversed, "cba");
    }

    #[test]
    fn test_ordering() {
        let a = Text::from("abc");
        let b = Text::from("abd");
        assert!(a.less(&b).unwrap());
        assert!(b.greater(&a).unwrap());
        assert!(Text::from("ab").less(&a).unwrap());
        assert!(a.less_equal(&a).unwrap());
    }

    #[test]
    fn test_rendering() {
        let text = Text::from("say \"hi\"");
        assert_eq!(text.debug_string(), "\"say \\\"hi\\\"\"");
        assert_eq!(text.to_string(), "say \"hi\"");
    }

    #[test]
    fn test_downcast() {
        let obj = Text::from("x").into_object();
        assert_eq!(obj.category(), Category::String);
        assert_eq!(Text::from_object(obj).unwrap(), "x");
        let err = Text::from_object(Object::Null).unwrap_err();
        assert_eq!(err, ValueError::type_error("String", "Null"));
    }
}
