//! Debug rendering for objects
//!
//! Every category renders in two layouts: the spaced `DebugString`
//! (`{ key : val }`) and the compact `ShortDebugString` (`{key:val}`).
//! The dump form streams the compact layout into any [`fmt::Write`].

use std::fmt::{self, Write};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugConfig {
    /// Spaces around brackets, separators and key/value colons
    pub spaced: bool,
    /// Real numbers needing more fractional digits than this switch to
    /// exponent notation
    pub max_decimal_places: u32,
    /// Containers nested at or below this depth render as `...`
    pub max_depth: Option<usize>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::debug()
    }
}

impl DebugConfig {
    pub const DEFAULT_DECIMAL_PLACES: u32 = 20;

    /// Layout of `DebugString`
    pub const fn debug() -> Self {
        Self {
            spaced: true,
            max_decimal_places: Self::DEFAULT_DECIMAL_PLACES,
            max_depth: None,
        }
    }

    /// Layout of `ShortDebugString` and of the dump form
    pub const fn short() -> Self {
        Self {
            spaced: false,
            max_decimal_places: Self::DEFAULT_DECIMAL_PLACES,
            max_depth: None,
        }
    }

    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub const fn with_max_decimal_places(mut self, places: u32) -> Self {
        self.max_decimal_places = places;
        self
    }

    fn truncated(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    fn item_separator(&self) -> &'static str {
        if self.spaced { ", " } else { "," }
    }

    fn key_separator(&self) -> &'static str {
        if self.spaced { " : " } else { ":" }
    }
}

/// Object-safe rendering hook shared by every category
pub trait DebugRender {
    fn render(&self, out: &mut dyn Write, cfg: &DebugConfig, depth: usize) -> fmt::Result;
}

impl DebugRender for str {
    fn render(&self, out: &mut dyn Write, _cfg: &DebugConfig, _depth: usize) -> fmt::Result {
        write_quoted(out, self)
    }
}

/// Write `text` in double quotes with quotes, backslashes and control
/// characters escaped
pub(crate) fn write_quoted(out: &mut dyn Write, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in text.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c.is_control() => write!(out, "\\u{{{:x}}}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

pub(crate) fn write_sequence<'a, T, I>(
    out: &mut dyn Write,
    cfg: &DebugConfig,
    depth: usize,
    items: I,
) -> fmt::Result
where
    T: DebugRender + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if cfg.truncated(depth) {
        return out.write_str("[...]");
    }
    out.write_char('[')?;
    let mut empty = true;
    for item in items {
        if empty {
            if cfg.spaced {
                out.write_char(' ')?;
            }
        } else {
            out.write_str(cfg.item_separator())?;
        }
        empty = false;
        item.render(out, cfg, depth + 1)?;
    }
    if !empty && cfg.spaced {
        out.write_char(' ')?;
    }
    out.write_char(']')
}

pub(crate) fn write_mapping<'k, 'v, K, V, I>(
    out: &mut dyn Write,
    cfg: &DebugConfig,
    depth: usize,
    entries: I,
) -> fmt::Result
where
    K: DebugRender + ?Sized + 'k,
    V: DebugRender + ?Sized + 'v,
    I: IntoIterator<Item = (&'k K, &'v V)>,
{
    if cfg.truncated(depth) {
        return out.write_str("{...}");
    }
    out.write_char('{')?;
    let mut empty = true;
    for (key, value) in entries {
        if empty {
            if cfg.spaced {
                out.write_char(' ')?;
            }
        } else {
            out.write_str(cfg.item_separator())?;
        }
        empty = false;
        key.render(out, cfg, depth + 1)?;
        out.write_str(cfg.key_separator())?;
        value.render(out, cfg, depth + 1)?;
    }
    if !empty && cfg.spaced {
        out.write_char(' ')?;
    }
    out.write_char('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(text: &str) -> String {
        let mut out = String::new();
        write_quoted(&mut out, text).unwrap();
        out
    }

    #[test]
    fn test_quoting() {
        assert_eq!(quoted("abc"), "\"abc\"");
        assert_eq!(quoted("a\"b"), "\"a\\\"b\"");
        assert_eq!(quoted("a\\b\n"), "\"a\\\\b\\n\"");
    }

    #[test]
    fn test_sequence_layout() {
        let items = ["a", "b"];
        let mut spaced = String::new();
        write_sequence(&mut spaced, &DebugConfig::debug(), 0, items.iter().copied()).unwrap();
        assert_eq!(spaced, "[ \"a\", \"b\" ]");

        let mut short = String::new();
        write_sequence(&mut short, &DebugConfig::short(), 0, items.iter().copied()).unwrap();
        assert_eq!(short, "[\"a\",\"b\"]");

        let mut empty = String::new();
        write_sequence::<str, _>(&mut empty, &DebugConfig::debug(), 0, []).unwrap();
        assert_eq!(empty, "[]");
    }

    #[test]
    fn test_depth_limit() {
        let cfg = DebugConfig::short().with_max_depth(0);
        let mut out = String::new();
        write_mapping(&mut out, &cfg, 0, [("k", "v")]).unwrap();
        assert_eq!(out, "{...}");
    }
}
