//! The contract shared by every object category
//!
//! [`BaseObject`] is the abstract root: category query, equality through
//! `PartialEq`, fallible ordering, conversion to and from the type-erased
//! [`Object`] handle, and the three debug renderings. [`Hashable`] narrows
//! it to the categories that can key a dictionary.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::hashable::HashableObject;
use crate::core::object::Object;
use crate::error::ValueResult;

pub trait BaseObject: Clone + fmt::Debug + PartialEq + DebugRender {
    /// Name reported as the expected type when a downcast to `Self` fails
    const TYPE_NAME: &'static str;

    fn category(&self) -> Category;

    fn category_name(&self) -> &'static str {
        self.category().name()
    }

    /// `self < other`; fails with `UnsupportedOperation` when the two
    /// values cannot be ordered
    fn less(&self, other: &Self) -> ValueResult<bool>;

    /// `self > other`
    fn greater(&self, other: &Self) -> ValueResult<bool> {
        other.less(self)
    }

    /// Always `!(self > other)`
    fn less_equal(&self, other: &Self) -> ValueResult<bool> {
        self.greater(other).map(|gt| !gt)
    }

    /// Always `!(self < other)`
    fn greater_equal(&self, other: &Self) -> ValueResult<bool> {
        self.less(other).map(|lt| !lt)
    }

    fn into_object(self) -> Object;

    fn to_object(&self) -> Object {
        self.clone().into_object()
    }

    /// Checked downcast out of the type-erased handle
    fn from_object(object: Object) -> ValueResult<Self>;

    /// Replace `self` with the value held by `object`. On failure `self`
    /// is left untouched.
    fn assign_object(&mut self, object: Object) -> ValueResult<()> {
        *self = Self::from_object(object)?;
        Ok(())
    }

    fn format_with(&self, cfg: &DebugConfig) -> String {
        let mut out = String::new();
        self.render(&mut out, cfg, 0).ok();
        out
    }

    /// Human-readable, spaced rendering: `{ key : val }`
    fn debug_string(&self) -> String {
        self.format_with(&DebugConfig::debug())
    }

    /// Compact rendering: `{key:val}`
    fn short_debug_string(&self) -> String {
        self.format_with(&DebugConfig::short())
    }

    /// Stream the compact rendering into `out`
    fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.render(out, &DebugConfig::short(), 0)
    }

    fn dump_string(&self) -> String {
        self.short_debug_string()
    }
}

/// Categories usable as dictionary keys
pub trait Hashable: BaseObject + Eq + Hash {
    fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Move into the type-erased key handle
    fn into_hashable(self) -> HashableObject {
        HashableObject::from_hashable_object(self.into_object())
    }
}
