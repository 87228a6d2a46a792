//! Hashable object handles
//!
//! [`HashableObject`] owns a value of one of the hashable categories
//! (Null, Bool, Integer, Real, String, Bytes) and is the key type of the
//! type-erased [`crate::Dict`]. Hashing agrees with cross-numeric
//! equality: `Int8(1)`, `UInt64(1)`, `Double(1.0)` and `Bool(true)` are
//! the same key. NaN keys are equal to each other so a NaN key can be
//! found again.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Bytes, Null, Num, Numeric, Primitive, Text};

/// An [`Object`] restricted to the hashable categories
#[derive(Clone, Debug, Default)]
pub struct HashableObject(Object);

impl HashableObject {
    pub fn new() -> Self {
        Self(Object::Null)
    }

    /// Wrap `object`, failing with `TypeError` for container categories
    pub fn try_from_object(object: Object) -> ValueResult<Self> {
        if object.is_hashable() {
            Ok(Self(object))
        } else {
            Err(ValueError::type_error(Self::TYPE_NAME, object.category_name()))
        }
    }

    /// Wrap a value produced by a [`Hashable`] type
    pub(crate) fn from_hashable_object(object: Object) -> Self {
        debug_assert!(object.is_hashable(), "{} is not hashable", object.category_name());
        Self(object)
    }

    pub fn as_object(&self) -> &Object {
        &self.0
    }

    /// Replace the held key value
    pub fn set(&mut self, value: impl Into<HashableObject>) {
        let value = value.into();
        *self = value;
    }
}

impl Deref for HashableObject {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.0
    }
}

fn keys_equal(a: &Object, b: &Object) -> bool {
    match (a, b) {
        (Object::Numeric(x), Object::Numeric(y)) => (x.is_nan() && y.is_nan()) || x == y,
        _ => a == b,
    }
}

fn hash_key<H: Hasher>(object: &Object, state: &mut H) {
    match object {
        Object::Null => 0u8.hash(state),
        Object::Numeric(n) => {
            1u8.hash(state);
            n.hash(state);
        }
        Object::String(s) => {
            2u8.hash(state);
            s.hash(state);
        }
        Object::Bytes(b) => {
            3u8.hash(state);
            b.hash(state);
        }
        other => other.category().hash(state),
    }
}

impl PartialEq for HashableObject {
    fn eq(&self, other: &Self) -> bool {
        keys_equal(&self.0, &other.0)
    }
}

impl Eq for HashableObject {}

impl Hash for HashableObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.0, state);
    }
}

impl DebugRender for HashableObject {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        self.0.render(out, cfg, depth)
    }
}

impl BaseObject for HashableObject {
    const TYPE_NAME: &'static str = "Hashable";

    fn category(&self) -> Category {
        self.0.category()
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        self.0.less(&other.0)
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        self.0.greater(&other.0)
    }

    fn into_object(self) -> Object {
        self.0
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        Self::try_from_object(object)
    }
}

impl Hashable for HashableObject {}

impl fmt::Display for HashableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl TryFrom<Object> for HashableObject {
    type Error = ValueError;

    fn try_from(object: Object) -> ValueResult<Self> {
        Self::try_from_object(object)
    }
}

macro_rules! impl_from_hashable {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HashableObject {
                fn from(value: $ty) -> Self {
                    Self(Object::from(value))
                }
            }
        )*
    };
}

impl_from_hashable!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Null, Numeric, Text, Bytes, String,
    &str, Vec<u8>
);

impl<T: Primitive> From<Num<T>> for HashableObject {
    fn from(value: Num<T>) -> Self {
        Self(Object::from(value))
    }
}

/// A borrowed [`Object`] known to be of a hashable category
#[derive(Clone, Copy, Debug)]
pub struct HashableRef<'a>(&'a Object);

impl<'a> HashableRef<'a> {
    pub(crate) fn new(object: &'a Object) -> ValueResult<Self> {
        if object.is_hashable() {
            Ok(Self(object))
        } else {
            Err(ValueError::type_error(
                HashableObject::TYPE_NAME,
                object.category_name(),
            ))
        }
    }

    pub fn object(&self) -> &'a Object {
        self.0
    }

    /// Same hash as the owned key would have
    pub fn hash_code(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        hash_key(self.0, &mut hasher);
        hasher.finish()
    }

    pub fn to_owned_key(&self) -> HashableObject {
        HashableObject(self.0.clone())
    }
}

impl Deref for HashableRef<'_> {
    type Target = Object;

    fn deref(&self) -> &Object {
        self.0
    }
}

impl PartialEq for HashableRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        keys_equal(self.0, other.0)
    }
}

impl Eq for HashableRef<'_> {}

impl Hash for HashableRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(self.0, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::List;

    #[test]
    fn test_rejects_containers() {
        let err = HashableObject::try_from_object(Object::from(List::<Object>::new())).unwrap_err();
        assert_eq!(err, ValueError::type_error("Hashable", "List"));
        assert!(Object::from(List::<Object>::new()).as_hashable().is_err());
    }

    #[test]
    fn test_numeric_keys_unify() {
        let a = HashableObject::from(1i8);
        let b = HashableObject::from(1u64);
        let c = HashableObject::from(1.0f64);
        let d = HashableObject::from(true);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(a.hash_code(), c.hash_code());
        assert_eq!(a.hash_code(), d.hash_code());
    }

    #[test]
    fn test_keys_equal_through_float_rounding_hash_alike() {
        let int = HashableObject::from(16_777_217i64);
        let real = HashableObject::from(16_777_216.0f32);
        assert_eq!(int, real);
        assert_eq!(int.hash_code(), real.hash_code());
    }

    #[test]
    fn test_nan_key_finds_itself() {
        let a = HashableObject::from(f64::NAN);
        let b = HashableObject::from(f32::NAN);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_categories_do_not_collide() {
        assert_ne!(HashableObject::from("1"), HashableObject::from(1i32));
        assert_ne!(HashableObject::new(), HashableObject::from(0i32));
        assert_ne!(
            HashableObject::from(Bytes::from(b"a".as_slice())),
            HashableObject::from("a")
        );
    }

    #[test]
    fn test_borrowed_hash_matches_owned() {
        let owned = HashableObject::from("key");
        let object = Object::from("key");
        let borrowed = object.as_hashable().unwrap();
        assert_eq!(borrowed.hash_code(), owned.hash_code());
        assert_eq!(borrowed.to_owned_key(), owned);
    }

    #[test]
    fn test_deref_to_object() {
        let key = HashableObject::from("abc");
        assert!(key.is_string());
        assert_eq!(key.category(), Category::String);
        assert_eq!(key.short_debug_string(), "\"abc\"");
    }
}
