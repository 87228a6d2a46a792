//! The type-erased object handle
//!
//! [`Object`] owns exactly one value of any category. It is never empty:
//! the default handle holds `Null`. Cloning deep-copies the payload.
//!
//! Equality never fails: values of incompatible categories are simply not
//! equal. Ordering between incompatible categories fails with
//! `UnsupportedOperation` naming both categories.

use std::fmt;

use crate::collections::{Dict, List, StaticDictObject};
use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::hashable::{HashableObject, HashableRef};
use crate::core::traits::BaseObject;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Bytes, Null, Num, Numeric, Primitive, Text};

/// A value of any category
#[derive(Clone, Debug, Default)]
pub enum Object {
    #[default]
    Null,
    Numeric(Numeric),
    String(Text),
    Bytes(Bytes),
    List(List),
    Dict(Dict),
    StaticDict(StaticDictObject),
}

impl Object {
    /// Create a handle holding `Null`
    pub fn new() -> Self {
        Self::Null
    }

    // ==================== Type checks ====================

    /// Check if the value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value is a Bool, Integer or Real
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Check if the value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if the value is a byte string
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// Check if the value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Check if the value is a dictionary
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }

    /// Check if the value is a static dictionary
    pub fn is_static_dict(&self) -> bool {
        matches!(self, Self::StaticDict(_))
    }

    /// Check if the value can key a dictionary
    pub fn is_hashable(&self) -> bool {
        self.category().is_hashable()
    }

    // ==================== Typed views ====================

    fn mismatch(&self, expected: &str) -> ValueError {
        ValueError::type_error(expected, self.category_name())
    }

    /// View as `Null`, or `TypeError`
    pub fn as_null(&self) -> ValueResult<Null> {
        match self {
            Self::Null => Ok(Null),
            _ => Err(self.mismatch(Null::TYPE_NAME)),
        }
    }

    /// View as a numeric, or `TypeError`
    pub fn as_numeric(&self) -> ValueResult<&Numeric> {
        match self {
            Self::Numeric(n) => Ok(n),
            _ => Err(self.mismatch(Numeric::TYPE_NAME)),
        }
    }

    /// Mutable numeric view
    pub fn as_numeric_mut(&mut self) -> ValueResult<&mut Numeric> {
        match self {
            Self::Numeric(n) => Ok(n),
            _ => Err(self.mismatch(Numeric::TYPE_NAME)),
        }
    }

    /// View as a string, or `TypeError`
    pub fn as_string(&self) -> ValueResult<&Text> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch(Text::TYPE_NAME)),
        }
    }

    /// Mutable string view
    pub fn as_string_mut(&mut self) -> ValueResult<&mut Text> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch(Text::TYPE_NAME)),
        }
    }

    /// View as bytes, or `TypeError`
    pub fn as_bytes(&self) -> ValueResult<&Bytes> {
        match self {
            Self::Bytes(b) => Ok(b),
            _ => Err(self.mismatch(Bytes::TYPE_NAME)),
        }
    }

    /// Mutable bytes view
    pub fn as_bytes_mut(&mut self) -> ValueResult<&mut Bytes> {
        match self {
            Self::Bytes(b) => Ok(b),
            _ => Err(self.mismatch(Bytes::TYPE_NAME)),
        }
    }

    /// View as a list, or `TypeError`
    pub fn as_list(&self) -> ValueResult<&List> {
        match self {
            Self::List(l) => Ok(l),
            _ => Err(self.mismatch(List::<Self>::TYPE_NAME)),
        }
    }

    /// Mutable list view
    pub fn as_list_mut(&mut self) -> ValueResult<&mut List> {
        match self {
            Self::List(l) => Ok(l),
            _ => Err(self.mismatch(List::<Self>::TYPE_NAME)),
        }
    }

    /// View as a dictionary, or `TypeError`
    pub fn as_dict(&self) -> ValueResult<&Dict> {
        match self {
            Self::Dict(d) => Ok(d),
            _ => Err(self.mismatch(Dict::<HashableObject, Self>::TYPE_NAME)),
        }
    }

    /// Mutable dictionary view
    pub fn as_dict_mut(&mut self) -> ValueResult<&mut Dict> {
        match self {
            Self::Dict(d) => Ok(d),
            _ => Err(self.mismatch(Dict::<HashableObject, Self>::TYPE_NAME)),
        }
    }

    /// View as a static dictionary, or `TypeError`
    pub fn as_static_dict(&self) -> ValueResult<&StaticDictObject> {
        match self {
            Self::StaticDict(d) => Ok(d),
            _ => Err(self.mismatch(StaticDictObject::TYPE_NAME)),
        }
    }

    /// Mutable static dictionary view
    pub fn as_static_dict_mut(&mut self) -> ValueResult<&mut StaticDictObject> {
        match self {
            Self::StaticDict(d) => Ok(d),
            _ => Err(self.mismatch(StaticDictObject::TYPE_NAME)),
        }
    }

    /// Borrow as a hashable value; containers fail with `TypeError`
    pub fn as_hashable(&self) -> ValueResult<HashableRef<'_>> {
        HashableRef::new(self)
    }

    /// Checked downcast of a copy into any concrete type
    pub fn get<T: BaseObject>(&self) -> ValueResult<T> {
        T::from_object(self.clone())
    }

    /// Replace the held value. The new payload is fully built before the
    /// old one is dropped.
    pub fn set(&mut self, value: impl Into<Object>) {
        let value = value.into();
        *self = value;
    }

    /// Move the value out, leaving `Null` behind
    pub fn take(&mut self) -> Object {
        std::mem::take(self)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Numeric(a), Self::Numeric(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::StaticDict(a), Self::StaticDict(b)) => a == b,
            _ => false,
        }
    }
}

impl DebugRender for Object {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        match self {
            Self::Null => Null.render(out, cfg, depth),
            Self::Numeric(n) => n.render(out, cfg, depth),
            Self::String(s) => s.render(out, cfg, depth),
            Self::Bytes(b) => b.render(out, cfg, depth),
            Self::List(l) => l.render(out, cfg, depth),
            Self::Dict(d) => d.render(out, cfg, depth),
            Self::StaticDict(d) => d.render(out, cfg, depth),
        }
    }
}

impl BaseObject for Object {
    const TYPE_NAME: &'static str = "Object";

    fn category(&self) -> Category {
        match self {
            Self::Null => Category::Null,
            Self::Numeric(n) => n.category(),
            Self::String(_) => Category::String,
            Self::Bytes(_) => Category::Bytes,
            Self::List(_) => Category::List,
            Self::Dict(_) => Category::Dict,
            Self::StaticDict(_) => Category::StaticDict,
        }
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        match (self, other) {
            (Self::Null, Self::Null) => Null.less(&Null),
            (Self::Numeric(a), Self::Numeric(b)) => a.less(b),
            (Self::String(a), Self::String(b)) => a.less(b),
            (Self::Bytes(a), Self::Bytes(b)) => a.less(b),
            (Self::List(a), Self::List(b)) => a.less(b),
            (Self::Dict(a), Self::Dict(b)) => a.less(b),
            (Self::StaticDict(a), Self::StaticDict(b)) => a.less(b),
            _ => Err(ValueError::unsupported(
                "<",
                self.category_name(),
                other.category_name(),
            )),
        }
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        match (self, other) {
            (Self::Null, Self::Null) => Null.greater(&Null),
            (Self::Numeric(a), Self::Numeric(b)) => a.greater(b),
            (Self::String(a), Self::String(b)) => a.greater(b),
            (Self::Bytes(a), Self::Bytes(b)) => a.greater(b),
            (Self::List(a), Self::List(b)) => a.greater(b),
            (Self::Dict(a), Self::Dict(b)) => a.greater(b),
            (Self::StaticDict(a), Self::StaticDict(b)) => a.greater(b),
            _ => Err(ValueError::unsupported(
                ">",
                self.category_name(),
                other.category_name(),
            )),
        }
    }

    fn into_object(self) -> Object {
        self
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        Ok(object)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

// ==================== Conversions ====================

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Self::Numeric(value.into_numeric())
                }
            }
        )*
    };
}

impl_from_primitive!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Primitive> From<Num<T>> for Object {
    fn from(value: Num<T>) -> Self {
        Self::Numeric(value.to_numeric())
    }
}

impl From<Null> for Object {
    fn from(_: Null) -> Self {
        Self::Null
    }
}

impl From<()> for Object {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<Numeric> for Object {
    fn from(value: Numeric) -> Self {
        Self::Numeric(value)
    }
}

impl From<Text> for Object {
    fn from(value: Text) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::String(Text::from(value))
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::String(Text::from(value))
    }
}

impl From<Bytes> for Object {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for Object {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Bytes::new(value))
    }
}

impl<T: BaseObject> From<List<T>> for Object {
    fn from(value: List<T>) -> Self {
        value.into_object()
    }
}

impl<K, V> From<Dict<K, V>> for Object
where
    Dict<K, V>: BaseObject,
{
    fn from(value: Dict<K, V>) -> Self {
        value.into_object()
    }
}

impl From<StaticDictObject> for Object {
    fn from(value: StaticDictObject) -> Self {
        Self::StaticDict(value)
    }
}

impl From<HashableObject> for Object {
    fn from(value: HashableObject) -> Self {
        value.into_object()
    }
}

impl<T: Into<Object>> From<Option<T>> for Object {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Int8, Int64};

    #[test]
    fn test_default_is_null() {
        let obj = Object::default();
        assert!(obj.is_null());
        assert_eq!(obj.category(), Category::Null);
        assert_eq!(Object::new(), Object::Null);
    }

    #[test]
    fn test_typed_views() {
        let obj = Object::from("abc");
        assert_eq!(obj.as_string().unwrap(), "abc");

        let err = obj.as_numeric().unwrap_err();
        assert_eq!(err, ValueError::type_error("Numeric", "String"));
        assert!(obj.as_list().unwrap_err().is_type_error());
        assert!(obj.as_null().is_err());
        assert!(Object::Null.as_null().is_ok());
    }

    #[test]
    fn test_mutable_view() {
        let mut obj = Object::from(List::from(vec![Object::from(1i32)]));
        obj.as_list_mut().unwrap().push(Object::from(2i32));
        assert_eq!(obj.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_cross_category_equality() {
        assert_eq!(Object::from(1i8), Object::from(1.0f64));
        assert_eq!(Object::from(true), Object::from(1u64));
        assert_ne!(Object::from(1i32), Object::from("1"));
        assert_ne!(Object::Null, Object::from(0i32));
    }

    #[test]
    fn test_cross_category_ordering() {
        assert!(Object::from(-1i32).less(&Object::from(u32::MAX)).unwrap());
        assert!(Object::from(false).less(&Object::from(0.5f32)).unwrap());

        let err = Object::Null.less(&Object::from("x")).unwrap_err();
        assert_eq!(err, ValueError::unsupported("<", "Null", "String"));
        let err = Object::from("x").greater(&Object::from(1i32)).unwrap_err();
        assert_eq!(err, ValueError::unsupported(">", "String", "Integer"));
        assert!(Object::from("x").less_equal(&Object::Null).is_err());
    }

    #[test]
    fn test_set_replaces_value() {
        let mut obj = Object::default();
        obj.set(Int64::new(5));
        assert_eq!(obj.category(), Category::Integer);
        obj.set("text");
        assert!(obj.is_string());
        let taken = obj.take();
        assert!(obj.is_null());
        assert_eq!(taken, Object::from("text"));
    }

    #[test]
    fn test_typed_get() {
        let obj = Object::from(Int8::new(7));
        assert_eq!(obj.get::<Int8>().unwrap(), Int8::new(7));
        assert!(obj.get::<Text>().unwrap_err().is_type_error());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Object::from(List::from(vec![Object::from("a")]));
        let mut copy = original.clone();
        copy.as_list_mut().unwrap().push(Object::Null);
        assert_eq!(original.as_list().unwrap().len(), 1);
        assert_eq!(copy.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_option_conversion() {
        assert!(Object::from(None::<i32>).is_null());
        assert_eq!(Object::from(Some(3i32)), Object::from(3i32));
    }
}
