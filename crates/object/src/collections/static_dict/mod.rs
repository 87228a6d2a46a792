//! The StaticDict category
//!
//! A static dictionary is a plain struct whose key set and field types are
//! fixed when it is declared with [`static_dict!`](crate::static_dict).
//! The macro generates the key table and a `match`-based key to slot
//! lookup, so dynamic access by key or by position is an index lookup
//! followed by a field access.
//!
//! Every field is reachable through the object-safe [`Field`] trait,
//! which reconciles the heterogeneous field types behind one dynamic
//! surface. [`StaticDictObject`] erases the concrete struct so it can be
//! stored inside an [`Object`].

use std::any::Any;
use std::fmt;
use std::iter::FusedIterator;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender, write_mapping, write_quoted};
use crate::core::object::Object;
use crate::core::traits::BaseObject;
use crate::error::{ValueError, ValueResult};

// ==================== Field ====================

/// Dynamic view of one static dictionary field
pub trait Field: DebugRender + Any {
    /// Copy of the field value as a type-erased handle
    fn object(&self) -> Object;

    /// Replace the field value. Numeric fields take any representation
    /// that fits their range; other fields need the exact type.
    fn store(&mut self, value: Object) -> ValueResult<()>;

    fn field_category(&self) -> Category;

    fn field_type_name(&self) -> &'static str;

    /// Equality against another field of any type
    fn equals(&self, other: &dyn Field) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: BaseObject + 'static> Field for T {
    fn object(&self) -> Object {
        self.to_object()
    }

    fn store(&mut self, value: Object) -> ValueResult<()> {
        self.assign_object(value)
    }

    fn field_category(&self) -> Category {
        self.category()
    }

    fn field_type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn equals(&self, other: &dyn Field) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(same) => self == same,
            None => self.to_object() == other.object(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<'a> dyn Field + 'a {
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl fmt::Debug for dyn Field + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &DebugConfig::debug(), 0)
    }
}

fn missing_key(key: &str) -> ValueError {
    let mut quoted = String::new();
    write_quoted(&mut quoted, key).ok();
    ValueError::key_error(quoted)
}

// ==================== StaticDict ====================

/// A struct with a fixed key set, declared with `static_dict!`
pub trait StaticDict: BaseObject + 'static {
    /// Keys in declaration order
    const KEYS: &'static [&'static str];

    /// Position of `key` in [`StaticDict::KEYS`]
    fn index_of(key: &str) -> Option<usize>;

    fn field(&self, index: usize) -> Option<&dyn Field>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Field>;

    fn len(&self) -> usize {
        Self::KEYS.len()
    }

    fn is_empty(&self) -> bool {
        Self::KEYS.is_empty()
    }

    fn has_key(&self, key: &str) -> bool {
        Self::index_of(key).is_some()
    }

    fn at(&self, key: &str) -> ValueResult<&dyn Field> {
        Self::index_of(key)
            .and_then(|index| self.field(index))
            .ok_or_else(|| missing_key(key))
    }

    fn at_mut(&mut self, key: &str) -> ValueResult<&mut dyn Field> {
        match Self::index_of(key) {
            Some(index) => self.field_mut(index).ok_or_else(|| missing_key(key)),
            None => Err(missing_key(key)),
        }
    }

    fn at_index(&self, index: usize) -> ValueResult<&dyn Field> {
        self.field(index)
            .ok_or_else(|| ValueError::index_error(index, Self::KEYS.len()))
    }

    fn at_index_mut(&mut self, index: usize) -> ValueResult<&mut dyn Field> {
        self.field_mut(index)
            .ok_or_else(|| ValueError::index_error(index, Self::KEYS.len()))
    }

    /// Store `value` under `key` with a checked downcast to the field type
    fn set(&mut self, key: &str, value: impl Into<Object>) -> ValueResult<()> {
        self.at_mut(key)?.store(value.into())
    }

    /// `(key, field)` pairs in declaration order
    fn entries(&self) -> Entries<'_> {
        Entries::new(self)
    }
}

// ==================== Type erasure ====================

trait ErasedStaticDict: fmt::Debug {
    fn keys(&self) -> &'static [&'static str];
    fn lookup(&self, key: &str) -> Option<usize>;
    fn field_at(&self, index: usize) -> Option<&dyn Field>;
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Field>;
    fn type_name(&self) -> &'static str;
    fn clone_box(&self) -> Box<dyn ErasedStaticDict>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: StaticDict> ErasedStaticDict for T {
    fn keys(&self) -> &'static [&'static str] {
        T::KEYS
    }

    fn lookup(&self, key: &str) -> Option<usize> {
        T::index_of(key)
    }

    fn field_at(&self, index: usize) -> Option<&dyn Field> {
        self.field(index)
    }

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Field> {
        self.field_mut(index)
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn clone_box(&self) -> Box<dyn ErasedStaticDict> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Iterator over the `(key, field)` pairs of a static dictionary
pub struct Entries<'a> {
    dict: &'a dyn ErasedStaticDict,
    index: usize,
}

impl<'a> Entries<'a> {
    fn new<T: StaticDict>(dict: &'a T) -> Self {
        Self { dict, index: 0 }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'static str, &'a dyn Field);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.dict.keys().get(self.index).copied()?;
        let field = self.dict.field_at(self.index)?;
        self.index += 1;
        Some((key, field))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dict.keys().len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

/// A static dictionary of any declared shape, stored inside [`Object`]
pub struct StaticDictObject(Box<dyn ErasedStaticDict>);

impl StaticDictObject {
    pub fn new<T: StaticDict>(dict: T) -> Self {
        Self(Box::new(dict))
    }

    pub fn keys(&self) -> &'static [&'static str] {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Name of the declared struct
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.0.lookup(key).is_some()
    }

    pub fn at(&self, key: &str) -> ValueResult<&dyn Field> {
        self.0
            .lookup(key)
            .and_then(|index| self.0.field_at(index))
            .ok_or_else(|| missing_key(key))
    }

    pub fn at_mut(&mut self, key: &str) -> ValueResult<&mut dyn Field> {
        match self.0.lookup(key) {
            Some(index) => self.0.field_at_mut(index).ok_or_else(|| missing_key(key)),
            None => Err(missing_key(key)),
        }
    }

    pub fn at_index(&self, index: usize) -> ValueResult<&dyn Field> {
        self.0
            .field_at(index)
            .ok_or_else(|| ValueError::index_error(index, self.len()))
    }

    pub fn at_index_mut(&mut self, index: usize) -> ValueResult<&mut dyn Field> {
        let len = self.len();
        self.0
            .field_at_mut(index)
            .ok_or_else(|| ValueError::index_error(index, len))
    }

    pub fn set(&mut self, key: &str, value: impl Into<Object>) -> ValueResult<()> {
        self.at_mut(key)?.store(value.into())
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            dict: self.0.as_ref(),
            index: 0,
        }
    }

    pub fn downcast_ref<T: StaticDict>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: StaticDict>(&mut self) -> Option<&mut T> {
        self.0.as_any_mut().downcast_mut()
    }

    /// Checked conversion back into the declared struct
    pub fn to_typed<T: StaticDict>(&self) -> ValueResult<T> {
        self.downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| ValueError::type_error(T::TYPE_NAME, self.type_name()))
    }
}

impl Clone for StaticDictObject {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl fmt::Debug for StaticDictObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Positional: same number of entries and pairwise equal values
impl PartialEq for StaticDictObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries()
                .zip(other.entries())
                .all(|((_, a), (_, b))| a.equals(b))
    }
}

impl DebugRender for StaticDictObject {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        write_mapping(out, cfg, depth, self.entries())
    }
}

impl BaseObject for StaticDictObject {
    const TYPE_NAME: &'static str = "StaticDict";

    fn category(&self) -> Category {
        Category::StaticDict
    }

    fn less(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported("<", "StaticDict", "StaticDict"))
    }

    fn greater(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported(">", "StaticDict", "StaticDict"))
    }

    fn into_object(self) -> Object {
        Object::StaticDict(self)
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::StaticDict(dict) => Ok(dict),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl fmt::Display for StaticDictObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

// ==================== Macro support ====================

#[doc(hidden)]
pub fn render_static_dict<T: StaticDict>(
    dict: &T,
    out: &mut dyn fmt::Write,
    cfg: &DebugConfig,
    depth: usize,
) -> fmt::Result {
    write_mapping(out, cfg, depth, dict.entries())
}

#[doc(hidden)]
pub fn static_dict_from_object<T: StaticDict>(object: Object) -> ValueResult<T> {
    match object {
        Object::StaticDict(dict) => dict.to_typed(),
        other => Err(ValueError::type_error(T::TYPE_NAME, other.category_name())),
    }
}

#[doc(hidden)]
pub fn static_dict_not_orderable(op: &str) -> ValueError {
    ValueError::unsupported(op, "StaticDict", "StaticDict")
}

/// Declare a static dictionary: a struct with a fixed set of string keys,
/// each bound to a field of a fixed object type.
///
/// ```
/// use nebula_object::prelude::*;
///
/// nebula_object::static_dict! {
///     pub struct Endpoint {
///         "host" => host: Text,
///         "port" => port: UInt16,
///     }
/// }
///
/// let mut endpoint = Endpoint::default();
/// endpoint.set("port", 8080i32).unwrap();
/// assert_eq!(endpoint.port, UInt16::new(8080));
/// assert!(endpoint.set("port", -1i32).is_err());
/// assert!(endpoint.at("missing").is_err());
/// ```
#[macro_export]
macro_rules! static_dict {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $key:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            $( pub $field: $ty, )*
        }

        const _: () = {
            #[allow(non_camel_case_types)]
            enum Slot {
                $( $field, )*
            }

            impl $crate::collections::StaticDict for $name {
                const KEYS: &'static [&'static str] = &[$( $key ),*];

                fn index_of(key: &str) -> ::core::option::Option<usize> {
                    match key {
                        $( $key => ::core::option::Option::Some(Slot::$field as usize), )*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field(
                    &self,
                    index: usize,
                ) -> ::core::option::Option<&dyn $crate::collections::Field> {
                    match index {
                        $( i if i == Slot::$field as usize => {
                            ::core::option::Option::Some(&self.$field)
                        } )*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field_mut(
                    &mut self,
                    index: usize,
                ) -> ::core::option::Option<&mut dyn $crate::collections::Field> {
                    match index {
                        $( i if i == Slot::$field as usize => {
                            ::core::option::Option::Some(&mut self.$field)
                        } )*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl $crate::core::display::DebugRender for $name {
                fn render(
                    &self,
                    out: &mut dyn ::core::fmt::Write,
                    cfg: &$crate::core::display::DebugConfig,
                    depth: usize,
                ) -> ::core::fmt::Result {
                    $crate::collections::static_dict::render_static_dict(self, out, cfg, depth)
                }
            }

            impl $crate::core::traits::BaseObject for $name {
                const TYPE_NAME: &'static str = stringify!($name);

                fn category(&self) -> $crate::core::category::Category {
                    $crate::core::category::Category::StaticDict
                }

                fn less(&self, _other: &Self) -> $crate::error::ValueResult<bool> {
                    ::core::result::Result::Err(
                        $crate::collections::static_dict::static_dict_not_orderable("<"),
                    )
                }

                fn greater(&self, _other: &Self) -> $crate::error::ValueResult<bool> {
                    ::core::result::Result::Err(
                        $crate::collections::static_dict::static_dict_not_orderable(">"),
                    )
                }

                fn into_object(self) -> $crate::core::object::Object {
                    $crate::core::object::Object::StaticDict(
                        $crate::collections::StaticDictObject::new(self),
                    )
                }

                fn from_object(
                    object: $crate::core::object::Object,
                ) -> $crate::error::ValueResult<Self> {
                    $crate::collections::static_dict::static_dict_from_object(object)
                }
            }
        };
    };
}
