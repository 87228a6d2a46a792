//! Dynamically-typed object model for Nebula
//!
//! A closed set of value categories (Null, Bool, Integer, Real, String,
//! Bytes, List, Dict, StaticDict) behind one contract, [`BaseObject`],
//! and one type-erased owning handle, [`Object`].
//!
//! Numeric values of any width and signedness compare by mathematical
//! value ([`scalar::number::compare`]); moving a value into a narrower
//! representation is range-checked ([`checked_cast`]).
//!
//! ```
//! use nebula_object::prelude::*;
//!
//! let mut dict: Dict = Dict::new();
//! dict.insert_or_assign("answer", 42i64);
//! dict.insert_or_assign(Null, List::from(vec![Object::from(1.5f64)]));
//!
//! assert_eq!(dict.at(&"answer".into()).unwrap(), &Object::from(42u8));
//! assert!(Object::from(-1i32).less(&Object::from(u32::MAX)).unwrap());
//! ```
#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod collections;
pub mod core;
pub mod error;
pub mod scalar;

pub use crate::collections::{Dict, Field, List, StaticDict, StaticDictObject};
pub use crate::core::{
    BaseObject, Category, DebugConfig, DebugRender, Hashable, HashableObject, HashableRef, Object,
};
pub use crate::error::{ValueError, ValueResult};
pub use crate::scalar::{
    Bool, Bytes, Double, Float, Int8, Int16, Int32, Int64, Num, Null, Numeric, NumericType,
    Primitive, Text, UInt8, UInt16, UInt32, UInt64, checked_cast,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{BaseObject, Category, DebugConfig, Hashable, HashableObject, Object};
    pub use crate::{Bool, Double, Float, Int8, Int16, Int32, Int64, UInt8, UInt16, UInt32, UInt64};
    pub use crate::{Bytes, Dict, List, Null, Num, Numeric, StaticDict, StaticDictObject, Text};
    pub use crate::{ValueError, ValueResult};
}
