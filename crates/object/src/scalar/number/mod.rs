//! Numeric categories (Bool, Integer, Real)
//!
//! [`Numeric`] is the erased numeric value: one variant per primitive
//! representation. [`Num`] is its statically-typed counterpart. Both
//! compare through [`compare`], so values of any two representations
//! order and equate by their mathematical value.

pub mod compare;
mod num;
mod primitive;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use num::{
    Arith, Bits, Bool, Double, Float, Int8, Int16, Int32, Int64, Num, UInt8, UInt16, UInt32,
    UInt64,
};
pub use primitive::{NumericType, Primitive, Wide, checked_cast};

use crate::codec::{format_real, format_real_f32};
use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::object::Object;
use crate::core::traits::BaseObject;
use crate::error::{ValueError, ValueResult};

/// A value of one of the eleven primitive representations
#[derive(Clone, Copy, Debug)]
pub enum Numeric {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
}

/// Run `$body` with `$v` bound to the held primitive
macro_rules! with_value {
    ($numeric:expr, $v:ident => $body:expr) => {
        match $numeric {
            Numeric::Bool($v) => $body,
            Numeric::Int8($v) => $body,
            Numeric::Int16($v) => $body,
            Numeric::Int32($v) => $body,
            Numeric::Int64($v) => $body,
            Numeric::UInt8($v) => $body,
            Numeric::UInt16($v) => $body,
            Numeric::UInt32($v) => $body,
            Numeric::UInt64($v) => $body,
            Numeric::Float($v) => $body,
            Numeric::Double($v) => $body,
        }
    };
}

impl Numeric {
    pub fn numeric_type(&self) -> NumericType {
        with_value!(*self, v => primitive_type(v))
    }

    pub fn category(&self) -> Category {
        self.numeric_type().category()
    }

    pub fn widen(&self) -> Wide {
        with_value!(*self, v => v.widen())
    }

    pub fn is_nan(&self) -> bool {
        self.widen().is_nan()
    }

    /// Read the value as `P`, failing with `TypeError` when it lies
    /// outside `P`'s range
    pub fn get<P: Primitive>(&self) -> ValueResult<P> {
        with_value!(*self, v => checked_cast::<_, P>(v))
    }

    /// Store `value` while keeping this value's own representation.
    ///
    /// Fails with `TypeError` and leaves the current value untouched when
    /// `value` does not fit.
    pub fn set<P: Primitive>(&mut self, value: P) -> ValueResult<()> {
        match self {
            Self::Bool(slot) => *slot = checked_cast(value)?,
            Self::Int8(slot) => *slot = checked_cast(value)?,
            Self::Int16(slot) => *slot = checked_cast(value)?,
            Self::Int32(slot) => *slot = checked_cast(value)?,
            Self::Int64(slot) => *slot = checked_cast(value)?,
            Self::UInt8(slot) => *slot = checked_cast(value)?,
            Self::UInt16(slot) => *slot = checked_cast(value)?,
            Self::UInt32(slot) => *slot = checked_cast(value)?,
            Self::UInt64(slot) => *slot = checked_cast(value)?,
            Self::Float(slot) => *slot = checked_cast(value)?,
            Self::Double(slot) => *slot = checked_cast(value)?,
        }
        Ok(())
    }

    /// [`Numeric::set`] from another erased numeric
    pub fn assign(&mut self, other: &Numeric) -> ValueResult<()> {
        with_value!(*other, v => self.set(v))
    }

    /// Three-way comparison, `None` when NaN is involved
    pub fn compare(&self, other: &Numeric) -> Option<Ordering> {
        compare::compare_wide(self.widen(), other.widen())
    }

    pub fn to_f64(&self) -> f64 {
        self.widen().to_f64()
    }
}

fn primitive_type<P: Primitive>(_: P) -> NumericType {
    P::TYPE
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

/// Hash through the `f32` projection, the one conversion every comparison
/// rule agrees on, so numerics that compare equal across representations
/// (`Int8(1)`, `UInt64(1)`, `Double(1.0)`, `Bool(true)`, and also
/// `Int64(16777217)` with `Float(16777216.0)`) hash alike.
///
/// From `2^53` upwards rounding through `f64` and through `f32` can
/// disagree, and equality chains across neighbouring values, so those
/// magnitudes hash by sign only.
impl Hash for Numeric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        const CHAINED: f32 = 9_007_199_254_740_992.0; // 2^53

        let projected = self.widen().to_f32();
        if projected.is_nan() {
            2u8.hash(state);
        } else if projected.abs() >= CHAINED {
            1u8.hash(state);
            projected.is_sign_negative().hash(state);
        } else {
            0u8.hash(state);
            // folds -0.0 into 0.0
            (projected + 0.0).to_bits().hash(state);
        }
    }
}

impl DebugRender for Numeric {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, _depth: usize) -> fmt::Result {
        match *self {
            Self::Float(v) => out.write_str(&format_real_f32(v, cfg.max_decimal_places)),
            Self::Double(v) => out.write_str(&format_real(v, cfg.max_decimal_places)),
            other => with_value!(other, v => write!(out, "{v}")),
        }
    }
}

impl BaseObject for Numeric {
    const TYPE_NAME: &'static str = "Numeric";

    fn category(&self) -> Category {
        Numeric::category(self)
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        Ok(self.compare(other) == Some(Ordering::Less))
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        Ok(self.compare(other) == Some(Ordering::Greater))
    }

    fn into_object(self) -> Object {
        Object::Numeric(self)
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::Numeric(numeric) => Ok(numeric),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Numeric {
                fn from(value: $ty) -> Self {
                    value.into_numeric()
                }
            }
        )*
    };
}

impl_from_primitive!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
