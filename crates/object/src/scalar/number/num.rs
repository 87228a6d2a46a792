//! Statically-typed numeric values
//!
//! `Num<T>` holds exactly one `T`. Compound operators take a `Num` of any
//! representation and behave like the primitive itself: the right-hand
//! side is converted to `T` the way `as` does (truncating), and integer
//! arithmetic wraps. Assignment through [`Num::set`] is the checked path.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, RemAssign,
    ShlAssign, ShrAssign, SubAssign,
};

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};
use crate::scalar::number::Numeric;
use crate::scalar::number::compare;
use crate::scalar::number::primitive::{Primitive, checked_cast};

/// A numeric value fixed to the representation `T`
#[derive(Clone, Copy, Debug, Default)]
pub struct Num<T: Primitive>(T);

pub type Bool = Num<bool>;
pub type Int8 = Num<i8>;
pub type Int16 = Num<i16>;
pub type Int32 = Num<i32>;
pub type Int64 = Num<i64>;
pub type UInt8 = Num<u8>;
pub type UInt16 = Num<u16>;
pub type UInt32 = Num<u32>;
pub type UInt64 = Num<u64>;
pub type Float = Num<f32>;
pub type Double = Num<f64>;

impl<T: Primitive> Num<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> T {
        self.0
    }

    /// Read the value as `P`, range-checked
    pub fn get<P: Primitive>(&self) -> ValueResult<P> {
        checked_cast(self.0)
    }

    /// Store a value of any representation, range-checked. On failure the
    /// current value is kept.
    pub fn set<P: Primitive>(&mut self, value: P) -> ValueResult<()> {
        self.0 = checked_cast(value)?;
        Ok(())
    }

    pub fn set_num<U: Primitive>(&mut self, other: Num<U>) -> ValueResult<()> {
        self.set(other.0)
    }

    pub fn set_numeric(&mut self, other: &Numeric) -> ValueResult<()> {
        self.0 = other.get::<T>()?;
        Ok(())
    }

    pub fn to_numeric(&self) -> Numeric {
        self.0.into_numeric()
    }

    pub fn compare<U: Primitive>(&self, other: &Num<U>) -> Option<Ordering> {
        compare::compare(self.0, other.0)
    }
}

impl<T: Primitive> From<T> for Num<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Primitive> From<Num<T>> for Numeric {
    fn from(value: Num<T>) -> Self {
        value.0.into_numeric()
    }
}

impl<T: Primitive, U: Primitive> PartialEq<Num<U>> for Num<T> {
    fn eq(&self, other: &Num<U>) -> bool {
        compare::equal(self.0, other.0)
    }
}

impl<T: Primitive, U: Primitive> PartialOrd<Num<U>> for Num<T> {
    fn partial_cmp(&self, other: &Num<U>) -> Option<Ordering> {
        compare::compare(self.0, other.0)
    }
}

macro_rules! impl_eq_for_integral {
    ($($ty:ty),*) => {
        $(
            impl Eq for Num<$ty> {}
            impl Hashable for Num<$ty> {}
        )*
    };
}

impl_eq_for_integral!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

impl<T: Primitive> Hash for Num<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_numeric().hash(state);
    }
}

impl<T: Primitive> DebugRender for Num<T> {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        self.to_numeric().render(out, cfg, depth)
    }
}

impl<T: Primitive> BaseObject for Num<T> {
    const TYPE_NAME: &'static str = T::TYPE.name();

    fn category(&self) -> Category {
        T::TYPE.category()
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        Ok(compare::less(self.0, other.0))
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        Ok(compare::greater(self.0, other.0))
    }

    fn into_object(self) -> Object {
        Object::Numeric(self.to_numeric())
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match &object {
            Object::Numeric(numeric) => T::from_numeric(numeric).map(Self).ok_or_else(|| {
                ValueError::type_error(Self::TYPE_NAME, numeric.numeric_type().name())
            }),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }

    /// Range-checked: any numeric representation is accepted if it fits
    fn assign_object(&mut self, object: Object) -> ValueResult<()> {
        match object {
            Object::Numeric(numeric) => self.set_numeric(&numeric),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl<T: Primitive> fmt::Display for Num<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

// ==================== Arithmetic ====================

/// Native arithmetic of a primitive: wrapping for integers, IEEE for reals
pub trait Arith: Primitive {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Panics on integer division by zero, like the primitive operator
    fn div(self, rhs: Self) -> Self;
    fn rem(self, rhs: Self) -> Self;
    fn is_zero(self) -> bool;
}

/// Bitwise operators of the integer primitives
pub trait Bits: Arith {
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn shl(self, amount: u32) -> Self;
    fn shr(self, amount: u32) -> Self;
}

macro_rules! impl_integer_arith {
    ($($ty:ty),*) => {
        $(
            impl Arith for $ty {
                fn add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
                fn sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
                fn mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
                fn div(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
                fn rem(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }
                fn is_zero(self) -> bool { self == 0 }
            }

            impl Bits for $ty {
                fn and(self, rhs: Self) -> Self { self & rhs }
                fn or(self, rhs: Self) -> Self { self | rhs }
                fn xor(self, rhs: Self) -> Self { self ^ rhs }
                fn shl(self, amount: u32) -> Self { self.wrapping_shl(amount) }
                fn shr(self, amount: u32) -> Self { self.wrapping_shr(amount) }
            }
        )*
    };
}

impl_integer_arith!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_real_arith {
    ($($ty:ty),*) => {
        $(
            impl Arith for $ty {
                fn add(self, rhs: Self) -> Self { self + rhs }
                fn sub(self, rhs: Self) -> Self { self - rhs }
                fn mul(self, rhs: Self) -> Self { self * rhs }
                fn div(self, rhs: Self) -> Self { self / rhs }
                fn rem(self, rhs: Self) -> Self { self % rhs }
                fn is_zero(self) -> bool { self == 0.0 }
            }
        )*
    };
}

impl_real_arith!(f32, f64);

impl<T: Arith> Num<T> {
    /// `/=` that reports integer division by zero instead of panicking
    pub fn try_div_assign<U: Primitive>(&mut self, rhs: Num<U>) -> ValueResult<()> {
        let rhs = T::narrow(rhs.0.widen());
        if T::TYPE.is_integer() && rhs.is_zero() {
            return Err(ValueError::unsupported("/=", T::TYPE.name(), "zero"));
        }
        self.0 = self.0.div(rhs);
        Ok(())
    }

    /// `%=` that reports integer division by zero instead of panicking
    pub fn try_rem_assign<U: Primitive>(&mut self, rhs: Num<U>) -> ValueResult<()> {
        let rhs = T::narrow(rhs.0.widen());
        if T::TYPE.is_integer() && rhs.is_zero() {
            return Err(ValueError::unsupported("%=", T::TYPE.name(), "zero"));
        }
        self.0 = self.0.rem(rhs);
        Ok(())
    }
}

macro_rules! impl_compound_op {
    ($bound:ident: $($op:ident :: $method:ident => $apply:ident),*) => {
        $(
            impl<T: $bound, U: Primitive> $op<Num<U>> for Num<T> {
                fn $method(&mut self, rhs: Num<U>) {
                    self.0 = self.0.$apply(T::narrow(rhs.0.widen()));
                }
            }
        )*
    };
}

impl_compound_op!(Arith:
    AddAssign::add_assign => add,
    SubAssign::sub_assign => sub,
    MulAssign::mul_assign => mul,
    DivAssign::div_assign => div,
    RemAssign::rem_assign => rem
);

impl_compound_op!(Bits:
    BitAndAssign::bitand_assign => and,
    BitOrAssign::bitor_assign => or,
    BitXorAssign::bitxor_assign => xor
);

impl<T: Bits, U: Primitive> ShlAssign<Num<U>> for Num<T> {
    fn shl_assign(&mut self, rhs: Num<U>) {
        self.0 = self.0.shl(u32::narrow(rhs.0.widen()));
    }
}

impl<T: Bits, U: Primitive> ShrAssign<Num<U>> for Num<T> {
    fn shr_assign(&mut self, rhs: Num<U>) {
        self.0 = self.0.shr(u32::narrow(rhs.0.widen()));
    }
}
