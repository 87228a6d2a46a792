//! The eleven primitive numeric representations
//!
//! [`Primitive`] is sealed: the representation set is closed. Every
//! primitive can be widened into a [`Wide`] value without loss, which is
//! what the comparison rules and the checked assignment operate on.

use std::fmt;

use crate::core::category::Category;
use crate::error::{ValueError, ValueResult};
use crate::scalar::number::Numeric;
use crate::scalar::number::compare;

/// Tag naming one of the primitive representations
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
}

impl NumericType {
    /// All representations, narrowest integer first
    pub const ALL: [Self; 11] = [
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float,
        Self::Double,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
        }
    }

    /// Category a value of this representation reports
    pub const fn category(self) -> Category {
        match self {
            Self::Bool => Category::Bool,
            Self::Float | Self::Double => Category::Real,
            _ => Category::Integer,
        }
    }

    pub const fn is_real(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    pub const fn is_integer(self) -> bool {
        !self.is_real() && !matches!(self, Self::Bool)
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Float | Self::Double
        )
    }

    /// Width in bits (bool counts as one)
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bool => 1,
            Self::Int8 | Self::UInt8 => 8,
            Self::Int16 | Self::UInt16 => 16,
            Self::Int32 | Self::UInt32 | Self::Float => 32,
            Self::Int64 | Self::UInt64 | Self::Double => 64,
        }
    }

    /// Whether every value of `src` lies inside the representable range
    /// of `self`. Precision loss (e.g. `Int64` into `Double`) does not
    /// count, only range.
    pub const fn covers(self, src: Self) -> bool {
        if self as u8 == src as u8 || matches!(src, Self::Bool) {
            return true;
        }
        match self {
            Self::Bool => false,
            Self::Double => true,
            Self::Float => !matches!(src, Self::Double),
            _ => {
                if src.is_real() {
                    false
                } else if src.is_signed() == self.is_signed() {
                    src.bits() <= self.bits()
                } else if src.is_signed() {
                    false
                } else {
                    src.bits() < self.bits()
                }
            }
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lossless widening of any primitive
#[derive(Copy, Clone, Debug)]
pub enum Wide {
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f32),
    Double(f64),
}

impl Wide {
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Bool(b) => f64::from(u8::from(b)),
            Self::Signed(v) => v as f64,
            Self::Unsigned(v) => v as f64,
            Self::Float(v) => f64::from(v),
            Self::Double(v) => v,
        }
    }

    pub fn to_f32(self) -> f32 {
        match self {
            Self::Bool(b) => f32::from(u8::from(b)),
            Self::Signed(v) => v as f32,
            Self::Unsigned(v) => v as f32,
            Self::Float(v) => v,
            Self::Double(v) => v as f32,
        }
    }

    pub fn is_nan(self) -> bool {
        match self {
            Self::Float(v) => v.is_nan(),
            Self::Double(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn is_infinite(self) -> bool {
        match self {
            Self::Float(v) => v.is_infinite(),
            Self::Double(v) => v.is_infinite(),
            _ => false,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// One of the eleven primitive numeric representations
pub trait Primitive:
    Copy + Default + fmt::Debug + fmt::Display + PartialEq + PartialOrd + sealed::Sealed + 'static
{
    const TYPE: NumericType;
    /// Smallest finite value
    const LOWEST: Self;
    /// Largest finite value
    const MAX: Self;

    fn widen(self) -> Wide;

    /// Native `as` conversion: integers truncate, reals saturate
    fn narrow(wide: Wide) -> Self;

    fn into_numeric(self) -> Numeric;

    /// Extract the value when `numeric` holds exactly this representation
    fn from_numeric(numeric: &Numeric) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $tag:ident, $wide:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const TYPE: NumericType = NumericType::$tag;
                const LOWEST: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> Wide {
                    Wide::$wide(self.into())
                }

                #[inline]
                #[allow(trivial_numeric_casts)]
                fn narrow(wide: Wide) -> Self {
                    match wide {
                        Wide::Bool(v) => v as Self,
                        Wide::Signed(v) => v as Self,
                        Wide::Unsigned(v) => v as Self,
                        Wide::Float(v) => v as Self,
                        Wide::Double(v) => v as Self,
                    }
                }

                #[inline]
                fn into_numeric(self) -> Numeric {
                    Numeric::$tag(self)
                }

                #[inline]
                fn from_numeric(numeric: &Numeric) -> Option<Self> {
                    match *numeric {
                        Numeric::$tag(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => Int8, Signed;
    i16 => Int16, Signed;
    i32 => Int32, Signed;
    i64 => Int64, Signed;
    u8 => UInt8, Unsigned;
    u16 => UInt16, Unsigned;
    u32 => UInt32, Unsigned;
    u64 => UInt64, Unsigned;
}

macro_rules! impl_real_primitive {
    ($($ty:ty => $tag:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const TYPE: NumericType = NumericType::$tag;
                const LOWEST: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> Wide {
                    Wide::$tag(self)
                }

                #[inline]
                #[allow(trivial_numeric_casts)]
                fn narrow(wide: Wide) -> Self {
                    match wide {
                        Wide::Bool(v) => Self::from(u8::from(v)),
                        Wide::Signed(v) => v as Self,
                        Wide::Unsigned(v) => v as Self,
                        Wide::Float(v) => v as Self,
                        Wide::Double(v) => v as Self,
                    }
                }

                #[inline]
                fn into_numeric(self) -> Numeric {
                    Numeric::$tag(self)
                }

                #[inline]
                fn from_numeric(numeric: &Numeric) -> Option<Self> {
                    match *numeric {
                        Numeric::$tag(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_real_primitive! {
    f32 => Float;
    f64 => Double;
}

impl sealed::Sealed for bool {}

impl Primitive for bool {
    const TYPE: NumericType = NumericType::Bool;
    const LOWEST: Self = false;
    const MAX: Self = true;

    #[inline]
    fn widen(self) -> Wide {
        Wide::Bool(self)
    }

    #[inline]
    fn narrow(wide: Wide) -> Self {
        match wide {
            Wide::Bool(v) => v,
            Wide::Signed(v) => v != 0,
            Wide::Unsigned(v) => v != 0,
            Wide::Float(v) => v != 0.0,
            Wide::Double(v) => v != 0.0,
        }
    }

    #[inline]
    fn into_numeric(self) -> Numeric {
        Numeric::Bool(self)
    }

    #[inline]
    fn from_numeric(numeric: &Numeric) -> Option<Self> {
        match *numeric {
            Numeric::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// `2^bits` for unsigned integers, `2^(bits - 1)` for signed ones; exact in `f64`
fn integer_upper_bound(ty: NumericType) -> f64 {
    let exponent = if ty.is_signed() { ty.bits() - 1 } else { ty.bits() };
    2f64.powi(exponent as i32)
}

/// Move `src` into the representation `Dst`, refusing values outside the
/// destination's range.
///
/// When `Dst` covers the whole range of `Src` the range check is skipped
/// at compile time. Otherwise the bounds are compared with the
/// cross-representation rules so the check itself cannot overflow.
/// Infinities may move between the two real representations; NaN never
/// enters an integer or bool slot.
pub fn checked_cast<Src: Primitive, Dst: Primitive>(src: Src) -> ValueResult<Dst> {
    if const { Dst::TYPE.covers(Src::TYPE) } {
        return Ok(Dst::narrow(src.widen()));
    }

    let wide = src.widen();
    let fits = if Dst::TYPE.is_real() && (wide.is_infinite() || wide.is_nan()) {
        true
    } else if wide.is_nan() {
        false
    } else {
        let in_bounds = !(compare::less(src, Dst::LOWEST) || compare::less(Dst::MAX, src));
        // Dst::MAX may round up to a power of two in the real type, so a
        // real source also needs the exclusive upper bound
        if Src::TYPE.is_real() && Dst::TYPE.is_integer() {
            in_bounds && wide.to_f64() < integer_upper_bound(Dst::TYPE)
        } else {
            in_bounds
        }
    };

    if fits {
        Ok(Dst::narrow(wide))
    } else {
        tracing::trace!(
            source = %Src::TYPE,
            target = %Dst::TYPE,
            value = %src,
            "rejected out-of-range numeric assignment"
        );
        Err(ValueError::type_error(
            Dst::TYPE.name(),
            format!("{} {src}", Src::TYPE.name()),
        ))
    }
}
