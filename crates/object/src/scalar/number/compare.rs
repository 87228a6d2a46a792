//! Cross-width, cross-signedness numeric comparison
//!
//! Rules, in order of precedence:
//!
//! 1. either side `f64`: compare as `f64`
//! 2. either side `f32`: compare as `f32`
//! 3. either side `bool`: the bool becomes `0`/`1` of the other side's type
//! 4. same signedness: compare after widening to 64 bits
//! 5. signed vs unsigned: a negative signed value is less than every
//!    unsigned value; otherwise the signed value is reinterpreted as
//!    unsigned, which is exact once it is known to be non-negative
//!
//! `less_equal` and `greater_equal` are the negations of `greater` and
//! `less`, so any comparison against NaN makes them `true`.

use std::cmp::Ordering;

use crate::scalar::number::primitive::{Primitive, Wide};

/// Three-way comparison of two widened values, `None` when either is NaN
pub fn compare_wide(lhs: Wide, rhs: Wide) -> Option<Ordering> {
    match (lhs, rhs) {
        (Wide::Double(a), _) => a.partial_cmp(&rhs.to_f64()),
        (_, Wide::Double(b)) => lhs.to_f64().partial_cmp(&b),
        (Wide::Float(a), _) => a.partial_cmp(&rhs.to_f32()),
        (_, Wide::Float(b)) => lhs.to_f32().partial_cmp(&b),

        (Wide::Bool(a), Wide::Bool(b)) => Some(a.cmp(&b)),
        (Wide::Bool(a), Wide::Signed(b)) => Some(i64::from(a).cmp(&b)),
        (Wide::Bool(a), Wide::Unsigned(b)) => Some(u64::from(a).cmp(&b)),
        (Wide::Signed(a), Wide::Bool(b)) => Some(a.cmp(&i64::from(b))),
        (Wide::Unsigned(a), Wide::Bool(b)) => Some(a.cmp(&u64::from(b))),

        (Wide::Signed(a), Wide::Signed(b)) => Some(a.cmp(&b)),
        (Wide::Unsigned(a), Wide::Unsigned(b)) => Some(a.cmp(&b)),
        (Wide::Signed(a), Wide::Unsigned(b)) => {
            if a < 0 {
                Some(Ordering::Less)
            } else {
                Some((a as u64).cmp(&b))
            }
        }
        (Wide::Unsigned(a), Wide::Signed(b)) => {
            if b < 0 {
                Some(Ordering::Greater)
            } else {
                Some(a.cmp(&(b as u64)))
            }
        }
    }
}

#[inline]
pub fn compare<A: Primitive, B: Primitive>(a: A, b: B) -> Option<Ordering> {
    compare_wide(a.widen(), b.widen())
}

#[inline]
pub fn equal<A: Primitive, B: Primitive>(a: A, b: B) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

#[inline]
pub fn less<A: Primitive, B: Primitive>(a: A, b: B) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

#[inline]
pub fn greater<A: Primitive, B: Primitive>(a: A, b: B) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

#[inline]
pub fn less_equal<A: Primitive, B: Primitive>(a: A, b: B) -> bool {
    !greater(a, b)
}

#[inline]
pub fn greater_equal<A: Primitive, B: Primitive>(a: A, b: B) -> bool {
    !less(a, b)
}
