//! Scalar categories: Null, the numerics, String and Bytes

pub mod bytes;
pub mod null;
pub mod number;
pub mod text;

pub use bytes::Bytes;
pub use null::Null;
pub use number::{
    Arith, Bits, Bool, Double, Float, Int8, Int16, Int32, Int64, Num, Numeric, NumericType,
    Primitive, UInt8, UInt16, UInt32, UInt64, Wide, checked_cast,
};
pub use text::Text;
