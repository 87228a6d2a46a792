//! Stateless codec utilities
//!
//! These operate on plain byte and character sequences and sit outside the
//! object model; [`crate::Bytes`] offers thin wrappers over them.

mod base64;
mod hex;
mod real;

pub use self::base64::{decode_base64, encode_base64};
pub use self::hex::{PadPolicy, decode_hex, encode_hex};
pub use self::real::{format_real, format_real_f32};
