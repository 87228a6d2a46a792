//! Container categories
//!
//! - [`List`]: ordered, index-addressed sequence
//! - [`Dict`]: hash map keyed by hashable values
//! - [`StaticDictObject`]: fixed-shape struct declared with
//!   [`static_dict!`](crate::static_dict)

pub mod dict;
pub mod list;
pub mod static_dict;

pub use dict::Dict;
pub use list::List;
pub use static_dict::{Entries, Field, StaticDict, StaticDictObject};
