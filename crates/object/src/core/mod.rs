//! Core object model: categories, the shared object contract, debug
//! rendering and the type-erased handles

pub mod category;
pub mod display;
pub mod hashable;
pub mod object;
pub mod traits;

pub use category::Category;
pub use display::{DebugConfig, DebugRender};
pub use hashable::{HashableObject, HashableRef};
pub use object::Object;
pub use traits::{BaseObject, Hashable};
