//! The Null category

use std::fmt;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender};
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};

/// The single null value. Equal to itself, never orderable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl DebugRender for Null {
    fn render(&self, out: &mut dyn fmt::Write, _cfg: &DebugConfig, _depth: usize) -> fmt::Result {
        out.write_str("null")
    }
}

impl BaseObject for Null {
    const TYPE_NAME: &'static str = "Null";

    fn category(&self) -> Category {
        Category::Null
    }

    fn less(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported("<", "Null", "Null"))
    }

    fn greater(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported(">", "Null", "Null"))
    }

    fn into_object(self) -> Object {
        Object::Null
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::Null => Ok(Self),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl Hashable for Null {}

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}
