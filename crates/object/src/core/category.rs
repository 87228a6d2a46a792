//! Value categories
//!
//! Every object reports exactly one [`Category`] for its whole lifetime.
//! `Bool`, `Integer` and `Real` together form the numeric categories: they
//! compare and equate with each other. Any other pairing of different
//! categories is never equal and cannot be ordered.

use std::fmt::{self, Display, Formatter};

/// Closed classification of object variants
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Null,
    Bool,
    Integer,
    Real,
    String,
    Bytes,
    List,
    Dict,
    StaticDict,
}

impl Category {
    /// Get all categories
    pub const ALL: [Self; 9] = [
        Self::Null,
        Self::Bool,
        Self::Integer,
        Self::Real,
        Self::String,
        Self::Bytes,
        Self::List,
        Self::Dict,
        Self::StaticDict,
    ];

    /// Name used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::List => "List",
            Self::Dict => "Dict",
            Self::StaticDict => "StaticDict",
        }
    }

    /// Bool, Integer or Real
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Bool | Self::Integer | Self::Real)
    }

    /// Categories whose values may be used as dictionary keys
    pub const fn is_hashable(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool | Self::Integer | Self::Real | Self::String | Self::Bytes
        )
    }

    pub const fn is_container(&self) -> bool {
        matches!(self, Self::List | Self::Dict | Self::StaticDict)
    }

    /// Whether values of the two categories may be compared with each other
    pub const fn is_compatible(&self, other: &Self) -> bool {
        (*self as u8 == *other as u8) || (self.is_numeric() && other.is_numeric())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_compatibility() {
        assert!(Category::Bool.is_compatible(&Category::Real));
        assert!(Category::Integer.is_compatible(&Category::Bool));
        assert!(Category::String.is_compatible(&Category::String));
        assert!(!Category::String.is_compatible(&Category::Bytes));
        assert!(!Category::Null.is_compatible(&Category::Integer));
    }

    #[test]
    fn test_compatibility_symmetric() {
        for a in Category::ALL {
            for b in Category::ALL {
                assert_eq!(a.is_compatible(&b), b.is_compatible(&a));
            }
        }
    }

    #[test]
    fn test_hashable() {
        assert!(Category::Null.is_hashable());
        assert!(Category::Bytes.is_hashable());
        assert!(!Category::List.is_hashable());
        assert!(!Category::Dict.is_hashable());
        assert!(!Category::StaticDict.is_hashable());
    }
}
