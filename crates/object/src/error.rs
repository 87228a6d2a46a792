//! Object Error Types
//!
//! Every fallible operation in this crate reports one of the conditions
//! below. Errors are raised at the point of detection and never retried,
//! clamped or silently coerced.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Object model errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A typed view, downcast or checked numeric assignment did not match
    /// the actual (or representable) type
    #[error("TypeError: expected {expected}, got {actual}")]
    TypeError { expected: String, actual: String },

    /// Operator invoked between values whose categories are not compatible
    #[error("UnsupportedOperation: {lhs} {op} {rhs}")]
    UnsupportedOperation {
        op: String,
        lhs: String,
        rhs: String,
    },

    /// Dictionary lookup by key found no entry
    #[error("KeyError: key {key} not found")]
    KeyError { key: String },

    /// Sequence index outside of `[0, len)`
    #[error("IndexError: index {index} out of range (length: {len})")]
    IndexError { index: usize, len: usize },

    /// Malformed input handed to one of the codec utilities
    #[error("Invalid {format} input: {reason}")]
    InvalidEncoding { format: String, reason: String },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a type error
    pub fn type_error(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeError {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unsupported operation error for a binary operator
    pub fn unsupported(
        op: impl Into<String>,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperation {
            op: op.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Create a key error
    pub fn key_error(key: impl Into<String>) -> Self {
        Self::KeyError { key: key.into() }
    }

    /// Create an index error
    pub fn index_error(index: usize, len: usize) -> Self {
        Self::IndexError { index, len }
    }

    /// Create an invalid encoding error
    pub fn invalid_encoding(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            format: format.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeError { .. } => "OBJECT_TYPE_ERROR",
            Self::UnsupportedOperation { .. } => "OBJECT_UNSUPPORTED_OPERATION",
            Self::KeyError { .. } => "OBJECT_KEY_ERROR",
            Self::IndexError { .. } => "OBJECT_INDEX_ERROR",
            Self::InvalidEncoding { .. } => "OBJECT_INVALID_ENCODING",
        }
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeError { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }

    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::KeyError { .. })
    }

    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexError { .. })
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for object operations
pub type ValueResult<T> = std::result::Result<T, ValueError>;

// ============================================================================
// TESTS
// ============================================================================
