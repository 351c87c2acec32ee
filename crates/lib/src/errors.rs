//! Error types for associative operations.
//!
//! This module defines the structured errors raised by the classifier, the
//! primitive accessors and mutators, and everything composed from them.
//! Every operation builds a new value functionally, so an error never leaves
//! a partially updated collection behind: the input is always untouched.

use thiserror::Error;

/// Structured error types for associative operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssocError {
    /// The value is not a pair-sequence, index-sequence or keyed-map
    #[error("value of type {type_name} is not associative")]
    NotAssociative { type_name: String },

    /// A flat key/value argument list had an odd number of elements
    #[error("{operation} expects an even number of key/value arguments, got {count}")]
    Arity { operation: String, count: usize },

    /// The operation is not defined for this representation
    #[error("{operation} is not supported for {variant}")]
    UnsupportedVariant { operation: String, variant: String },

    /// The key cannot address this representation
    #[error("invalid key {key}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// The value cannot be converted to or from an external format
    #[error("unsupported value: {reason}")]
    UnsupportedValue { reason: String },

    /// Type mismatch when converting a value to a native type
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl AssocError {
    /// Check if this error was raised by the classifier
    pub fn is_not_associative(&self) -> bool {
        matches!(self, AssocError::NotAssociative { .. })
    }

    /// Check if this error is an odd-length argument list
    pub fn is_arity_error(&self) -> bool {
        matches!(self, AssocError::Arity { .. })
    }

    /// Check if this error is an unsupported operation for a variant
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, AssocError::UnsupportedVariant { .. })
    }

    /// Check if this error is a rejected key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, AssocError::InvalidKey { .. })
    }

    /// Check if this error came from the JSON bridge
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, AssocError::UnsupportedValue { .. })
    }

    /// Check if this error is a failed native conversion
    pub fn is_type_error(&self) -> bool {
        matches!(self, AssocError::TypeMismatch { .. })
    }

    /// Get the operation name if this error names one
    pub fn operation(&self) -> Option<&str> {
        match self {
            AssocError::Arity { operation, .. }
            | AssocError::UnsupportedVariant { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from AssocError to the main Error type
impl From<AssocError> for crate::Error {
    fn from(err: AssocError) -> Self {
        crate::Error::Assoc(err)
    }
}
