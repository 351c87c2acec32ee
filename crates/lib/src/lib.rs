//!
//! assoc: one set of operations over every associative shape.
//!
//! This library lets calling code read and transform ordered pair-sequences,
//! index-sequences and keyed-maps through a single functional interface,
//! without branching on which representation it holds.
//!
//! ## Core Concepts
//!
//! * **Values (`Value`)**: The dynamic value type. Leaves are null, booleans, integers, text and keywords; collections are `Value::Alist`, `Value::Vector` and `Value::Map`.
//! * **Classifier (`classify`)**: Decides which representation a value is. `Null` reads as an empty pair-sequence, so an absent collection behaves like an empty one.
//! * **Primitives (`ops`)**: `get`, `has_key`, `keys`, `vals`, `count`, `assoc`, `dissoc`, dispatched per representation.
//! * **Composites (`compose`, `nested`)**: `equal`, `merge`, `merge_with`, `reduce_kv`, `get_in`, `assoc_in`, `update`, `update_in`, written only in terms of the primitives.
//!
//! No operation mutates its input. Every write returns a new value of the
//! same representation and the original stays valid.
//!
//! ```
//! use assoc::{alist, assoc_in, equal, get_in, kw, update_in, Value};
//!
//! let player = alist![kw("name"), "Arne", kw("stats"), alist![kw("score"), 99]?]?;
//! let path = [kw("stats"), kw("score")];
//!
//! let bumped = update_in(&player, &path, |score| {
//!     Value::Int(score.as_int().unwrap_or(0) + 1)
//! })?;
//! assert_eq!(get_in(&bumped, &path)?, Some(&Value::Int(100)));
//!
//! // The input is untouched
//! assert_eq!(get_in(&player, &path)?, Some(&Value::Int(99)));
//!
//! // Missing levels are created as pair-sequences
//! let rebuilt = assoc_in(&Value::Null, &path, 100.into())?;
//! assert!(equal(&rebuilt, &alist![kw("stats"), alist![kw("score"), 100]?]?));
//! # Ok::<(), assoc::Error>(())
//! ```

pub mod alist;
pub mod compose;
pub mod construct;
pub mod errors;
pub mod json;
pub mod map;
pub mod nested;
pub mod ops;
pub mod value;
pub mod variant;

pub use alist::Alist;
pub use compose::{equal, merge, merge_with, reduce_kv};
pub use construct::{alist, alist_from_pairs, map, map_from_pairs};
pub use errors::AssocError;
pub use map::Map;
pub use nested::{assoc_in, get_in, get_in_or, update, update_in};
pub use ops::{
    assoc, assoc_one, count, dissoc, dissoc_all, entries, get, get_or, has_key, iter, keys, vals,
};
pub use value::{Value, kw};
pub use variant::{Coll, Variant, classify};

/// Result type used throughout the assoc library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the assoc library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the associative operations
    #[error(transparent)]
    Assoc(AssocError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Assoc(_) => "assoc",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Returns the structured associative error, if this is one.
    pub fn as_assoc(&self) -> Option<&AssocError> {
        match self {
            Error::Assoc(err) => Some(err),
            _ => None,
        }
    }

    /// Check if a value failed classification.
    pub fn is_not_associative(&self) -> bool {
        self.as_assoc().is_some_and(AssocError::is_not_associative)
    }

    /// Check if a key/value argument list had odd length.
    pub fn is_arity_error(&self) -> bool {
        self.as_assoc().is_some_and(AssocError::is_arity_error)
    }

    /// Check if the operation is unsupported for the collection's representation.
    pub fn is_unsupported_variant(&self) -> bool {
        self.as_assoc().is_some_and(AssocError::is_unsupported_variant)
    }

    /// Check if a key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        self.as_assoc().is_some_and(AssocError::is_invalid_key)
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Assoc(err) => err.is_unsupported_value(),
        }
    }
}
