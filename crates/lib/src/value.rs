//! The dynamic value type shared by every associative operation.
//!
//! A [`Value`] is either a leaf (null, boolean, integer, text, keyword) or
//! one of the three associative representations:
//!
//! - [`Value::Alist`] - an ordered pair-sequence
//! - [`Value::Vector`] - an index-sequence where position is the key
//! - [`Value::Map`] - a hash-style keyed map
//!
//! `Value` is `Eq + Hash`, so any value (collections included) can be a key.
//! Its `PartialEq` is structural per variant; use [`crate::equal`] for the
//! representation-agnostic comparison.

use std::fmt;

use crate::{alist::Alist, errors::AssocError, map::Map, variant::Variant};

/// Values handled by the associative toolkit.
///
/// # Direct Comparisons
///
/// ```
/// # use assoc::Value;
/// assert!(Value::Int(42) == 42);
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::keyword("foo") != "foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Value {
    // Leaf values
    /// The absent value; classifies as an empty pair-sequence
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),
    /// Symbolic keyword, written `:name`
    Keyword(String),

    // Associative values
    /// Ordered (key, value) pairs
    Alist(Alist),
    /// Ordered values addressed by position
    Vector(Vec<Value>),
    /// Hash-style key/value mapping
    Map(Map),
}

/// Shorthand for [`Value::keyword`].
pub fn kw(name: impl Into<String>) -> Value {
    Value::keyword(name)
}

impl Value {
    /// Creates a keyword value
    pub fn keyword(name: impl Into<String>) -> Self {
        Value::Keyword(name.into())
    }

    /// Returns true if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value classifies as a collection
    pub fn is_associative(&self) -> bool {
        self.variant().is_some()
    }

    /// Returns the representation this value classifies as, if any.
    ///
    /// `Null` counts as an empty pair-sequence.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Value::Null | Value::Alist(_) => Some(Variant::PairSeq),
            Value::Vector(_) => Some(Variant::IndexSeq),
            Value::Map(_) => Some(Variant::KeyedMap),
            _ => None,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Keyword(_) => "keyword",
            Value::Alist(_) => "alist",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the keyword name without the leading colon
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Value::Keyword(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_alist(&self) -> Option<&Alist> {
        match self {
            Value::Alist(alist) => Some(alist),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Interprets this value as a sequence position.
    ///
    /// Only non-negative integers are positions; everything else is `None`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Int(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Keyword(name) => write!(f, ":{name}"),
            Value::Alist(alist) => write!(f, "{alist}"),
            Value::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => write!(f, "{map}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Alist> for Value {
    fn from(value: Alist) -> Self {
        Value::Alist(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Vector(value)
    }
}

impl TryFrom<&Value> for i64 {
    type Error = AssocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| AssocError::TypeMismatch {
            expected: "i64".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = AssocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| AssocError::TypeMismatch {
            expected: "bool".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = AssocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(AssocError::TypeMismatch {
                expected: "String".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = AssocError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| AssocError::TypeMismatch {
            expected: "&str".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
