//! Bridge between [`Value`] and `serde_json`.
//!
//! JSON arrays become index-sequences and objects become keyed-maps with
//! text keys. Going the other way, pair-sequences and maps become objects
//! (the first occurrence of a duplicated alist key wins) and keys must be
//! text, keywords or integers. JSON has no integer/float split that fits
//! `Value`, so non-integer numbers are rejected.

use crate::{Result, errors::AssocError, map::Map, value::Value};

impl TryFrom<serde_json::Value> for Value {
    type Error = AssocError;

    fn try_from(json: serde_json::Value) -> std::result::Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                Value::Int(n.as_i64().ok_or_else(|| AssocError::UnsupportedValue {
                    reason: format!("number {n} is not a 64-bit signed integer"),
                })?)
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Vector(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<std::result::Result<_, _>>()?,
            ),
            serde_json::Value::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, value)| Ok((Value::Text(key), Value::try_from(value)?)))
                    .collect::<std::result::Result<Map, AssocError>>()?,
            ),
        })
    }
}

impl Value {
    /// Parses a JSON document into a value.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::try_from(json)?)
    }

    /// Converts to a `serde_json::Value` for export.
    ///
    /// Keyword values render as `":name"` strings; keyword keys render as
    /// their bare name.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Keyword(name) => serde_json::Value::String(format!(":{name}")),
            Value::Vector(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect::<Result<_>>()?,
            ),
            Value::Alist(alist) => json_object(alist.iter().map(|(k, v)| (k, v)))?,
            Value::Map(map) => json_object(map.iter())?,
        })
    }

    /// Renders the value as a compact JSON string.
    ///
    /// ```
    /// # use assoc::{Value, alist, kw};
    /// let coll = alist![kw("name"), "Arne", kw("tags"), vec![Value::Int(1), Value::Int(2)]]?;
    /// assert_eq!(coll.to_json_string()?, r#"{"name":"Arne","tags":[1,2]}"#);
    /// # Ok::<(), assoc::Error>(())
    /// ```
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }
}

fn json_object<'a>(
    pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
) -> Result<serde_json::Value> {
    let mut object = serde_json::Map::new();
    for (key, value) in pairs {
        let key = json_key(key)?;
        if !object.contains_key(&key) {
            object.insert(key, value.to_json()?);
        }
    }
    Ok(serde_json::Value::Object(object))
}

fn json_key(key: &Value) -> Result<String> {
    match key {
        Value::Text(s) => Ok(s.clone()),
        Value::Keyword(name) => Ok(name.clone()),
        Value::Int(n) => Ok(n.to_string()),
        other => Err(AssocError::UnsupportedValue {
            reason: format!("{} cannot be used as a JSON object key", other.type_name()),
        }
        .into()),
    }
}
