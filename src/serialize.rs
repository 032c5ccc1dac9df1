//! Contains the construction of enumerations from any `serde::Serialize` record.

use std::borrow::Cow;

use crate::{EnumTable, EnumValue, Error, Result};

/// Names the JSON type of a value which can not be a record.
fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object"
    }
}

impl<R, V> EnumTable<R, V>
    where R: serde::Serialize, V: EnumValue + serde::de::DeserializeOwned
{
    /// Builds the enumeration by serializing `record` into name/value pairs, which allows records
    /// without a `Record` implementation. Member names follow the serde field names, so
    /// `#[serde(rename = "...")]` and `#[serde(skip)]` apply.
    ///
    /// Fails if `record` does not serialize to a map, if a member does not hold a `V`, or with
    /// [`Error::DuplicateValue`] if two members hold the same value.
    ///
    /// ```rust
    /// #[derive(serde::Serialize)]
    /// struct Rates { low: f64, high: f64 }
    ///
    /// let rates = enumtable::EnumTable::<_, f64>::from_serialize(Rates { low: 3.4, high: 5.3 })?;
    /// assert_eq!(rates.key_with_value(&5.3), Some("high"));
    /// # Ok::<(), enumtable::Error>(())
    /// ```
    pub fn from_serialize(record: R) -> Result<Self> {
        let fields = match serde_json::to_value(&record)? {
            serde_json::Value::Object(fields) => fields,
            value => return Err(Error::NotARecord(kind(&value)))
        };

        let members = fields.into_iter()
            .map(|(name, value)| match serde_json::from_value::<V>(value) {
                Ok(value) => Ok((Cow::Owned(name), value)),
                Err(source) => Err(Error::Field { name, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_members(record, members)
    }

    /// Same as [`EnumTable::from_serialize`], but panics if the enumeration can not be built.
    pub fn must_from_serialize(record: R) -> Self {
        Self::from_serialize(record).unwrap_or_else(|error| crate::table::fatal(error))
    }
}
