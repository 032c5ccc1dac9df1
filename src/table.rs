//! Contains the immutable, bidirectional enumeration table.

use std::borrow::Cow;
use std::collections::hash_map::{Entry, HashMap};
use std::collections::HashSet;

use crate::{EnumValue, Error, Record, Result};

/// A member of an enumeration as stored in the table.
#[derive(Clone, Debug)]
struct Member<V> {
    value: V,
    name: Cow<'static, str>
}

/// An immutable enumeration built once from a record `R`, whose fields are the members of the
/// enumeration and hold unique values of type `V`.
///
/// The table maps every value to the name of the member declaring it. There is no way to change a
/// table after construction, so it can be shared between threads without synchronization.
///
/// The iteration order of [`EnumTable::keys`], [`EnumTable::values`] and [`EnumTable::iter`] is
/// unspecified.
#[derive(Clone, Debug)]
pub struct EnumTable<R, V: EnumValue> {
    record: R,
    value_to_key: HashMap<V::Key, Member<V>>
}

impl<R: Record> EnumTable<R, R::Value> {
    /// Builds the enumeration from the field names and values of `record`.
    ///
    /// Fails with [`Error::DuplicateValue`] if two fields hold the same value, and with
    /// [`Error::FieldCount`] if `R::FIELDS` and `R::values` disagree on the amount of members.
    ///
    /// ```rust
    /// #[derive(Clone, Copy, Debug, enumtable::EnumValue, PartialEq)]
    /// struct Dice(u32);
    ///
    /// #[derive(enumtable::Record)]
    /// struct Faces { one: Dice, two: Dice, three: Dice }
    ///
    /// let faces = enumtable::EnumTable::new(Faces { one: Dice(1), two: Dice(2), three: Dice(3) })?;
    ///
    /// assert_eq!(faces.record().two, Dice(2));
    /// assert_eq!(faces.key_with_value(&Dice(3)), Some("three"));
    /// assert_eq!(faces.value_with_key("one"), Some(&Dice(1)));
    /// assert!(!faces.is_valid_value(&Dice(7)));
    /// # Ok::<(), enumtable::Error>(())
    /// ```
    pub fn new(record: R) -> Result<Self> {
        let values = record.values();
        if values.len() != R::FIELDS.len() {
            return Err(Error::FieldCount { fields: R::FIELDS.len(), values: values.len() });
        }

        let members = R::FIELDS.iter()
            .map(|name| Cow::Borrowed(*name))
            .zip(values);

        Self::from_members(record, members)
    }

    /// Same as [`EnumTable::new`], but panics if the enumeration can not be built. Meant for
    /// enumerations defined by literals, where a failure is a bug.
    pub fn must_new(record: R) -> Self {
        Self::new(record).unwrap_or_else(|error| fatal(error))
    }
}

impl<R, V: EnumValue> EnumTable<R, V> {
    /// Inverts the `(name, value)` pairs into the value to name table. Names and values must both
    /// be unique, and every value must pass [`EnumValue::is_valid`].
    pub(crate) fn from_members<I>(record: R, members: I) -> Result<Self>
        where I: IntoIterator<Item = (Cow<'static, str>, V)>
    {
        let members = members.into_iter();
        let mut value_to_key = HashMap::with_capacity(members.size_hint().0);
        let mut names = HashSet::with_capacity(members.size_hint().0);

        for (name, value) in members {
            if !value.is_valid() {
                return Err(Error::InvalidValue {
                    name: name.into_owned(),
                    value: format!("{:?}", value)
                });
            }

            if !names.insert(name.clone()) {
                return Err(Error::DuplicateKey { name: name.into_owned() });
            }

            match value_to_key.entry(value.key()) {
                Entry::Occupied(entry) => {
                    let first: &Member<V> = entry.get();

                    return Err(Error::DuplicateValue {
                        value: format!("{:?}", value),
                        first: first.name.to_string(),
                        second: name.into_owned()
                    });
                },

                Entry::Vacant(entry) => {
                    entry.insert(Member { value, name });
                }
            }
        }

        tracing::debug!(members = value_to_key.len(), "built enum table");

        Ok(Self { record, value_to_key })
    }

    /// Returns whether `value` is held by a member.
    pub fn is_valid_value(&self, value: &V) -> bool {
        self.value_to_key.contains_key(&value.key())
    }

    /// Returns whether a member is named `key`. The comparison is case-sensitive.
    pub fn is_valid_key(&self, key: &str) -> bool {
        self.value_to_key.values().any(|member| member.name == key)
    }

    /// Returns the name of the member holding `value`.
    pub fn key_with_value(&self, value: &V) -> Option<&str> {
        self.value_to_key.get(&value.key()).map(|member| member.name.as_ref())
    }

    /// Same as [`EnumTable::key_with_value`], but panics if no member holds `value`.
    pub fn must_key_with_value(&self, value: &V) -> &str {
        match self.key_with_value(value) {
            Some(key) => key,
            None => {
                tracing::error!(?value, "invalid enum value");
                panic!("invalid enum value: {:?}", value)
            }
        }
    }

    /// Returns the value of the member named `key`.
    pub fn value_with_key(&self, key: &str) -> Option<&V> {
        self.value_to_key.values()
            .find(|member| member.name == key)
            .map(|member| &member.value)
    }

    /// Same as [`EnumTable::value_with_key`], but panics if no member is named `key`.
    pub fn must_value_with_key(&self, key: &str) -> &V {
        match self.value_with_key(key) {
            Some(value) => value,
            None => {
                tracing::error!(key, "invalid enum key");
                panic!("invalid enum key: {}", key)
            }
        }
    }

    /// Returns the names of all members.
    pub fn keys(&self) -> Vec<&str> {
        self.value_to_key.values().map(|member| member.name.as_ref()).collect()
    }

    /// Returns the values of all members.
    pub fn values(&self) -> Vec<V> {
        self.value_to_key.values().map(|member| member.value.clone()).collect()
    }

    /// Iterates over the `(name, value)` pairs of all members.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.value_to_key.values().map(|member| (member.name.as_ref(), &member.value))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.value_to_key.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.value_to_key.is_empty()
    }

    /// Gives typed access to the members, f. e. `table.record().Monday`.
    #[inline(always)]
    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn to_record(&self) -> R where R: Clone {
        self.record.clone()
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

/// Logs and panics on a construction error.
pub(crate) fn fatal(error: Error) -> ! {
    tracing::error!(%error, "failed to build enum table");
    panic!("{}", error)
}
