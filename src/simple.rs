//! Contains the auto-numbered enumeration.

use crate::{AutoValue, EnumTable, Record};

/// The maximum amount of members of a [`SimpleEnum`], limited by the `u8` value range.
pub const CAPACITY: usize = u8::MAX as usize + 1;

/// An enumeration whose members are numbered `0..N` in declaration order.
///
/// Dereferences to [`EnumTable`] for all lookups.
///
/// ```rust
/// #[derive(Clone, Copy, Debug, Default, enumtable::EnumValue, Eq, PartialEq)]
/// struct Weekday(u8);
///
/// #[derive(Default, enumtable::Record)]
/// struct Weekdays {
///     monday: Weekday, tuesday: Weekday, wednesday: Weekday, thursday: Weekday,
///     friday: Weekday, saturday: Weekday, sunday: Weekday
/// }
///
/// let weekdays = enumtable::SimpleEnum::<Weekdays>::make_default();
///
/// assert_eq!(weekdays.record().friday, Weekday(4));
/// assert_eq!(weekdays.key_at_index(5), Some("saturday"));
/// assert_eq!(weekdays.key_at_index(7), None);
/// ```
#[derive(Clone, Debug)]
pub struct SimpleEnum<R: Record>(EnumTable<R, R::Value>);

impl<R: Record> SimpleEnum<R> where R::Value: AutoValue {
    /// Numbers the fields of `record` by their declaration index and builds the enumeration.
    ///
    /// Values already stored in `record` are overwritten.
    ///
    /// # Panics
    ///
    /// If `R` declares more than [`CAPACITY`] fields, or if `R::value_mut` does not return a field
    /// for every declared member.
    pub fn make(mut record: R) -> Self {
        let fields = R::FIELDS.len();
        if fields > CAPACITY {
            tracing::error!(fields, capacity = CAPACITY, "too many enum members");
            panic!("enum values must be less than {}, got {} members", CAPACITY, fields);
        }

        for (index, value) in (0..=u8::MAX).take(fields).enumerate() {
            match record.value_mut(index) {
                Some(field) => *field = R::Value::from_index(value),
                None => {
                    tracing::error!(index, fields, "record has no field at index");
                    panic!("record declares {} members but has no field at index {}", fields, index);
                }
            }
        }

        Self(EnumTable::must_new(record))
    }

    /// Same as [`SimpleEnum::make`] on `R::default()`.
    pub fn make_default() -> Self where R: Default {
        Self::make(R::default())
    }

    /// Returns the name of the member declared at `index`.
    pub fn key_at_index(&self, index: usize) -> Option<&str> {
        let index = u8::try_from(index).ok()?;
        self.0.key_with_value(&R::Value::from_index(index))
    }

    pub fn into_table(self) -> EnumTable<R, R::Value> {
        self.0
    }
}

impl<R: Record> core::ops::Deref for SimpleEnum<R> {
    type Target = EnumTable<R, R::Value>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expands to the 256 distinct names `m00` to `mff`.
    macro_rules! wide_names {
        (@row [$($done:tt)*] [] $low:tt) => {
            &[$($done)*]
        };
        (@row [$($done:tt)*] [$high:tt $($rest:tt)*] [$($low:tt)*]) => {
            wide_names!(@row [$($done)* $(concat!("m", $high, $low),)*] [$($rest)*] [$($low)*])
        };
        ($($digit:tt)*) => {
            wide_names!(@row [] [$($digit)*] [$($digit)*])
        };
    }

    /// Hand written to test the boundaries, as a derived record with 256 fields is unwieldy.
    #[derive(Debug)]
    struct Wide(Vec<u8>);

    impl Record for Wide {
        type Value = u8;

        const FIELDS: &'static [&'static str] = wide_names!(
            "0" "1" "2" "3" "4" "5" "6" "7" "8" "9" "a" "b" "c" "d" "e" "f"
        );

        fn values(&self) -> Vec<u8> {
            self.0.clone()
        }

        fn value_mut(&mut self, index: usize) -> Option<&mut u8> {
            self.0.get_mut(index)
        }
    }

    /// Declares three members, but only stores two of them.
    #[derive(Debug)]
    struct Short(Vec<u8>);

    impl Record for Short {
        type Value = u8;

        const FIELDS: &'static [&'static str] = &["a", "b", "c"];

        fn values(&self) -> Vec<u8> {
            self.0.clone()
        }

        fn value_mut(&mut self, index: usize) -> Option<&mut u8> {
            self.0.get_mut(index)
        }
    }

    #[derive(Debug)]
    struct TooWide;

    impl Record for TooWide {
        type Value = u8;

        const FIELDS: &'static [&'static str] = &["member"; CAPACITY + 1];

        fn values(&self) -> Vec<u8> {
            vec![0; CAPACITY + 1]
        }

        fn value_mut(&mut self, _: usize) -> Option<&mut u8> {
            None
        }
    }

    #[derive(Debug, Default, crate::Record)]
    #[allow(non_snake_case)]
    struct Letters { Z: u8, W: u8, A: u8, P: u8, B: u8, C: u8, D: u8, E: u8 }

    #[test]
    fn make() {
        let letters = SimpleEnum::make(Letters::default());
        let record = letters.record();

        assert_eq!(
            [record.Z, record.W, record.A, record.P, record.B, record.C, record.D, record.E],
            [0, 1, 2, 3, 4, 5, 6, 7]
        );
        assert_eq!(letters.len(), 8);
    }

    #[test]
    fn make_overwrites() {
        let letters = SimpleEnum::make(Letters { Z: 9, W: 9, A: 9, P: 9, B: 9, C: 9, D: 9, E: 42 });

        assert_eq!(letters.record().Z, 0);
        assert_eq!(letters.record().E, 7);
        assert!(!letters.is_valid_value(&42));
    }

    #[test]
    fn key_at_index() {
        let letters = SimpleEnum::<Letters>::make_default();

        assert_eq!(letters.key_at_index(0), Some("Z"));
        assert_eq!(letters.key_at_index(2), Some("A"));
        assert_eq!(letters.key_at_index(3), Some("P"));
        assert_eq!(letters.key_at_index(7), Some("E"));
        assert_eq!(letters.key_at_index(8), None);
        assert_eq!(letters.key_at_index(100), None);
        assert_eq!(letters.key_at_index(256 + 2), None);
    }

    #[test]
    fn capacity() {
        assert_eq!(Wide::FIELDS.len(), CAPACITY);

        let wide = SimpleEnum::make(Wide(vec![0; CAPACITY]));

        assert_eq!(wide.len(), CAPACITY);
        assert_eq!(wide.record().0[255], 255);
        assert_eq!(wide.key_at_index(256), None);

        for index in 0..CAPACITY {
            let name = format!("m{:02x}", index);
            assert_eq!(wide.key_at_index(index), Some(name.as_str()));
            assert_eq!(wide.value_with_key(&name), Some(&(index as u8)));
        }
    }

    #[test]
    #[should_panic(expected = "record declares 3 members but has no field at index 2")]
    fn missing_field() {
        SimpleEnum::make(Short(vec![7, 7]));
    }

    #[test]
    #[should_panic(expected = "enum values must be less than 256, got 257 members")]
    fn capacity_exceeded() {
        SimpleEnum::make(TooWide);
    }

    #[test]
    fn into_table() {
        let table = SimpleEnum::<Letters>::make_default().into_table();
        assert_eq!(table.value_with_key("P"), Some(&3));
    }
}
