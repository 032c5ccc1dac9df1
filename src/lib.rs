//! # Enumeration tables for Rust
//!
//! Builds immutable, bidirectional enumerations from plain structs, once, at initialization time.
//!
//! ## Dependencies
//!
//! - `enumtable-impl` for the `Record` and `EnumValue` derive macros.
//! - `thiserror` for the [`Error`] type, `tracing` for diagnostics before fatal failures.
//! - `serde` and `serde_json` with the default feature `serde`, for
//!   [`EnumTable::from_serialize`].
//!
//! ## Description
//!
//! Every named field of a struct is one member of the enumeration: the field name is the key of
//! the member, the field content is its value. All fields share one value type, and every value
//! must be unique, so a member can be found by its key as well as by its value.
//!
//! An [`EnumTable`] is built once and never changes afterwards. It still exposes the typed struct
//! via [`EnumTable::record`], so members can be used as ordinary field accesses.
//!
//! ## Simple example
//!
//! If only distinct, ordered identifiers are needed, a [`SimpleEnum`] numbers the fields in
//! declaration order:
//!
//! ```rust
//! #[derive(Clone, Copy, Debug, Default, enumtable::EnumValue, Eq, PartialEq)]
//! struct Weekday(u8);
//!
//! #[derive(Default, enumtable::Record)]
//! struct Weekdays {
//!     Monday: Weekday,
//!     Tuesday: Weekday,
//!     Wednesday: Weekday,
//!     Thursday: Weekday,
//!     Friday: Weekday,
//!     Saturday: Weekday,
//!     Sunday: Weekday
//! }
//!
//! let weekdays = enumtable::SimpleEnum::<Weekdays>::make_default();
//!
//! assert_eq!(weekdays.record().Monday, Weekday(0));
//! assert!(weekdays.is_valid_value(&weekdays.record().Monday));
//! assert!(weekdays.is_valid_key("Tuesday"));
//! assert_eq!(weekdays.value_with_key("Friday"), Some(&Weekday(4)));
//! assert_eq!(weekdays.key_at_index(5), Some("Saturday"));
//! assert_eq!(weekdays.key_at_index(7), None);
//! ```
//!
//! ## Detailed example
//!
//! An [`EnumTable`] keeps the values given by the caller, which can be any [`EnumValue`]: integers,
//! floating point values, strings or newtypes of them. Member names can differ from the field
//! names with `#[record(rename = "...")]`.
//!
//! ```rust
//! #[derive(Clone, Copy, Debug, enumtable::EnumValue, PartialEq)]
//! struct Dice(u32);
//!
//! #[derive(enumtable::Record)]
//! struct Faces {
//!     #[record(rename = "ONE")] one: Dice,
//!     #[record(rename = "TWO")] two: Dice,
//!     #[record(rename = "SIX")] six: Dice
//! }
//!
//! let faces = enumtable::EnumTable::must_new(Faces { one: Dice(1), two: Dice(2), six: Dice(6) });
//!
//! assert_eq!(faces.record().six, Dice(6));
//! assert!(faces.is_valid_value(&Dice(1)));
//! assert!(!faces.is_valid_value(&Dice(7)));
//! assert!(faces.is_valid_key("TWO"));
//! assert!(!faces.is_valid_key("two"));
//! assert_eq!(faces.key_with_value(&Dice(6)), Some("SIX"));
//! assert_eq!(faces.must_value_with_key("ONE"), &Dice(1));
//!
//! // Values must be unique.
//! assert!(enumtable::EnumTable::new(Faces { one: Dice(1), two: Dice(1), six: Dice(6) }).is_err());
//! ```
//!
//! The `must_*` functions panic instead of returning an error or `None`. They are meant for
//! enumerations built from literals, where a failure can only be a bug.

// Lets the derive macros refer to `::enumtable` from inside this crate.
extern crate self as enumtable;

mod error;
mod record;
#[cfg(feature = "serde")]
mod serialize;
mod simple;
mod table;
mod value;

pub use enumtable_impl::{EnumValue, Record};

pub use error::{Error, Result};
pub use record::Record;
pub use simple::{SimpleEnum, CAPACITY};
pub use table::EnumTable;
pub use value::{AutoValue, EnumValue};
