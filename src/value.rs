//! Contains the traits for the scalars stored in the members of an enumeration.

/// A scalar which can be stored in the members of an enumeration.
///
/// Every value must be unique inside its enumeration, which is checked by comparing
/// [`EnumValue::key`]s. Integers, `bool`, `char` and strings are their own key. Floating point
/// values are keyed by their bit pattern, with `-0.0` folded into `0.0`, and must be finite.
///
/// Newtypes implement this trait with `#[derive(enumtable::EnumValue)]`:
///
/// ```rust
/// #[derive(Clone, Copy, Debug, enumtable::EnumValue, PartialEq)]
/// struct Dice(u32);
///
/// use enumtable::EnumValue;
/// assert_eq!(Dice(4).key(), 4);
/// ```
pub trait EnumValue: Clone + core::fmt::Debug {
    /// The hashable identity of a value.
    type Key: Clone + core::fmt::Debug + Eq + core::hash::Hash;

    fn key(&self) -> Self::Key;

    /// Whether the value can be stored in an enumeration at all. Checked once at construction.
    #[inline(always)]
    fn is_valid(&self) -> bool {
        true
    }
}

/// A value which can be generated from the declaration index of a member, used by
/// [`SimpleEnum::make`](crate::SimpleEnum::make).
///
/// Only implemented for `u8` and newtypes of it, so an auto-numbered enumeration can have at most
/// 256 members.
pub trait AutoValue: EnumValue {
    fn from_index(index: u8) -> Self;
}

macro_rules! impl_identity {
    ($($ty:ty),+) => {
        $(
            impl EnumValue for $ty {
                type Key = Self;

                #[inline(always)]
                fn key(&self) -> Self::Key {
                    *self
                }
            }
        )+
    };
}

impl_identity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);

impl EnumValue for &'static str {
    type Key = Self;

    #[inline(always)]
    fn key(&self) -> Self::Key {
        *self
    }
}

impl EnumValue for String {
    type Key = Self;

    #[inline(always)]
    fn key(&self) -> Self::Key {
        self.clone()
    }
}

impl EnumValue for f32 {
    type Key = u32;

    #[inline(always)]
    fn key(&self) -> Self::Key {
        if *self == 0.0 { 0 } else { self.to_bits() }
    }

    #[inline(always)]
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl EnumValue for f64 {
    type Key = u64;

    #[inline(always)]
    fn key(&self) -> Self::Key {
        if *self == 0.0 { 0 } else { self.to_bits() }
    }

    #[inline(always)]
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl AutoValue for u8 {
    #[inline(always)]
    fn from_index(index: u8) -> Self {
        index
    }
}
