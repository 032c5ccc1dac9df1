#![allow(non_snake_case)]

#[derive(Clone, Copy, Debug, Default, enumtable::EnumValue, Eq, Ord, PartialEq, PartialOrd)]
struct TestEnum(u8);

#[derive(Clone, Debug, Default, enumtable::Record)]
struct TestEnums {
    Z: TestEnum,
    W: TestEnum,
    A: TestEnum,
    P: TestEnum,
    B: TestEnum,
    C: TestEnum,
    D: TestEnum,
    E: TestEnum
}

#[cfg(test)]
mod tests {
    use super::*;

    use enumtable::{AutoValue, SimpleEnum};

    #[test]
    fn auto_value() {
        assert_eq!(TestEnum::from_index(3), TestEnum(3));
    }

    #[test]
    fn make() {
        let enums = SimpleEnum::make(TestEnums::default());
        let record = enums.record();

        assert_eq!(record.Z, TestEnum(0));
        assert_eq!(record.A, TestEnum(2));
        assert_eq!(record.P, TestEnum(3));
        assert_ne!(record.A, record.Z);
        assert_ne!(record.A, record.P);
        assert_ne!(record.Z, record.P);

        assert_eq!(
            [record.Z, record.W, record.A, record.P, record.B, record.C, record.D, record.E],
            [0, 1, 2, 3, 4, 5, 6, 7].map(TestEnum)
        );
    }

    #[test]
    fn key_at_index() {
        let enums = SimpleEnum::<TestEnums>::make_default();

        assert_eq!(enums.key_at_index(0), Some("Z"));
        assert_eq!(enums.key_at_index(2), Some("A"));
        assert_eq!(enums.key_at_index(3), Some("P"));
        assert_eq!(enums.key_at_index(100), None);
    }

    #[test]
    fn lookups() {
        let enums = SimpleEnum::<TestEnums>::make_default();

        assert!(enums.is_valid_value(&TestEnum(0)));
        assert!(enums.is_valid_value(&TestEnum(7)));
        assert!(!enums.is_valid_value(&TestEnum(8)));
        assert!(!enums.is_valid_value(&TestEnum(100)));

        assert!(enums.is_valid_key("W"));
        assert!(!enums.is_valid_key("w"));

        assert_eq!(enums.value_with_key("D"), Some(&TestEnum(6)));
        assert_eq!(enums.must_key_with_value(&TestEnum(1)), "W");
    }

    #[test]
    fn keys_and_values() {
        let enums = SimpleEnum::<TestEnums>::make_default();

        let mut keys = enums.keys();
        keys.sort_unstable();
        assert_eq!(keys, ["A", "B", "C", "D", "E", "P", "W", "Z"]);

        let mut values = enums.values();
        values.sort_unstable();
        assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7].map(TestEnum));
    }

    #[test]
    fn key_at_index_matches_key_with_value() {
        let enums = SimpleEnum::<TestEnums>::make_default();

        for index in 0..=u8::MAX {
            assert_eq!(
                enums.key_at_index(index as usize),
                enums.key_with_value(&TestEnum(index))
            );
        }
    }

    #[test]
    fn plain_u8() {
        #[derive(Default, enumtable::Record)]
        struct Levels { low: u8, medium: u8, high: u8 }

        let levels = SimpleEnum::make(Levels { low: 10, medium: 20, high: 30 });

        assert_eq!(levels.record().high, 2);
        assert!(!levels.is_valid_value(&30));
        assert_eq!(levels.into_table().keys().len(), 3);
    }
}
