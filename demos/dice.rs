//! Enumeration with caller supplied values, built through the `Record` derive and through serde.

#[derive(Clone, Copy, Debug, enumtable::EnumValue, PartialEq, serde::Deserialize, serde::Serialize)]
struct DiceValue(u32);

#[derive(enumtable::Record, serde::Serialize)]
struct Dice {
    #[record(rename = "ONE")]
    #[serde(rename = "ONE")]
    one: DiceValue,
    #[record(rename = "TWO")]
    #[serde(rename = "TWO")]
    two: DiceValue,
    #[record(rename = "THREE")]
    #[serde(rename = "THREE")]
    three: DiceValue,
    #[record(rename = "FOUR")]
    #[serde(rename = "FOUR")]
    four: DiceValue,
    #[record(rename = "FIVE")]
    #[serde(rename = "FIVE")]
    five: DiceValue,
    #[record(rename = "SIX")]
    #[serde(rename = "SIX")]
    six: DiceValue
}

const DICE: Dice = Dice {
    one: DiceValue(1),
    two: DiceValue(2),
    three: DiceValue(3),
    four: DiceValue(4),
    five: DiceValue(5),
    six: DiceValue(6)
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let dice = enumtable::EnumTable::must_new(DICE);

    println!("{:?}", dice.record().four); // DiceValue(4)
    println!("{}", dice.is_valid_value(&dice.record().one)); // true
    println!("{}", dice.is_valid_value(&DiceValue(7))); // false
    println!("{}", dice.is_valid_key("THREE")); // true
    println!("{}", dice.is_valid_key("TEN")); // false
    println!("{:?}", dice.value_with_key("FOUR")); // Some(DiceValue(4))
    println!("{:?}", dice.must_value_with_key("FOUR")); // DiceValue(4)
    println!("{:?}", dice.key_with_value(&DiceValue(5))); // Some("FIVE")
    println!("{}", dice.must_key_with_value(&DiceValue(6))); // SIX

    let serialized = enumtable::EnumTable::<_, DiceValue>::must_from_serialize(DICE);
    let mut keys = serialized.keys();
    keys.sort_unstable();
    println!("{:?}", keys); // ["FIVE", "FOUR", "ONE", "SIX", "THREE", "TWO"]

    match enumtable::EnumTable::new(Dice { six: DiceValue(1), ..DICE }) {
        Ok(_) => unreachable!(),
        Err(error) => println!("{}", error) // duplicated enum value DiceValue(1) in `ONE` and `SIX`
    }
}
