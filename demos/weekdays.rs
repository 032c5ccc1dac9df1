//! Auto-numbered enumeration of the days of a week.

#[derive(Clone, Copy, Debug, Default, enumtable::EnumValue, Eq, PartialEq)]
struct Weekday(u8);

#[derive(Default, enumtable::Record)]
struct Weekdays {
    monday: Weekday,
    tuesday: Weekday,
    wednesday: Weekday,
    thursday: Weekday,
    friday: Weekday,
    saturday: Weekday,
    sunday: Weekday
}

fn main() {
    tracing_subscriber::fmt::init();

    let weekdays = enumtable::SimpleEnum::<Weekdays>::make_default();

    println!("{:?}", weekdays.record().monday); // Weekday(0)
    println!("{}", weekdays.is_valid_value(&weekdays.record().monday)); // true
    println!("{}", weekdays.is_valid_key("tuesday")); // true
    println!("{:?}", weekdays.value_with_key("friday")); // Some(Weekday(4))
    println!("{:?}", weekdays.key_at_index(5)); // Some("saturday")
    println!("{:?}", weekdays.key_at_index(7)); // None
}
