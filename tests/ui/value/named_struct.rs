#![allow(dead_code)]

#[derive(Clone, Debug, enumtable::EnumValue)]
struct Weekday {
    day: u8
}

fn main() {}
