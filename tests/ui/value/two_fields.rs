#![allow(dead_code)]

#[derive(Clone, Debug, enumtable::EnumValue)]
struct Weekday(u8, u8);

fn main() {}
