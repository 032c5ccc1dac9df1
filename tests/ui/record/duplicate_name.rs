#![allow(dead_code)]

#[derive(enumtable::Record)]
struct Dice {
    one: u8,
    #[record(rename = "one")]
    uno: u8
}

fn main() {}
