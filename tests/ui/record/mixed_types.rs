#![allow(dead_code)]

#[derive(enumtable::Record)]
struct Dice {
    one: u8,
    two: u16
}

fn main() {}
