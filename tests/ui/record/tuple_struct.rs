#![allow(dead_code)]

#[derive(enumtable::Record)]
struct Dice(u8, u8);

fn main() {}
