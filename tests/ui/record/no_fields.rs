#![allow(dead_code)]

#[derive(enumtable::Record)]
struct Dice {}

fn main() {}
