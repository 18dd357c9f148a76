#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
struct Pair(String, String);

fn main() {}
