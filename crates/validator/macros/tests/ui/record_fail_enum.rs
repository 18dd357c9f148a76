#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
enum Choice {
    Yes,
    No,
}

fn main() {}
