#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
struct Wrapper<T> {
    #[validate("string,min=1")]
    value: T,
}

fn main() {}
