#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
struct Signup {
    #[validate("string,min=1", "email")]
    name: String,
}

fn main() {}
