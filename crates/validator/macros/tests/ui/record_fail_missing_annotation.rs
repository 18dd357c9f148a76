#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
struct Signup {
    #[validate(label = "Name")]
    name: String,
}

fn main() {}
