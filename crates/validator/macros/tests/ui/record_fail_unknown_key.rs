#![allow(dead_code)]
use fieldcheck::Record;

#[derive(Record)]
struct Signup {
    #[validate("string,min=1", lable = "Name")]
    name: String,
}

fn main() {}
