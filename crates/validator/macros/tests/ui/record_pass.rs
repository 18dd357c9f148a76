use fieldcheck::{Record, validate_record};

#[derive(Record)]
pub struct Profile {
    #[validate("string,min=1,max=32", label = "Display name")]
    name: String,

    #[validate("number,min=0,max=150")]
    age: u8,

    #[validate("number,min=-40.5,max=60")]
    temperature: f64,

    #[validate("regex,[A-Z]{2}\\d{4}", rename = "ref_code")]
    reference: &'static str,

    #[validate("email")]
    r#email: Box<str>,

    #[validate("-")]
    notes: String,

    #[validate(skip)]
    internal: String,

    untouched: Vec<u8>,
}

#[derive(Record)]
pub struct Empty {}

fn main() {
    let profile = Profile {
        name: "Ada".into(),
        age: 36,
        temperature: 21.5,
        reference: "AB1234",
        r#email: "ada@example.com".into(),
        notes: String::new(),
        internal: String::new(),
        untouched: Vec::new(),
    };
    assert!(profile.validate().is_valid());
    assert!(validate_record(&profile).is_empty());
    assert_eq!(Profile::schema().len(), 5);
    assert!(Empty::schema().is_empty());
    let _ = (&profile.notes, &profile.internal, &profile.untouched);
}
