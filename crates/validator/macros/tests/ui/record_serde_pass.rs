use fieldcheck::Record;
use serde::Serialize;

#[derive(Serialize, Record)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[validate("string,min=1")]
    #[serde(rename = "fullName")]
    full_name: String,

    #[validate("email", label = "E-mail")]
    #[serde(rename = "mail", skip_serializing_if = "String::is_empty")]
    email: String,
}

fn main() {
    let contact = Contact {
        full_name: String::new(),
        email: "nope".into(),
    };
    let messages = contact.validate().into_messages();
    assert_eq!(
        messages,
        vec![
            "fullName must not be empty".to_string(),
            "E-mail is not a valid email address".to_string(),
        ]
    );
}
