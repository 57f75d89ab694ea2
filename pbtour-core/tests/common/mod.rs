use pbtour_core::proto::person::Person;

/// The record used throughout the demos.
pub fn james() -> Person {
    Person {
        name: "James".to_string(),
        id: 1,
        email: "james.lewis2@anz.com".to_string(),
    }
}

#[allow(dead_code)]
pub fn person(name: &str, id: i32, email: &str) -> Person {
    Person {
        name: name.to_string(),
        id,
        email: email.to_string(),
    }
}
