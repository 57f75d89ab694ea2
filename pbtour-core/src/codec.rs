use prost::Message;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

/// Encode a message with the protobuf wire format.
///
/// Fields are written in field-number order, so encoding the same value twice
/// yields identical bytes.
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decode bytes produced by [`encode`] back into `M`.
///
/// Fails on truncated input, malformed varints and on wire types that do not
/// match the field declared by `M`.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Render bytes as `[10 5 74 ...]`.
pub fn format_bytes(bytes: &[u8]) -> String {
    let parts: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

// json tags omit zero values
pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::person::Person;

    fn james() -> Person {
        Person {
            name: "James".to_string(),
            id: 1,
            email: "james.lewis2@anz.com".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let person = james();
        let bytes = encode(&person);
        assert!(!bytes.is_empty());

        let decoded: Person = decode(&bytes).expect("decode person");
        assert_eq!(decoded, person);
        assert_eq!(decoded.name, "James");
        assert_eq!(decoded.id, 1);
        assert_eq!(decoded.email, "james.lewis2@anz.com");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let person = james();
        assert_eq!(encode(&person), encode(&person));
    }

    #[test]
    fn test_known_wire_layout() {
        let bytes = encode(&james());
        assert_eq!(bytes.len(), 31);
        // tag 1 (len), "James"
        assert_eq!(&bytes[..7], &[10, 5, 74, 97, 109, 101, 115]);
        // tag 2 (varint) = 1
        assert_eq!(&bytes[7..9], &[16, 1]);
        // tag 3 (len), 20 bytes of email
        assert_eq!(&bytes[9..11], &[26, 20]);
    }

    #[test]
    fn test_default_fields_are_not_written() {
        let person = Person {
            id: 7,
            ..Default::default()
        };
        assert_eq!(encode(&person), vec![16, 7]);
        assert!(encode(&Person::default()).is_empty());
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let mut bytes = encode(&james());
        bytes.pop();
        assert!(decode::<Person>(&bytes).is_err());
    }

    #[test]
    fn test_json_uses_lowercase_names_and_omits_defaults() {
        let json = to_json(&james()).expect("json");
        let text = String::from_utf8(json.clone()).expect("utf8");
        assert_eq!(
            text,
            r#"{"name":"James","id":1,"email":"james.lewis2@anz.com"}"#
        );

        let back: Person = from_json(&json).expect("from json");
        assert_eq!(back, james());

        let sparse = to_json(&Person {
            name: "Ann".into(),
            ..Default::default()
        })
        .expect("json");
        assert_eq!(sparse, br#"{"name":"Ann"}"#.to_vec());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[]), "[]");
        assert_eq!(format_bytes(&[16, 1]), "[16 1]");
        assert!(format_bytes(&encode(&james())).starts_with("[10 5 74 97 109 101 115 16 1 26 20 "));
    }
}
