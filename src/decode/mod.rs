//! Query-string decoding back into a [`FormValue`] tree, and from there into
//! any `DeserializeOwned` type.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::encode::{FieldSerializer, HashSerializer};
use crate::types::FormValue;
use crate::{Error, ErrorStage, Result};

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    let value = decode_to_value(input)?;
    serde_json::from_value(value.into())
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    let text =
        std::str::from_utf8(input).map_err(|err| Error::decode(format!("invalid utf-8: {err}")))?;
    from_str(text)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::decode(format!("read failed: {err}")))?;
    from_str(&buf)
}

/// Parse `application/x-www-form-urlencoded` input and fold each pair through
/// the hash serializer. A leading `?` is ignored.
pub fn decode_to_value(input: &str) -> Result<FormValue> {
    let input = input.strip_prefix('?').unwrap_or(input);
    let serializer = HashSerializer;
    let mut root = serializer.empty();
    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        root = serializer
            .serialize(root, &key, &value)
            .map_err(|err| err.with_stage(ErrorStage::Decode))?;
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::*;
    use crate::ErrorKind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Person {
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Signup {
        people: Vec<Person>,
        note: Option<String>,
    }

    #[rstest]
    #[case("", json!({}))]
    #[case("?a=1", json!({"a": "1"}))]
    #[case("a=1&a=2", json!({"a": ["1", "2"]}))]
    #[case("a%5B%5D=x&a%5B%5D=y", json!({"a": ["x", "y"]}))]
    #[case("a[b]=x&a[c]=y+z", json!({"a": {"b": "x", "c": "y z"}}))]
    #[case("note=a%0D%0Ab", json!({"note": "a\r\nb"}))]
    #[case("flag", json!({"flag": ""}))]
    fn test_decode_to_value(#[case] input: &str, #[case] expected: Value) {
        let value = decode_to_value(input).unwrap_or_else(|err| panic!("decode failed: {err}"));
        assert_eq!(Value::from(value), expected);
    }

    #[rstest]
    fn test_decode_conflict_is_decode_stage() {
        let err = decode_to_value("a=1&a[b]=2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::StructuralConflict);
        assert_eq!(err.stage, ErrorStage::Decode);
    }

    #[rstest]
    fn test_from_str_into_struct() {
        let signup: Signup = from_str(
            "people[0][name]=Ada&people[0][tags][]=math&people[1][name]=Bob&note=hi",
        )
        .unwrap();
        assert_eq!(
            signup,
            Signup {
                people: vec![
                    Person {
                        name: "Ada".to_string(),
                        tags: vec!["math".to_string()],
                    },
                    Person {
                        name: "Bob".to_string(),
                        tags: Vec::new(),
                    },
                ],
                note: Some("hi".to_string()),
            }
        );
    }

    #[rstest]
    fn test_from_str_type_mismatch() {
        let err = from_str::<Signup>("people=x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Deserialize);
    }

    #[rstest]
    fn test_from_slice_and_reader() {
        let from_bytes: Person = from_slice(b"name=Ada").unwrap();
        assert_eq!(from_bytes.name, "Ada");

        let from_io: Person = from_reader("name=Bob&tags[]=x".as_bytes()).unwrap();
        assert_eq!(from_io.tags, vec!["x".to_string()]);

        let err = from_slice::<Person>(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
    }
}
