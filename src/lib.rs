pub mod assign;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod form;
pub mod options;
pub mod parallel;
pub mod path;
pub mod types;

use std::io::Read;

use serde::de::DeserializeOwned;

pub use crate::assign::{assign, assign_into, merge};
pub use crate::encode::{
    encode_pair, serialize_fields, FieldSerializer, HashSerializer, UrlEncodedSerializer,
};
pub use crate::error::{Error, ErrorKind, ErrorStage};
pub use crate::form::collect_fields;
pub use crate::options::SerializeOptions;
pub use crate::path::{to_field_name, tokenize, KeyPath, PathSegment};
pub use crate::types::{Control, ControlType, Field, FormMap, FormValue, SelectOption, Serialized};

pub type Result<T> = std::result::Result<T, Error>;

/// Serialize a form's controls according to `options`.
///
/// # Examples
/// ```
/// use serde_form::{serialize, Control, SerializeOptions};
///
/// let controls = [Control::text("user[name]", "Ada"), Control::text("user[age]", "37")];
///
/// let query = serialize(&controls, &SerializeOptions::new()).unwrap();
/// assert_eq!(query.as_query(), Some("user%5Bname%5D=Ada&user%5Bage%5D=37"));
///
/// let tree = serialize(&controls, &SerializeOptions::hash()).unwrap();
/// assert_eq!(
///     serde_json::to_string(&tree).unwrap(),
///     r#"{"user":{"name":"Ada","age":"37"}}"#
/// );
/// ```
pub fn serialize(controls: &[Control], options: &SerializeOptions) -> Result<Serialized> {
    if options.hash {
        serialize_with(controls, options, &HashSerializer).map(Serialized::Hash)
    } else {
        serialize_with(controls, options, &UrlEncodedSerializer).map(Serialized::Query)
    }
}

/// Serialize controls through a caller-supplied serializer. `options.hash`
/// is not consulted; the serializer decides the output.
pub fn serialize_with<S>(
    controls: &[Control],
    options: &SerializeOptions,
    serializer: &S,
) -> Result<S::Output>
where
    S: FieldSerializer + ?Sized,
{
    let fields = collect_fields(controls, options);
    serialize_fields(&fields, serializer)
}

/// Serialize several unrelated forms. Runs on the rayon pool with the
/// `parallel` feature.
pub fn serialize_all<C>(forms: &[C], options: &SerializeOptions) -> Vec<Result<Serialized>>
where
    C: AsRef<[Control]> + Sync,
{
    parallel::map_items_parallel(forms, |controls| serialize(controls.as_ref(), options))
}

pub fn to_value(fields: &[Field]) -> Result<FormValue> {
    serialize_fields(fields, &HashSerializer)
}

pub fn to_string(fields: &[Field]) -> Result<String> {
    serialize_fields(fields, &UrlEncodedSerializer)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    decode::from_str(input)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    decode::from_slice(input)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    decode::from_reader(reader)
}

pub fn decode_to_value(input: &str) -> Result<FormValue> {
    decode::decode_to_value(input)
}
