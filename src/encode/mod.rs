//! Field serializers and the fold that drives them.

mod urlencoded;

use std::borrow::Cow;

use tracing::{debug, trace};

pub use urlencoded::{encode_pair, normalize_newlines};

use crate::assign::assign_into;
use crate::constants::PUSH_SUFFIX;
use crate::path::tokenize;
use crate::types::{Field, FormValue};
use crate::{ErrorStage, Result};

/// Accumulates fields one at a time: `(result, key, value) -> result`.
///
/// Implement this to replace the built-in hash or string output.
///
/// # Examples
/// ```
/// use serde_form::{serialize_fields, Field, FieldSerializer, Result};
///
/// struct Names;
///
/// impl FieldSerializer for Names {
///     type Output = Vec<String>;
///
///     fn empty(&self) -> Vec<String> {
///         Vec::new()
///     }
///
///     fn serialize(&self, mut result: Vec<String>, key: &str, _value: &str) -> Result<Vec<String>> {
///         result.push(key.to_string());
///         Ok(result)
///     }
/// }
///
/// let names = serialize_fields(&[Field::new("a", "1"), Field::new("b", "2")], &Names).unwrap();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub trait FieldSerializer {
    type Output;

    /// Starting value before the first field.
    fn empty(&self) -> Self::Output;

    fn serialize(&self, result: Self::Output, key: &str, value: &str) -> Result<Self::Output>;

    /// Key used for a value that belongs to a multi-valued control.
    fn list_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Builds a nested [`FormValue`] from bracketed field names.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashSerializer;

impl FieldSerializer for HashSerializer {
    type Output = FormValue;

    fn empty(&self) -> FormValue {
        FormValue::empty_map()
    }

    fn serialize(&self, result: FormValue, key: &str, value: &str) -> Result<FormValue> {
        let path = tokenize(key);
        if path.is_empty() {
            debug!(key, "field name has no usable segments, skipping");
            return Ok(result);
        }
        assign_into(result, &path, value).map_err(|err| {
            debug!(key, error = %err, "structural conflict");
            err.with_stage(ErrorStage::Encode).with_path(key)
        })
    }

    // A multi-select name carries no brackets of its own, so mark it as a push.
    fn list_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        Cow::Owned(format!("{key}{PUSH_SUFFIX}"))
    }
}

/// Builds an `application/x-www-form-urlencoded` string.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlEncodedSerializer;

impl FieldSerializer for UrlEncodedSerializer {
    type Output = String;

    fn empty(&self) -> String {
        String::new()
    }

    fn serialize(&self, result: String, key: &str, value: &str) -> Result<String> {
        Ok(encode_pair(key, value, result))
    }
}

/// Fold `fields` through `serializer` in order.
pub fn serialize_fields<S>(fields: &[Field], serializer: &S) -> Result<S::Output>
where
    S: FieldSerializer + ?Sized,
{
    let mut result = serializer.empty();
    for field in fields {
        let key = if field.list_member {
            serializer.list_key(&field.name)
        } else {
            Cow::Borrowed(field.name.as_str())
        };
        trace!(key = %key, "serialize field");
        result = serializer.serialize(result, &key, &field.value)?;
    }
    Ok(result)
}
