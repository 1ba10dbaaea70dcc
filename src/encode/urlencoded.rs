use std::borrow::Cow;

use percent_encoding::utf8_percent_encode;

use crate::constants::URI_COMPONENT;

/// Append `key=value` to an `application/x-www-form-urlencoded` string.
///
/// Line breaks in the value become `\r\n` first, and encoded spaces in the
/// value are written as `+`.
///
/// # Examples
/// ```
/// use serde_form::encode_pair;
///
/// let out = encode_pair("name", "Ada Lovelace", String::new());
/// let out = encode_pair("note", "a\nb", out);
/// assert_eq!(out, "name=Ada+Lovelace&note=a%0D%0Ab");
/// ```
pub fn encode_pair(key: &str, value: &str, mut accumulated: String) -> String {
    if !accumulated.is_empty() {
        accumulated.push('&');
    }
    accumulated.extend(utf8_percent_encode(key, URI_COMPONENT));
    accumulated.push('=');

    let value = normalize_newlines(value);
    let encoded = utf8_percent_encode(&value, URI_COMPONENT).to_string();
    accumulated.push_str(&encoded.replace("%20", "+"));
    accumulated
}

/// Rewrite every `\n` (with or without a preceding `\r`) as `\r\n`.
pub fn normalize_newlines(value: &str) -> Cow<'_, str> {
    if !value.contains('\n') {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for (idx, line) in value.split('\n').enumerate() {
        if idx > 0 {
            out.push_str("\r\n");
        }
        out.push_str(line.strip_suffix('\r').unwrap_or(line));
    }
    Cow::Owned(out)
}
