//! Field-name tokenizer.
//!
//! Splits names such as `people[0][name]` into [`PathSegment`]s. Scanning is
//! byte-based and keeps no state between calls.

pub mod segment;

use memchr::{memchr, memchr2};
use smol_str::SmolStr;

pub use segment::{to_field_name, KeyPath, PathSegment};

use crate::constants::{is_bracket, MAX_LIST_INDEX};

/// Tokenize a field name.
///
/// Never fails: a bracket group that is unterminated or contains another
/// bracket is skipped. Digit runs above [`MAX_LIST_INDEX`] stay `Named`.
///
/// # Examples
/// ```
/// use serde_form::{tokenize, PathSegment};
///
/// let path = tokenize("people[0][name]");
/// assert_eq!(
///     path.as_slice(),
///     &[
///         PathSegment::root("people"),
///         PathSegment::Indexed(0),
///         PathSegment::named("name"),
///     ]
/// );
/// ```
pub fn tokenize(name: &str) -> KeyPath {
    let bytes = name.as_bytes();
    let mut segments = KeyPath::new();

    let root_end = bytes
        .iter()
        .position(|byte| is_bracket(*byte))
        .unwrap_or(bytes.len());
    if root_end > 0 {
        segments.push(PathSegment::Root(SmolStr::new(&name[..root_end])));
    }

    let mut pos = 0;
    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        let content_start = open + 1;
        match memchr2(b'[', b']', &bytes[content_start..]) {
            Some(rel) if bytes[content_start + rel] == b']' => {
                let close = content_start + rel;
                segments.push(classify(&name[content_start..close]));
                pos = close + 1;
            }
            // Another `[` before any `]`: retry the group from there.
            Some(rel) => pos = content_start + rel,
            None => break,
        }
    }

    segments
}

fn classify(content: &str) -> PathSegment {
    if content.is_empty() {
        return PathSegment::Push;
    }
    if content.bytes().all(|byte| byte.is_ascii_digit()) {
        match content.parse::<usize>() {
            Ok(index) if index <= MAX_LIST_INDEX => return PathSegment::Indexed(index),
            _ => {}
        }
    }
    PathSegment::Named(SmolStr::new(content))
}
