//! Structural assignment of tokenized paths into a [`FormValue`] tree.
//!
//! Collision rules, applied at the level where a new path meets existing
//! structure:
//! - a value landing on a scalar turns it into `[old, new]`, on a list it is
//!   appended, on a map it is a conflict;
//! - `[]` appends a fresh subtree to a list (promoting a scalar first);
//! - `[n]` descends into slot `n`, padding with `Null` as needed;
//! - a key descends into a map, as does `[n]` past [`MAX_LIST_INDEX`].
//!
//! Any other pairing of segment and existing node is a
//! [`StructuralConflict`](crate::ErrorKind::StructuralConflict). A failed
//! merge leaves the tree untouched: nodes are only created below vacant
//! slots, and nothing below a vacant slot can conflict.

use crate::constants::MAX_LIST_INDEX;
use crate::path::PathSegment;
use crate::types::{FormMap, FormValue};
use crate::{Error, Result};

/// Build the subtree for `segments` from nothing.
///
/// # Examples
/// ```
/// use serde_form::{assign, tokenize};
///
/// let tree = assign(&tokenize("a[2]"), "x");
/// assert_eq!(tree.to_string(), r#"{"a": [null, null, "x"]}"#);
/// ```
pub fn assign(segments: &[PathSegment], value: &str) -> FormValue {
    let Some((head, rest)) = segments.split_first() else {
        return FormValue::Scalar(value.to_string());
    };
    match head {
        PathSegment::Push => FormValue::List(vec![assign(rest, value)]),
        PathSegment::Indexed(index) if *index <= MAX_LIST_INDEX => {
            let mut items = vec![FormValue::Null; *index];
            items.push(assign(rest, value));
            FormValue::List(items)
        }
        _ => {
            let mut map = FormMap::new();
            map.insert(map_key(head), assign(rest, value));
            FormValue::Map(map)
        }
    }
}

/// Merge `value` at `segments` into `target`.
///
/// # Examples
/// ```
/// use serde_form::{merge, tokenize, FormValue};
///
/// let mut root = FormValue::empty_map();
/// merge(&mut root, &tokenize("a"), "1").unwrap();
/// merge(&mut root, &tokenize("a"), "2").unwrap();
/// assert_eq!(root.to_string(), r#"{"a": ["1", "2"]}"#);
///
/// assert!(merge(&mut root, &tokenize("a[b]"), "3").is_err());
/// ```
pub fn merge(target: &mut FormValue, segments: &[PathSegment], value: &str) -> Result<()> {
    let Some((head, rest)) = segments.split_first() else {
        return merge_leaf(target, value);
    };

    match head {
        PathSegment::Push => {
            match target {
                FormValue::Null => *target = FormValue::List(Vec::new()),
                FormValue::Scalar(_) => {
                    let existing = target.take();
                    *target = FormValue::List(vec![existing]);
                }
                FormValue::List(_) | FormValue::Map(_) => {}
            }
            match target {
                FormValue::List(items) => {
                    items.push(assign(rest, value));
                    Ok(())
                }
                other => Err(conflict(head, other)),
            }
        }
        PathSegment::Indexed(index) if *index <= MAX_LIST_INDEX => {
            if target.is_null() {
                *target = FormValue::List(Vec::new());
            }
            match target {
                FormValue::List(items) => {
                    if items.len() <= *index {
                        items.resize(*index + 1, FormValue::Null);
                    }
                    merge(&mut items[*index], rest, value)
                }
                other => Err(conflict(head, other)),
            }
        }
        _ => {
            if target.is_null() {
                *target = FormValue::empty_map();
            }
            match target {
                FormValue::Map(map) => {
                    let slot = map.entry(map_key(head)).or_default();
                    merge(slot, rest, value)
                }
                other => Err(conflict(head, other)),
            }
        }
    }
}

/// Owning form of [`merge`]: consumes the root and hands it back.
pub fn assign_into(mut root: FormValue, segments: &[PathSegment], value: &str) -> Result<FormValue> {
    merge(&mut root, segments, value)?;
    Ok(root)
}

fn merge_leaf(target: &mut FormValue, value: &str) -> Result<()> {
    match target {
        FormValue::Null => *target = FormValue::Scalar(value.to_string()),
        FormValue::Scalar(_) => {
            let existing = target.take();
            *target = FormValue::List(vec![existing, FormValue::from(value)]);
        }
        FormValue::List(items) => items.push(FormValue::from(value)),
        FormValue::Map(_) => {
            return Err(Error::conflict(
                "cannot assign a value where a map already exists",
            ))
        }
    }
    Ok(())
}

fn addresses_list(segment: &PathSegment) -> bool {
    segment.is_push()
        || matches!(segment, PathSegment::Indexed(index) if *index <= MAX_LIST_INDEX)
}

fn map_key(segment: &PathSegment) -> String {
    if let PathSegment::Indexed(index) = segment {
        return itoa::Buffer::new().format(*index).to_string();
    }
    segment.key().unwrap_or_default().to_string()
}

fn conflict(segment: &PathSegment, found: &FormValue) -> Error {
    let expected = if addresses_list(segment) { "list" } else { "map" };
    Error::conflict(format!(
        "segment `{segment}` needs a {expected} but found a {}",
        found.type_name()
    ))
}
