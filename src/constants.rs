use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when encoding a URI component: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const SUCCESSFUL_NODES: &[&str] = &["input", "select", "textarea", "keygen"];

pub const SUBMITTER_TYPES: &[&str] = &["submit", "button", "image", "reset", "file"];

pub const PUSH_SUFFIX: &str = "[]";

/// Largest `[n]` treated as a list position. Longer digit runs address a
/// map key, so a single field can never allocate more than this many slots.
pub const MAX_LIST_INDEX: usize = 1_000;

#[inline]
pub fn is_bracket(byte: u8) -> bool {
    matches!(byte, b'[' | b']')
}

/// `node_name` is matched as a prefix, case-insensitively.
pub fn is_successful_node(node_name: &str) -> bool {
    let bytes = node_name.as_bytes();
    SUCCESSFUL_NODES.iter().any(|node| {
        bytes.len() >= node.len() && bytes[..node.len()].eq_ignore_ascii_case(node.as_bytes())
    })
}

pub fn is_submitter_type(kind: &str) -> bool {
    SUBMITTER_TYPES
        .iter()
        .any(|submitter| submitter.eq_ignore_ascii_case(kind))
}
