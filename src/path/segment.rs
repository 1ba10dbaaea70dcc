use std::fmt::{self, Write as _};

use smallvec::SmallVec;
use smol_str::SmolStr;

/// One step of a bracketed field name.
///
/// # Examples
/// ```
/// use serde_form::PathSegment;
///
/// assert_eq!(PathSegment::Indexed(3).to_string(), "[3]");
/// assert_eq!(PathSegment::Push.to_string(), "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Leading identifier before any bracket.
    Root(SmolStr),
    /// `[name]` with non-numeric content.
    Named(SmolStr),
    /// `[n]` with digits only.
    Indexed(usize),
    /// `[]`
    Push,
}

impl PathSegment {
    pub fn root(name: impl AsRef<str>) -> Self {
        PathSegment::Root(SmolStr::new(name))
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        PathSegment::Named(SmolStr::new(name))
    }

    /// Map key addressed by this segment, if it addresses one.
    pub fn key(&self) -> Option<&str> {
        match self {
            PathSegment::Root(name) | PathSegment::Named(name) => Some(name.as_str()),
            PathSegment::Indexed(_) | PathSegment::Push => None,
        }
    }

    pub fn is_push(&self) -> bool {
        matches!(self, PathSegment::Push)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Root(name) => f.write_str(name),
            PathSegment::Named(name) => write!(f, "[{name}]"),
            PathSegment::Indexed(index) => {
                let mut buf = itoa::Buffer::new();
                write!(f, "[{}]", buf.format(*index))
            }
            PathSegment::Push => f.write_str("[]"),
        }
    }
}

/// Tokenized field name. Most names are a handful of segments deep.
pub type KeyPath = SmallVec<[PathSegment; 4]>;

/// Render segments back into bracket notation.
///
/// A leading `Named` segment is written bare so that `[a][b]` and `a[b]`
/// render the same way once tokenized.
pub fn to_field_name(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        match segment {
            PathSegment::Named(name) if idx == 0 => out.push_str(name),
            other => {
                let _ = write!(out, "{other}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[rstest::rstest]
    fn test_segment_display() {
        assert_eq!(PathSegment::root("people").to_string(), "people");
        assert_eq!(PathSegment::named("name").to_string(), "[name]");
        assert_eq!(PathSegment::Indexed(600).to_string(), "[600]");
        assert_eq!(PathSegment::Push.to_string(), "[]");
    }

    #[rstest::rstest]
    fn test_segment_key() {
        assert_eq!(PathSegment::root("a").key(), Some("a"));
        assert_eq!(PathSegment::named("b").key(), Some("b"));
        assert_eq!(PathSegment::Indexed(0).key(), None);
        assert!(PathSegment::Push.key().is_none());
        assert!(PathSegment::Push.is_push());
    }

    #[rstest::rstest]
    fn test_to_field_name() {
        let path: KeyPath = smallvec![
            PathSegment::root("people"),
            PathSegment::Indexed(0),
            PathSegment::named("tags"),
            PathSegment::Push,
        ];
        assert_eq!(to_field_name(&path), "people[0][tags][]");

        let headless: KeyPath = smallvec![PathSegment::named("a"), PathSegment::named("b")];
        assert_eq!(to_field_name(&headless), "a[b]");
        assert_eq!(to_field_name(&[]), "");
    }
}
