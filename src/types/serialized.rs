use serde::ser::{Serialize, Serializer};

use super::FormValue;

/// Result of [`serialize`](crate::serialize): a tree in hash mode, a query
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Serialized {
    Hash(FormValue),
    Query(String),
}

impl Serialized {
    pub fn as_hash(&self) -> Option<&FormValue> {
        match self {
            Serialized::Hash(value) => Some(value),
            Serialized::Query(_) => None,
        }
    }

    pub fn as_query(&self) -> Option<&str> {
        match self {
            Serialized::Query(query) => Some(query),
            Serialized::Hash(_) => None,
        }
    }

    pub fn into_hash(self) -> Option<FormValue> {
        match self {
            Serialized::Hash(value) => Some(value),
            Serialized::Query(_) => None,
        }
    }

    pub fn into_query(self) -> Option<String> {
        match self {
            Serialized::Query(query) => Some(query),
            Serialized::Hash(_) => None,
        }
    }
}

impl Serialize for Serialized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Serialized::Hash(value) => value.serialize(serializer),
            Serialized::Query(query) => serializer.serialize_str(query),
        }
    }
}
