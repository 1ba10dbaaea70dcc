use serde::{Deserialize, Serialize};

/// One `(name, value)` pair handed to a serializer.
///
/// `list_member` marks values that came from a multi-valued control (a
/// `select-multiple` option) and should land in a list in hash mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "listMember", alias = "list_member")]
    pub list_member: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            list_member: false,
        }
    }

    pub fn list_member(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            list_member: true,
            ..Self::new(name, value)
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Field {
    fn from((name, value): (N, V)) -> Self {
        Field::new(name, value)
    }
}
