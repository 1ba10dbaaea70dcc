use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::is_submitter_type;

/// The `type` of a form control, as far as serialization cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ControlType {
    Checkbox,
    Radio,
    SelectMultiple,
    /// Every other type (`text`, `hidden`, `select-one`, `submit`, ...).
    Other(SmolStr),
}

impl ControlType {
    pub fn as_str(&self) -> &str {
        match self {
            ControlType::Checkbox => "checkbox",
            ControlType::Radio => "radio",
            ControlType::SelectMultiple => "select-multiple",
            ControlType::Other(kind) => kind.as_str(),
        }
    }

    pub fn is_checkable(&self) -> bool {
        matches!(self, ControlType::Checkbox | ControlType::Radio)
    }

    pub fn is_submitter(&self) -> bool {
        match self {
            ControlType::Other(kind) => is_submitter_type(kind),
            _ => false,
        }
    }
}

impl Default for ControlType {
    fn default() -> Self {
        ControlType::Other(SmolStr::new_static("text"))
    }
}

impl From<&str> for ControlType {
    fn from(kind: &str) -> Self {
        let lower = kind.to_ascii_lowercase();
        match lower.as_str() {
            "checkbox" => ControlType::Checkbox,
            "radio" => ControlType::Radio,
            "select-multiple" => ControlType::SelectMultiple,
            _ => ControlType::Other(SmolStr::new(lower)),
        }
    }
}

impl From<String> for ControlType {
    fn from(kind: String) -> Self {
        ControlType::from(kind.as_str())
    }
}

impl From<ControlType> for String {
    fn from(kind: ControlType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            selected,
        }
    }
}

/// A form control with the state a browser would expose for it.
///
/// This is plain data: whoever walks the real form fills it in.
///
/// # Examples
/// ```
/// use serde_form::Control;
///
/// let control: Control =
///     serde_json::from_str(r#"{"type": "checkbox", "name": "ok", "value": "on"}"#).unwrap();
/// assert_eq!(control.node_name, "input");
/// assert!(!control.checked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(default = "default_node_name")]
    pub node_name: String,
    #[serde(rename = "type", default)]
    pub kind: ControlType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

fn default_node_name() -> String {
    "input".to_string()
}

impl Control {
    pub fn input(
        kind: impl Into<ControlType>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            node_name: default_node_name(),
            kind: kind.into(),
            name: name.into(),
            value: value.into(),
            checked: false,
            disabled: false,
            options: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input("text", name, value)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::input(ControlType::Checkbox, name, value)
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::input(ControlType::Radio, name, value)
        }
    }

    pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            node_name: "textarea".to_string(),
            ..Self::input("textarea", name, value)
        }
    }

    pub fn select_multiple(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            node_name: "select".to_string(),
            options,
            ..Self::input(ControlType::SelectMultiple, name, "")
        }
    }

    pub fn with_node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = node_name.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// What a browser reports as the control's value. For a multi-select
    /// that is the first selected option, or empty.
    pub fn current_value(&self) -> &str {
        match self.kind {
            ControlType::SelectMultiple => self
                .options
                .iter()
                .find(|option| option.selected)
                .map(|option| option.value.as_str())
                .unwrap_or(""),
            _ => &self.value,
        }
    }
}
