use serde::{Deserialize, Serialize};

/// Options for serializing a list of form controls.
///
/// The default produces a URL-encoded string and leaves out disabled and
/// valueless controls.
///
/// # Examples
/// ```
/// use serde_form::SerializeOptions;
///
/// let opts = SerializeOptions::new().with_hash(true).with_empty(true);
/// assert!(opts.hash);
/// assert!(!opts.disabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Produce a nested tree instead of a query string.
    pub hash: bool,
    /// Include disabled controls.
    pub disabled: bool,
    /// Include controls without a value, as empty strings.
    pub empty: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the tree-producing configuration.
    pub fn hash() -> Self {
        Self::default().with_hash(true)
    }

    pub fn with_hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }
}
