//! Schema descriptors.

use serde::{Deserialize, Serialize};

/// A named group of schema objects.
///
/// Schema names are compared case-insensitively. A schema may depend on other
/// schemas whose objects it references; those must be loaded and enabled
/// before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Initial state when loaded through `load_all_enabled`
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Schema {
    /// Create an enabled schema without dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            dependencies: Vec::new(),
            enabled: true,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the schema as disabled by default.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Lowercase form of the name used as map key.
    pub fn key(&self) -> String {
        schema_key(&self.name)
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies
            .iter()
            .any(|dependency| dependency.eq_ignore_ascii_case(name))
    }
}

pub(crate) fn schema_key(name: &str) -> String {
    name.to_ascii_lowercase()
}
