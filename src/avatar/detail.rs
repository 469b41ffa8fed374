//! Static character metadata.
//!
//! All of this is opaque to the trait-update engine; only the presenter
//! reads it. Optional fields carry explicit defaults so presence checks
//! are never needed downstream.

use serde::{Deserialize, Serialize};

fn unspecified() -> String {
    "Unspecified".to_string()
}

/// Identity metadata for one avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    /// Character name.
    pub name: String,
    /// Pronouns, defaulting to "Unspecified".
    #[serde(default = "unspecified")]
    pub pronouns: String,
    /// Short free-form description.
    #[serde(default)]
    pub description: String,
    /// Narrative role (e.g. "Hero").
    #[serde(default)]
    pub role: String,
    /// Stage of life, defaulting to "Unspecified".
    #[serde(default = "unspecified")]
    pub stage_of_life: String,
    /// Alternative names the character answers to.
    #[serde(default)]
    pub alternative_names: Vec<String>,
    /// Hobbies.
    #[serde(default)]
    pub hobbies: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Detail {
    /// Create a `Detail` with the given name and every optional field at
    /// its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pronouns: unspecified(),
            description: String::new(),
            role: String::new(),
            stage_of_life: unspecified(),
            alternative_names: Vec::new(),
            hobbies: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the pronouns.
    pub fn with_pronouns(mut self, pronouns: impl Into<String>) -> Self {
        self.pronouns = pronouns.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}
