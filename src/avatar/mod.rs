//! The avatar aggregate: static metadata, dialogue style, and one owned
//! personality state.
//!
//! Avatars are explicit values constructed by the host application and
//! passed into the engine's entry points; nothing in this crate builds one
//! at load time.

pub mod detail;
pub mod dialogue;

pub use detail::Detail;
pub use dialogue::{CharacterAdjective, DialogueStyle, LanguageStyle};

use serde::{Deserialize, Serialize};

use crate::personality::Personality;

/// A simulated character: identity, voice, and evolving personality.
///
/// One avatar owns exactly one [`Personality`]; the personality has no
/// existence independent of its avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Identity metadata (opaque to the engine).
    pub detail: Detail,
    /// One-line summary of who the character is.
    #[serde(default)]
    pub core_description: String,
    /// What drives the character.
    #[serde(default)]
    pub motivations: Vec<String>,
    /// Character flaws.
    #[serde(default)]
    pub flaws: Vec<String>,
    /// How the character talks (consumed only by the presenter).
    pub dialogue_style: DialogueStyle,
    /// The evolving trait state.
    #[serde(default)]
    pub personality: Personality,
}

impl Avatar {
    /// Assemble an avatar from its parts.
    pub fn new(
        detail: Detail,
        core_description: impl Into<String>,
        motivations: Vec<String>,
        flaws: Vec<String>,
        dialogue_style: DialogueStyle,
        personality: Personality,
    ) -> Self {
        Self {
            detail,
            core_description: core_description.into(),
            motivations,
            flaws,
            dialogue_style,
            personality,
        }
    }

    /// Load an avatar definition from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize this avatar to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// The character's greeting line.
    pub fn greet(&self) -> String {
        if self.detail.name.is_empty() {
            "Hello, I am an Avatar.".to_string()
        } else {
            format!("Hello, my name is {}.", self.detail.name)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
