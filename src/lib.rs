//! # Animus
//!
//! Avatar emotion/personality simulation engine.
//!
//! An avatar's state lives on ten fixed bipolar trait axes, each a
//! normalized pair that always sums to one. Classified signals extracted
//! from user text (a top-ranked intent plus an emotion-score vector)
//! drive bounded, saturating adjustments of those axes through a
//! deterministic update policy. Classification and prose generation are
//! external collaborators behind traits; their failures degrade to
//! "no signal" and a fallback description rather than corrupting state.
//!
//! Pipeline: raw text → [`classification::SignalAdapter`] →
//! [`classification::ClassifiedSignal`] → [`engine::apply_signal`] →
//! mutated [`personality::Personality`] → [`presenter`] →
//! [`generation::DescriptionGenerator`].

pub mod avatar;
pub mod classification;
pub mod engine;
pub mod generation;
pub mod personality;
pub mod presenter;
pub mod utilities;

// Primary re-exports
pub use avatar::{Avatar, CharacterAdjective, Detail, DialogueStyle, LanguageStyle};
pub use classification::{
    ClassifiedSignal, EmotionClassifier, IntentCategory, IntentClassifier, IntentRanking,
    SignalAdapter,
};
pub use engine::{apply_signal, apply_update, process_utterance, shared, SharedAvatar, TraitChange};
pub use generation::{describe_with_fallback, DescriptionGenerator, FALLBACK_DESCRIPTION};
pub use personality::{Personality, TraitAxis};
pub use presenter::{display_profile, render_profile, trait_lines, PromptPayload};
pub use utilities::errors::{ClassificationError, GenerationError, TraitError};

/// Library version.
pub const VERSION: &str = "0.1.0";
