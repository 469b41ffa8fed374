//! Intent classification collaborator boundary and the closed intent
//! label taxonomy.
//!
//! Three disjoint label sets partition every known intent by its effect on
//! trait state: emotion-affecting, personality-affecting, and neutral. A
//! top-ranked label outside all three is treated as neutral by the engine.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utilities::errors::ClassificationError;

// ---------------------------------------------------------------------------
// Intent label sets
// ---------------------------------------------------------------------------

/// Intents that move the emotional axes.
pub const EMOTION_INTENT_LABELS: [&str; 8] = [
    "express_emotion_towards_character", // liking, disappointment, ...
    "seek_emotional_support",            // user expects comfort
    "praise_character",
    "criticize_character",
    "share_personal_emotion", // empathetic response
    "encourage_character",
    "blame_character",
    "show_sympathy_for_character",
];

/// Intents that move the personality axes.
pub const PERSONALITY_INTENT_LABELS: [&str; 7] = [
    "challenge_character_belief", // questions beliefs, influences openness
    "suggest_personality_change",
    "reinforce_character_trait",
    "request_character_reflection",
    "encourage_personal_growth",
    "highlight_flaws_in_character",
    "propose_new_interest",
];

/// Intents with no trait impact.
pub const NEUTRAL_INTENT_LABELS: [&str; 8] = [
    "ask_about_character_background",
    "request_factual_information",
    "confirm_character_action",
    "ask_for_progress_update",
    "seek_instruction",
    "inquire_about_preferences",
    "ask_for_story_continuation",
    "explore_hypothetical_scenario",
];

static EMOTION_INTENT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EMOTION_INTENT_LABELS.into_iter().collect());

static PERSONALITY_INTENT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PERSONALITY_INTENT_LABELS.into_iter().collect());

static NEUTRAL_INTENT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEUTRAL_INTENT_LABELS.into_iter().collect());

/// Every known intent label, in table order: the candidate list handed to
/// a zero-shot intent classifier.
pub fn all_intent_labels() -> Vec<&'static str> {
    EMOTION_INTENT_LABELS
        .into_iter()
        .chain(PERSONALITY_INTENT_LABELS)
        .chain(NEUTRAL_INTENT_LABELS)
        .collect()
}

// ---------------------------------------------------------------------------
// Intent category
// ---------------------------------------------------------------------------

/// Which of the closed groups a classified intent label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    /// Moves the emotional axes.
    Emotion,
    /// Moves the personality axes.
    Personality,
    /// No trait impact.
    Neutral,
    /// Not in any known set; handled exactly like neutral.
    Unknown,
}

impl IntentCategory {
    /// Categorize an intent label by table lookup.
    pub fn of(label: &str) -> Self {
        if EMOTION_INTENT_SET.contains(label) {
            Self::Emotion
        } else if PERSONALITY_INTENT_SET.contains(label) {
            Self::Personality
        } else if NEUTRAL_INTENT_SET.contains(label) {
            Self::Neutral
        } else {
            Self::Unknown
        }
    }
}

// ---------------------------------------------------------------------------
// Intent classifier boundary
// ---------------------------------------------------------------------------

/// A ranked zero-shot classification result.
///
/// `labels` and `scores` are index-aligned and descending by score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRanking {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

impl IntentRanking {
    /// Build a ranking, validating that labels and scores align.
    pub fn new(labels: Vec<String>, scores: Vec<f64>) -> Result<Self, ClassificationError> {
        if labels.is_empty() || labels.len() != scores.len() {
            return Err(ClassificationError::EmptyRanking);
        }
        Ok(Self { labels, scores })
    }

    /// The top-ranked label and its confidence, the only entry the update
    /// engine consumes.
    pub fn top(&self) -> Option<(&str, f64)> {
        self.labels
            .first()
            .map(|label| (label.as_str(), self.scores[0]))
    }
}

/// Ranks a fixed candidate label set against raw text.
#[async_trait]
pub trait IntentClassifier: Send + Sync + fmt::Debug {
    /// Rank the candidate labels against the text (synchronous).
    fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<IntentRanking, ClassificationError>;

    /// Rank the candidate labels against the text (asynchronous).
    ///
    /// Default implementation reports unavailability.
    async fn aclassify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<IntentRanking, ClassificationError> {
        let _ = (text, candidate_labels);
        Err(ClassificationError::IntentUnavailable {
            message: "async classification not implemented for this classifier".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sets_are_disjoint() {
        for label in EMOTION_INTENT_LABELS {
            assert!(!PERSONALITY_INTENT_SET.contains(label), "{label}");
            assert!(!NEUTRAL_INTENT_SET.contains(label), "{label}");
        }
        for label in PERSONALITY_INTENT_LABELS {
            assert!(!NEUTRAL_INTENT_SET.contains(label), "{label}");
        }
    }

    #[test]
    fn all_intent_labels_concatenates_in_table_order() {
        let all = all_intent_labels();
        assert_eq!(all.len(), 23);
        assert_eq!(all[0], "express_emotion_towards_character");
        assert_eq!(all[8], "challenge_character_belief");
        assert_eq!(all[22], "explore_hypothetical_scenario");
    }

    #[test]
    fn category_lookup() {
        assert_eq!(
            IntentCategory::of("praise_character"),
            IntentCategory::Emotion
        );
        assert_eq!(
            IntentCategory::of("encourage_personal_growth"),
            IntentCategory::Personality
        );
        assert_eq!(
            IntentCategory::of("seek_instruction"),
            IntentCategory::Neutral
        );
        assert_eq!(
            IntentCategory::of("order_a_pizza"),
            IntentCategory::Unknown
        );
    }

    #[test]
    fn ranking_validates_alignment() {
        assert!(IntentRanking::new(vec![], vec![]).is_err());
        assert!(IntentRanking::new(vec!["a".to_string()], vec![0.9, 0.1]).is_err());

        let ranking =
            IntentRanking::new(vec!["a".to_string(), "b".to_string()], vec![0.9, 0.1]).unwrap();
        assert_eq!(ranking.top(), Some(("a", 0.9)));
    }
}
