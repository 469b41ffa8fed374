//! Signal classification: the boundary between raw user text and the
//! trait-update engine.
//!
//! External collaborators (an emotion classifier and a zero-shot intent
//! classifier) are wrapped by [`SignalAdapter`], which normalizes their
//! output into one [`ClassifiedSignal`] per utterance and degrades any
//! collaborator failure to "no signal" instead of an error.

pub mod emotion;
pub mod intent;
pub mod scripted;

pub use emotion::{EmotionClassifier, EMOTION_LABELS};
pub use intent::{
    all_intent_labels, IntentCategory, IntentClassifier, IntentRanking, EMOTION_INTENT_LABELS,
    NEUTRAL_INTENT_LABELS, PERSONALITY_INTENT_LABELS,
};
pub use scripted::{
    FailingEmotionClassifier, FailingIntentClassifier, ScriptedEmotionClassifier,
    ScriptedIntentClassifier,
};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ClassifiedSignal
// ---------------------------------------------------------------------------

/// The classified result of one utterance: top intent plus emotion scores.
///
/// Transient; consumed by a single update-engine invocation and discarded.
/// Carries an id and timestamp for log correlation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedSignal {
    /// Unique id for this signal instance.
    pub signal_id: Uuid,
    /// UTC creation time.
    pub timestamp: DateTime<Utc>,
    /// Top-ranked intent label.
    pub intent_label: String,
    /// Confidence of the top intent, in [0.0, 1.0].
    pub intent_confidence: f64,
    /// Emotion-label score mapping, each score in [0.0, 1.0].
    pub emotion_scores: HashMap<String, f64>,
}

impl ClassifiedSignal {
    /// Build a signal with a fresh id and timestamp.
    pub fn new(
        intent_label: impl Into<String>,
        intent_confidence: f64,
        emotion_scores: HashMap<String, f64>,
    ) -> Self {
        Self {
            signal_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            intent_label: intent_label.into(),
            intent_confidence,
            emotion_scores,
        }
    }

    /// Which closed group the intent label falls into.
    pub fn category(&self) -> IntentCategory {
        IntentCategory::of(&self.intent_label)
    }

    /// Score for an emotion label; absence means zero.
    pub fn emotion_score(&self, label: &str) -> f64 {
        self.emotion_scores.get(label).copied().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// SignalAdapter
// ---------------------------------------------------------------------------

/// Wraps the two classification collaborators behind one call.
///
/// A failed or empty classification is logged and mapped to `None`: a
/// single unavailable collaborator never corrupts or halts the flow, it
/// just produces no signal for that utterance.
#[derive(Debug)]
pub struct SignalAdapter {
    emotion: Box<dyn EmotionClassifier>,
    intent: Box<dyn IntentClassifier>,
}

impl SignalAdapter {
    /// Wire an adapter from its two collaborators.
    pub fn new(emotion: Box<dyn EmotionClassifier>, intent: Box<dyn IntentClassifier>) -> Self {
        Self { emotion, intent }
    }

    /// Classify one utterance into a signal, or `None` when either
    /// collaborator is unavailable.
    pub fn classify(&self, text: &str) -> Option<ClassifiedSignal> {
        let emotion_scores = match self.emotion.classify(text) {
            Ok(scores) => scores,
            Err(err) => {
                log::warn!("emotion classification degraded to no-signal: {err}");
                return None;
            }
        };

        let candidates = all_intent_labels();
        let ranking = match self.intent.classify(text, &candidates) {
            Ok(ranking) => ranking,
            Err(err) => {
                log::warn!("intent classification degraded to no-signal: {err}");
                return None;
            }
        };

        let (intent_label, intent_confidence) = match ranking.top() {
            Some(top) => top,
            None => {
                log::warn!("intent ranking was empty; treating as no-signal");
                return None;
            }
        };

        let signal = ClassifiedSignal::new(intent_label, intent_confidence, emotion_scores);
        log::debug!(
            "classified signal {}: intent={} confidence={:.3} emotions={}",
            signal.signal_id,
            signal.intent_label,
            signal.intent_confidence,
            signal.emotion_scores.len(),
        );
        Some(signal)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
