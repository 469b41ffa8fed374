//! Deterministic classifier stand-ins for tests and demo hosts.
//!
//! These substitute for the external classification collaborators wherever
//! a real model is unavailable or undesirable: scripted variants return a
//! fixed result for any input, failing variants always report
//! unavailability so degradation paths can be exercised.

use std::collections::HashMap;

use crate::classification::emotion::EmotionClassifier;
use crate::classification::intent::{IntentClassifier, IntentRanking};
use crate::utilities::errors::ClassificationError;

/// Emotion classifier returning the same score mapping for every text.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEmotionClassifier {
    /// The scores handed back on every call.
    pub scores: HashMap<String, f64>,
}

impl ScriptedEmotionClassifier {
    /// Build from `(label, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: scores.into_iter().map(|(l, s)| (l.into(), s)).collect(),
        }
    }
}

impl EmotionClassifier for ScriptedEmotionClassifier {
    fn classify(&self, _text: &str) -> Result<HashMap<String, f64>, ClassificationError> {
        Ok(self.scores.clone())
    }
}

/// Emotion classifier that always reports unavailability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEmotionClassifier;

impl EmotionClassifier for FailingEmotionClassifier {
    fn classify(&self, _text: &str) -> Result<HashMap<String, f64>, ClassificationError> {
        Err(ClassificationError::EmotionUnavailable {
            message: "scripted failure".to_string(),
        })
    }
}

/// Intent classifier that always ranks one configured label on top.
///
/// The remaining candidates follow in their given order with zero scores,
/// preserving the index-aligned descending contract.
#[derive(Debug, Clone)]
pub struct ScriptedIntentClassifier {
    /// Label to place first.
    pub top_label: String,
    /// Confidence of the top label.
    pub confidence: f64,
}

impl ScriptedIntentClassifier {
    pub fn new(top_label: impl Into<String>, confidence: f64) -> Self {
        Self {
            top_label: top_label.into(),
            confidence,
        }
    }
}

impl IntentClassifier for ScriptedIntentClassifier {
    fn classify(
        &self,
        _text: &str,
        candidate_labels: &[&str],
    ) -> Result<IntentRanking, ClassificationError> {
        let mut labels = vec![self.top_label.clone()];
        let mut scores = vec![self.confidence];
        for candidate in candidate_labels {
            if *candidate != self.top_label {
                labels.push(candidate.to_string());
                scores.push(0.0);
            }
        }
        IntentRanking::new(labels, scores)
    }
}

/// Intent classifier that always reports unavailability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingIntentClassifier;

impl IntentClassifier for FailingIntentClassifier {
    fn classify(
        &self,
        _text: &str,
        _candidate_labels: &[&str],
    ) -> Result<IntentRanking, ClassificationError> {
        Err(ClassificationError::IntentUnavailable {
            message: "scripted failure".to_string(),
        })
    }
}
