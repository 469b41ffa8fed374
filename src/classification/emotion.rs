//! Emotion classification collaborator boundary.
//!
//! The engine consumes a label → score mapping per utterance. Scores need
//! not sum to one, and a label absent from the mapping is treated as a
//! score of zero downstream.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::utilities::errors::ClassificationError;

/// The documented minimum label set an emotion classifier must cover.
pub const EMOTION_LABELS: [&str; 7] = [
    "joy", "anger", "disgust", "surprise", "neutral", "sadness", "fear",
];

/// Turns raw text into an emotion-label score distribution.
///
/// Implementations wrap whatever model actually does the work (a hosted
/// classifier, a local pipeline, a scripted stand-in for tests). Failures
/// are expected operational conditions; the signal adapter degrades them
/// to "no signal" rather than propagating.
#[async_trait]
pub trait EmotionClassifier: Send + Sync + fmt::Debug {
    /// Classify text into emotion scores (synchronous).
    ///
    /// Each score lies in [0.0, 1.0]; the total need not sum to 1.
    fn classify(&self, text: &str) -> Result<HashMap<String, f64>, ClassificationError>;

    /// Classify text into emotion scores (asynchronous).
    ///
    /// Default implementation reports unavailability. Override for
    /// network-backed classifiers.
    async fn aclassify(&self, text: &str) -> Result<HashMap<String, f64>, ClassificationError> {
        let _ = text;
        Err(ClassificationError::EmotionUnavailable {
            message: "async classification not implemented for this classifier".to_string(),
        })
    }
}
