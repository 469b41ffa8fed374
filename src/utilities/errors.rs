//! Error types for the avatar engine.
//!
//! Trait-math errors (`TraitError`) are programming-contract violations and
//! fail loud; classifier and generator failures are expected operational
//! conditions that callers degrade from (no signal / fallback description).

use thiserror::Error;

/// Errors from the personality trait layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TraitError {
    /// An axis identifier outside the fixed ten-axis registry was requested.
    #[error("{name} is not a valid trait axis")]
    UnknownAxis { name: String },

    /// An attempted pole value lies outside the closed range [0.0, 1.0].
    #[error("trait value {value} must be between 0.0 and 1.0")]
    OutOfRange { value: f64 },
}

/// Errors from the emotion/intent classification collaborators.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The emotion classifier failed or timed out.
    #[error("emotion classifier unavailable: {message}")]
    EmotionUnavailable { message: String },

    /// The intent classifier failed or timed out.
    #[error("intent classifier unavailable: {message}")]
    IntentUnavailable { message: String },

    /// The intent classifier returned an empty or misaligned ranking.
    #[error("intent classifier returned no usable ranking")]
    EmptyRanking,
}

/// Errors from the description-generation collaborator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The generator endpoint failed, timed out, or rejected the request.
    #[error("description generator unavailable: {message}")]
    Unavailable { message: String },

    /// The generator responded without any usable content.
    #[error("generator response contained no description")]
    EmptyResponse,

    /// This generator has no async implementation.
    #[error("async generation not implemented for this generator")]
    AsyncUnsupported,
}
