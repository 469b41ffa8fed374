//! Description generation collaborator boundary.
//!
//! Turning a structured profile into prose is delegated to an external
//! generator. Failure is an expected operational condition: callers go
//! through [`describe_with_fallback`], which substitutes the documented
//! fallback string so a generation outage never propagates into trait
//! state or crashes the host.

pub mod openai;

pub use openai::OpenAiGenerator;

use std::fmt;

use async_trait::async_trait;

use crate::presenter::PromptPayload;
use crate::utilities::errors::GenerationError;

/// The documented fallback returned when generation fails.
pub const FALLBACK_DESCRIPTION: &str = "Failed to generate character description.";

/// Turns a structured character profile into prose.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync + fmt::Debug {
    /// Generate a description (synchronous).
    fn generate(&self, payload: &PromptPayload) -> Result<String, GenerationError>;

    /// Generate a description (asynchronous).
    ///
    /// Default implementation reports that no async path exists.
    async fn agenerate(&self, payload: &PromptPayload) -> Result<String, GenerationError> {
        let _ = payload;
        Err(GenerationError::AsyncUnsupported)
    }
}

/// Generate a description, degrading to [`FALLBACK_DESCRIPTION`] on any
/// failure.
pub fn describe_with_fallback(
    generator: &dyn DescriptionGenerator,
    payload: &PromptPayload,
) -> String {
    match generator.generate(payload) {
        Ok(description) => description,
        Err(err) => {
            log::warn!("description generation failed, using fallback: {err}");
            FALLBACK_DESCRIPTION.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
