//! The fixed ten-axis trait registry.
//!
//! Each axis is a bipolar pair of opposite pole names ("Sadness"/"Joy").
//! The set is closed for the lifetime of the process; declaration order
//! below is the canonical registry order used for snapshots and display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utilities::errors::TraitError;

/// One of the ten bipolar personality/emotion axes.
///
/// The first five axes carry the emotional dimensions, the last five the
/// personality dimensions. Pole names are distinct within every axis and
/// compare case-insensitively against incoming signal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitAxis {
    #[serde(rename = "Sadness-Joy")]
    SadnessJoy,
    #[serde(rename = "Anger-Fear")]
    AngerFear,
    #[serde(rename = "Disgust-Trust")]
    DisgustTrust,
    #[serde(rename = "Anticipation-Surprise")]
    AnticipationSurprise,
    #[serde(rename = "Static-Dynamic")]
    StaticDynamic,
    #[serde(rename = "Negative-Positive")]
    NegativePositive,
    #[serde(rename = "Aggressive-Peaceful")]
    AggressivePeaceful,
    #[serde(rename = "Cautious-Open")]
    CautiousOpen,
    #[serde(rename = "Introvert-Extravert")]
    IntrovertExtravert,
    #[serde(rename = "Insecure-Confident")]
    InsecureConfident,
}

/// Number of registered axes.
pub const AXIS_COUNT: usize = 10;

impl TraitAxis {
    /// All axes in registry order.
    pub const ALL: [TraitAxis; AXIS_COUNT] = [
        Self::SadnessJoy,
        Self::AngerFear,
        Self::DisgustTrust,
        Self::AnticipationSurprise,
        Self::StaticDynamic,
        Self::NegativePositive,
        Self::AggressivePeaceful,
        Self::CautiousOpen,
        Self::IntrovertExtravert,
        Self::InsecureConfident,
    ];

    /// The axis identifier, `"<Pole1>-<Pole2>"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SadnessJoy => "Sadness-Joy",
            Self::AngerFear => "Anger-Fear",
            Self::DisgustTrust => "Disgust-Trust",
            Self::AnticipationSurprise => "Anticipation-Surprise",
            Self::StaticDynamic => "Static-Dynamic",
            Self::NegativePositive => "Negative-Positive",
            Self::AggressivePeaceful => "Aggressive-Peaceful",
            Self::CautiousOpen => "Cautious-Open",
            Self::IntrovertExtravert => "Introvert-Extravert",
            Self::InsecureConfident => "Insecure-Confident",
        }
    }

    /// The two opposite pole names, first then second.
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Self::SadnessJoy => ("Sadness", "Joy"),
            Self::AngerFear => ("Anger", "Fear"),
            Self::DisgustTrust => ("Disgust", "Trust"),
            Self::AnticipationSurprise => ("Anticipation", "Surprise"),
            Self::StaticDynamic => ("Static", "Dynamic"),
            Self::NegativePositive => ("Negative", "Positive"),
            Self::AggressivePeaceful => ("Aggressive", "Peaceful"),
            Self::CautiousOpen => ("Cautious", "Open"),
            Self::IntrovertExtravert => ("Introvert", "Extravert"),
            Self::InsecureConfident => ("Insecure", "Confident"),
        }
    }

    /// Position of this axis in registry order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve an axis identifier to its registry entry.
    ///
    /// Fails with [`TraitError::UnknownAxis`] for any identifier outside the
    /// fixed set. Reaching that error from correctly wired code means a
    /// config or wiring bug, not a user error.
    pub fn parse(name: &str) -> Result<Self, TraitError> {
        Self::ALL
            .iter()
            .find(|axis| axis.name() == name)
            .copied()
            .ok_or_else(|| TraitError::UnknownAxis {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for TraitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
