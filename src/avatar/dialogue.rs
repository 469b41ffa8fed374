//! Dialogue style descriptors: closed adjective and language-style sets.
//!
//! Both sets are deliberately exhaustive enums: an out-of-set value is a
//! deserialization failure, not a runtime validation branch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language register the character speaks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageStyle {
    #[serde(rename = "business abbreviations")]
    BusinessAbbreviations,
    #[serde(rename = "cowboy lingo")]
    CowboyLingo,
    #[serde(rename = "hackneyed cliches")]
    HackneyedCliches,
    #[serde(rename = "Internet meme slang")]
    InternetMemeSlang,
    #[serde(rename = "medical terminology")]
    MedicalTerminology,
    #[serde(rename = "movie quotes")]
    MovieQuotes,
    #[serde(rename = "obscure idioms")]
    ObscureIdioms,
    #[serde(rename = "Orwellian newspeak")]
    OrwellianNewspeak,
    #[serde(rename = "sports metaphors")]
    SportsMetaphors,
}

impl LanguageStyle {
    /// Display string for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessAbbreviations => "business abbreviations",
            Self::CowboyLingo => "cowboy lingo",
            Self::HackneyedCliches => "hackneyed cliches",
            Self::InternetMemeSlang => "Internet meme slang",
            Self::MedicalTerminology => "medical terminology",
            Self::MovieQuotes => "movie quotes",
            Self::ObscureIdioms => "obscure idioms",
            Self::OrwellianNewspeak => "Orwellian newspeak",
            Self::SportsMetaphors => "sports metaphors",
        }
    }
}

impl fmt::Display for LanguageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personality adjective applied to the character's dialogue delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterAdjective {
    Anxious,
    Contemplative,
    Curt,
    Expressive,
    Hilarious,
    Inquisitive,
    Intense,
    Mischievous,
    Snarky,
}

impl CharacterAdjective {
    /// Display string for this adjective.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Contemplative => "contemplative",
            Self::Curt => "curt",
            Self::Expressive => "expressive",
            Self::Hilarious => "hilarious",
            Self::Inquisitive => "inquisitive",
            Self::Intense => "intense",
            Self::Mischievous => "mischievous",
            Self::Snarky => "snarky",
        }
    }
}

impl fmt::Display for CharacterAdjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the character talks: adjectives, language register, and sample lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueStyle {
    /// Delivery adjectives.
    pub adjectives: Vec<CharacterAdjective>,
    /// Language register.
    pub colloquium: LanguageStyle,
    /// Example lines in the character's voice.
    #[serde(default)]
    pub example_dialogue: Vec<String>,
}

impl DialogueStyle {
    /// Create a dialogue style.
    pub fn new(
        adjectives: Vec<CharacterAdjective>,
        colloquium: LanguageStyle,
        example_dialogue: Vec<String>,
    ) -> Self {
        Self {
            adjectives,
            colloquium,
            example_dialogue,
        }
    }
}
