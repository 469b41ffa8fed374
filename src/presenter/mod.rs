//! Profile presentation: read-only rendering of an avatar snapshot.
//!
//! Two consumers: a human-facing sectioned dump (the display surface) and
//! the structured prompt payload handed to the description-generation
//! collaborator. Both are pure over `&Avatar`; neither mutates state or
//! calls a classifier.

use serde::{Deserialize, Serialize};

use crate::avatar::Avatar;
use crate::personality::Personality;
use crate::utilities::printer::{Printer, PrinterColor};

// ---------------------------------------------------------------------------
// Sectioned profile dump
// ---------------------------------------------------------------------------

/// One titled section of the rendered profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// One display line per axis: `"<Pole1>: <v1>, <Pole2>: <v2>"`, values to
/// two decimals, axes in registry order.
pub fn trait_lines(personality: &Personality) -> Vec<String> {
    personality
        .snapshot()
        .into_iter()
        .map(|(axis, v1, v2)| {
            let (pole1, pole2) = axis.poles();
            format!("{pole1}: {v1:.2}, {pole2}: {v2:.2}")
        })
        .collect()
}

/// Render the full profile as ordered sections.
pub fn render_profile(avatar: &Avatar) -> Vec<ProfileSection> {
    let detail = &avatar.detail;
    let style = &avatar.dialogue_style;

    let mut details = vec![format!("Name: {}", detail.name)];
    if !detail.description.is_empty() {
        details.push(format!("Description: {}", detail.description));
    }
    if !detail.role.is_empty() {
        details.push(format!("Role: {}", detail.role));
    }
    details.push(format!("Core Description: {}", avatar.core_description));
    details.push(format!("Motivations: {}", avatar.motivations.join(", ")));
    details.push(format!("Flaws: {}", avatar.flaws.join(", ")));

    let adjectives: Vec<&str> = style.adjectives.iter().map(|a| a.as_str()).collect();
    let dialogue = vec![
        format!("Adjectives: {}", adjectives.join(", ")),
        format!("Colloquium: {}", style.colloquium),
        format!("Example Dialogues: {}", style.example_dialogue.join(", ")),
    ];

    vec![
        ProfileSection {
            title: "Avatar Details",
            lines: details,
        },
        ProfileSection {
            title: "Dialogue Style",
            lines: dialogue,
        },
        ProfileSection {
            title: "Personality",
            lines: trait_lines(&avatar.personality),
        },
    ]
}

/// Print the profile to the console, section banners in bold yellow.
pub fn display_profile(avatar: &Avatar) {
    let printer = Printer::new();
    for section in render_profile(avatar) {
        printer.print(&format!("=== {} ===", section.title), PrinterColor::BoldYellow);
        for line in &section.lines {
            printer.print_plain(line);
        }
    }
}

// ---------------------------------------------------------------------------
// Generation prompt payload
// ---------------------------------------------------------------------------

/// The structured character attributes handed to a description generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPayload {
    pub name: String,
    pub description: String,
    pub role: String,
    pub core_description: String,
    pub motivations: Vec<String>,
    pub flaws: Vec<String>,
    pub adjectives: Vec<String>,
    pub colloquium: String,
}

impl PromptPayload {
    /// Assemble a payload from an avatar snapshot.
    pub fn from_avatar(avatar: &Avatar) -> Self {
        Self {
            name: avatar.detail.name.clone(),
            description: avatar.detail.description.clone(),
            role: avatar.detail.role.clone(),
            core_description: avatar.core_description.clone(),
            motivations: avatar.motivations.clone(),
            flaws: avatar.flaws.clone(),
            adjectives: avatar
                .dialogue_style
                .adjectives
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
            colloquium: avatar.dialogue_style.colloquium.to_string(),
        }
    }

    /// Render the generation prompt text, one attribute per line.
    pub fn to_prompt(&self) -> String {
        format!(
            "Generate a detailed description of a character with the following attributes:\n\
             Name: {}\n\
             Description: {}\n\
             Role: {}\n\
             Core Description: {}\n\
             Motivations: {}\n\
             Flaws: {}\n\
             Dialogue Style Adjectives: {}\n\
             Colloquium: {}\n",
            self.name,
            self.description,
            self.role,
            self.core_description,
            self.motivations.join(", "),
            self.flaws.join(", "),
            self.adjectives.join(", "),
            self.colloquium,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{CharacterAdjective, Detail, DialogueStyle, LanguageStyle};
    use crate::personality::TraitAxis;

    fn sample_avatar() -> Avatar {
        Avatar::new(
            Detail::new("John Doe")
                .with_description("A brave adventurer.")
                .with_role("Hero"),
            "An adventurous and courageous hero.",
            vec!["Save the world".to_string()],
            vec!["Impulsive".to_string()],
            DialogueStyle::new(
                vec![CharacterAdjective::Expressive, CharacterAdjective::Hilarious],
                LanguageStyle::CowboyLingo,
                vec!["Howdy!".to_string()],
            ),
            Personality::new(),
        )
    }

    #[test]
    fn trait_lines_follow_registry_order_at_two_decimals() {
        let mut personality = Personality::new();
        personality.set(TraitAxis::SadnessJoy, 0.26).unwrap();

        let lines = trait_lines(&personality);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Sadness: 0.26, Joy: 0.74");
        assert_eq!(lines[9], "Insecure: 0.50, Confident: 0.50");
    }

    #[test]
    fn profile_sections_cover_details_dialogue_and_traits() {
        let avatar = sample_avatar();
        let sections = render_profile(&avatar);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Avatar Details");
        assert!(sections[0].lines.contains(&"Name: John Doe".to_string()));
        assert_eq!(sections[1].title, "Dialogue Style");
        assert!(sections[1]
            .lines
            .contains(&"Adjectives: expressive, hilarious".to_string()));
        assert_eq!(sections[2].title, "Personality");
        assert_eq!(sections[2].lines.len(), 10);
    }

    #[test]
    fn empty_optional_detail_fields_are_omitted() {
        let mut avatar = sample_avatar();
        avatar.detail.description.clear();
        let sections = render_profile(&avatar);
        assert!(!sections[0]
            .lines
            .iter()
            .any(|l| l.starts_with("Description:")));
    }

    #[test]
    fn prompt_payload_renders_one_attribute_per_line() {
        let avatar = sample_avatar();
        let prompt = PromptPayload::from_avatar(&avatar).to_prompt();

        assert!(prompt.starts_with(
            "Generate a detailed description of a character with the following attributes:"
        ));
        assert!(prompt.contains("Name: John Doe\n"));
        assert!(prompt.contains("Role: Hero\n"));
        assert!(prompt.contains("Dialogue Style Adjectives: expressive, hilarious\n"));
        assert!(prompt.contains("Colloquium: cowboy lingo\n"));
    }

    #[test]
    fn rendering_does_not_mutate_the_avatar() {
        let avatar = sample_avatar();
        let before = avatar.clone();
        let _ = render_profile(&avatar);
        let _ = PromptPayload::from_avatar(&avatar).to_prompt();
        assert_eq!(avatar, before);
    }
}
