//! Demo host application.
//!
//! Builds a sample avatar from a YAML definition, wires scripted
//! classifiers in place of the external models, and runs one utterance
//! through the full pipeline: classify → update → display → describe.

use anyhow::Result;

use animus::classification::{ScriptedEmotionClassifier, ScriptedIntentClassifier};
use animus::generation::OpenAiGenerator;
use animus::utilities::Logger;
use animus::{
    describe_with_fallback, display_profile, process_utterance, shared, Avatar, PromptPayload,
    SignalAdapter,
};

const AVATAR_YAML: &str = r#"
detail:
  name: John Doe
  pronouns: He/Him
  description: A brave adventurer.
  role: Hero
core_description: An adventurous and courageous hero.
motivations:
  - Save the world
  - Protect the weak
flaws:
  - Impulsive
  - Overconfident
dialogue_style:
  adjectives: [expressive, hilarious]
  colloquium: cowboy lingo
  example_dialogue:
    - Howdy!
    - Let's ride.
"#;

fn main() -> Result<()> {
    env_logger::init();
    let logger = Logger::new(true);

    let avatar = Avatar::from_yaml(AVATAR_YAML)?;
    logger.log("info", &format!("loaded avatar '{}'", avatar.detail.name), None);
    println!("{}", avatar.greet());
    display_profile(&avatar);

    // Scripted collaborators stand in for the emotion and intent models.
    let adapter = SignalAdapter::new(
        Box::new(ScriptedEmotionClassifier::new([
            ("joy", 0.62),
            ("surprise", 0.21),
            ("neutral", 0.08),
        ])),
        Box::new(ScriptedIntentClassifier::new(
            "express_emotion_towards_character",
            0.81,
        )),
    );

    let avatar = shared(avatar);
    let text = "I feel really inspired by your actions!";
    println!("\nUser: {text}");

    let changes = process_utterance(&avatar, &adapter, text);
    logger.log("info", &format!("{} trait change(s) applied", changes.len()), None);
    for change in &changes {
        println!("Updating {change}");
    }

    println!();
    display_profile(&avatar.lock());

    // Without an API key this degrades to the documented fallback string.
    let payload = PromptPayload::from_avatar(&avatar.lock());
    let description = describe_with_fallback(&OpenAiGenerator::default(), &payload);
    println!("\nCharacter Description: {description}");

    Ok(())
}
