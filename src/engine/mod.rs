//! The update policy engine.
//!
//! Translates one classified signal into zero or more axis mutations on a
//! personality state. Per call, each matching correspondence moves its axis
//! once, in fixed table order; the remaining axes are untouched. Changes
//! saturate (the closer a pole already is to 1.0, the smaller the applied
//! delta) and computed values are clamped into [0.0, 1.0] before they
//! reach the state layer, so a contract-violating confidence or score can
//! never abort an update midway.

pub mod mapping;

pub use mapping::{Correspondence, Direction, EMOTION_CORRESPONDENCES, PERSONALITY_CORRESPONDENCES};

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::avatar::Avatar;
use crate::classification::{ClassifiedSignal, IntentCategory, SignalAdapter};
use crate::personality::{Personality, TraitAxis};

// ---------------------------------------------------------------------------
// Change log
// ---------------------------------------------------------------------------

/// One applied axis mutation: first-pole value before and after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitChange {
    pub axis: TraitAxis,
    pub old_value: f64,
    pub new_value: f64,
}

impl fmt::Display for TraitChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (pole1, _) = self.axis.poles();
        write!(
            f,
            "{}: {:.2} -> {:.2}",
            pole1, self.old_value, self.new_value
        )
    }
}

// ---------------------------------------------------------------------------
// Saturation
// ---------------------------------------------------------------------------

/// Diminishing-returns factor: headroom left above the given pole value.
///
/// At `x = 1.0` the factor is zero, so a saturated pole stops moving; by
/// construction a pole approaches but never crosses its bound.
pub fn saturate(x: f64) -> f64 {
    1.0 - x
}

// ---------------------------------------------------------------------------
// Signal application
// ---------------------------------------------------------------------------

/// Apply one classified signal to a personality state.
///
/// Returns the ordered log of applied changes. Neutral and unknown intent
/// labels produce no mutation, as does a zero confidence, a zero score, or
/// an emotion label matching no correspondence.
pub fn apply_signal(personality: &mut Personality, signal: &ClassifiedSignal) -> Vec<TraitChange> {
    match signal.category() {
        IntentCategory::Emotion => {
            let mut changes = Vec::new();
            for entry in &EMOTION_CORRESPONDENCES {
                // Only labels present in the score map participate.
                if !signal.emotion_scores.contains_key(entry.label) {
                    continue;
                }
                let factor = signal.intent_confidence * signal.emotion_score(entry.label);
                if let Some(change) = apply_correspondence(personality, entry, factor) {
                    changes.push(change);
                }
            }
            changes
        }
        IntentCategory::Personality => {
            // Every personality correspondence participates; the intent
            // confidence alone drives the magnitude.
            let mut changes = Vec::new();
            for entry in &PERSONALITY_CORRESPONDENCES {
                let factor = signal.intent_confidence;
                if let Some(change) = apply_correspondence(personality, entry, factor) {
                    changes.push(change);
                }
            }
            changes
        }
        IntentCategory::Neutral | IntentCategory::Unknown => {
            log::debug!(
                "signal {} intent '{}' is {:?}; no trait update",
                signal.signal_id,
                signal.intent_label,
                signal.category(),
            );
            Vec::new()
        }
    }
}

/// Move one axis per its correspondence entry, clamping into range.
///
/// A zero-delta application is an exact no-op and is not logged.
fn apply_correspondence(
    personality: &mut Personality,
    entry: &Correspondence,
    factor: f64,
) -> Option<TraitChange> {
    let (v1, v2) = personality.get(entry.axis);
    let updated = match entry.direction {
        Direction::IncreaseFirst => v1 + saturate(v1) * factor,
        Direction::DecreaseFirst => v1 - saturate(v2) * factor,
    };
    // A non-finite factor (contract violation upstream) must not reach the
    // state layer either; treat it like a zero-delta application.
    if !updated.is_finite() {
        return None;
    }
    let updated = updated.clamp(0.0, 1.0);
    if updated == v1 {
        return None;
    }

    // Clamped values cannot fail the range check, so this is unreachable
    // from this path; a panic here means the clamp above regressed.
    personality
        .set(entry.axis, updated)
        .unwrap_or_else(|err| panic!("clamped trait value rejected: {err}"));

    let change = TraitChange {
        axis: entry.axis,
        old_value: v1,
        new_value: updated,
    };
    log::debug!("updating {} ({change})", entry.axis);
    Some(change)
}

// ---------------------------------------------------------------------------
// Shared-avatar entry points
// ---------------------------------------------------------------------------

/// An avatar behind a lock, for hosts serving concurrent utterances.
///
/// The engine holds the lock for the whole read-modify-write of one signal,
/// so no reader can observe a partially-updated axis set. Updates to the
/// same avatar serialize last-writer-wins; distinct avatars are independent.
pub type SharedAvatar = Arc<Mutex<Avatar>>;

/// Wrap an avatar for shared use.
pub fn shared(avatar: Avatar) -> SharedAvatar {
    Arc::new(Mutex::new(avatar))
}

/// Apply one signal to a shared avatar atomically.
pub fn apply_update(avatar: &SharedAvatar, signal: &ClassifiedSignal) -> Vec<TraitChange> {
    let mut guard = avatar.lock();
    apply_signal(&mut guard.personality, signal)
}

/// Run the full pipeline for one utterance: classify, then update.
///
/// Classification happens outside the avatar lock; a degraded (absent)
/// signal leaves the avatar untouched.
pub fn process_utterance(
    avatar: &SharedAvatar,
    adapter: &SignalAdapter,
    text: &str,
) -> Vec<TraitChange> {
    match adapter.classify(text) {
        Some(signal) => apply_update(avatar, &signal),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::classification::{ScriptedEmotionClassifier, ScriptedIntentClassifier};

    const TOLERANCE: f64 = 1e-9;

    fn signal(label: &str, confidence: f64, scores: &[(&str, f64)]) -> ClassifiedSignal {
        ClassifiedSignal::new(
            label,
            confidence,
            scores
                .iter()
                .map(|(l, s)| (l.to_string(), *s))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn scenario_a_joy_expression_moves_sadness_joy() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("express_emotion_towards_character", 0.8, &[("joy", 0.6)]),
        );

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].axis, TraitAxis::SadnessJoy);

        // 0.5 - saturate(0.5) * 0.8 * 0.6 = 0.26 sadness, 0.74 joy.
        let (sadness, joy) = state.get(TraitAxis::SadnessJoy);
        assert!((sadness - 0.26).abs() < TOLERANCE);
        assert!((joy - 0.74).abs() < TOLERANCE);
    }

    #[test]
    fn scenario_b_personality_intent_moves_all_five_axes() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("encourage_personal_growth", 0.9, &[]),
        );

        // Any personality-affecting intent drives every personality
        // correspondence by saturate(pole) * confidence.
        assert_eq!(changes.len(), 5);
        let (insecure, confident) = state.get(TraitAxis::InsecureConfident);
        assert!((confident - 0.95).abs() < TOLERANCE);
        assert!((insecure - 0.05).abs() < TOLERANCE);

        // Emotional axes stay put.
        assert_eq!(state.get(TraitAxis::SadnessJoy), (0.5, 0.5));
    }

    #[test]
    fn scenario_c_neutral_intent_ignores_emotion_scores() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal(
                "ask_about_character_background",
                0.99,
                &[("joy", 0.9), ("anger", 0.8)],
            ),
        );

        assert!(changes.is_empty());
        assert_eq!(state, Personality::new());
    }

    #[test]
    fn scenario_d_saturated_axis_barely_moves() {
        let mut state = Personality::new();
        state.set(TraitAxis::AngerFear, 0.99).unwrap();

        let sig = signal("criticize_character", 0.7, &[("anger", 0.5)]);
        apply_signal(&mut state, &sig);
        let (v1_after_first, _) = state.get(TraitAxis::AngerFear);
        let second_delta = {
            apply_signal(&mut state, &sig);
            state.get(TraitAxis::AngerFear).0 - v1_after_first
        };

        assert!(second_delta > 0.0);
        assert!(second_delta < 0.01 * 0.7 * 0.5);
    }

    #[test]
    fn unknown_intent_is_a_silent_noop() {
        let mut state = Personality::new();
        let changes = apply_signal(&mut state, &signal("order_a_pizza", 0.9, &[("joy", 0.9)]));
        assert!(changes.is_empty());
        assert_eq!(state, Personality::new());
    }

    #[test]
    fn zero_confidence_is_an_exact_noop() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("express_emotion_towards_character", 0.0, &[("joy", 0.9)]),
        );
        assert!(changes.is_empty());
        assert_eq!(state, Personality::new());
    }

    #[test]
    fn empty_emotion_scores_are_an_exact_noop() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("express_emotion_towards_character", 0.9, &[]),
        );
        assert!(changes.is_empty());
        assert_eq!(state, Personality::new());
    }

    #[test]
    fn unmatched_emotion_labels_touch_nothing() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("express_emotion_towards_character", 0.9, &[("ecstasy", 0.9)]),
        );
        assert!(changes.is_empty());
        assert_eq!(state, Personality::new());
    }

    #[test]
    fn multiple_matches_apply_in_table_order() {
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal(
                "share_personal_emotion",
                0.5,
                &[("anger", 0.4), ("joy", 0.4), ("neutral", 0.4)],
            ),
        );

        let touched: Vec<TraitAxis> = changes.iter().map(|c| c.axis).collect();
        assert_eq!(
            touched,
            vec![
                TraitAxis::SadnessJoy,
                TraitAxis::AngerFear,
                TraitAxis::StaticDynamic,
            ]
        );
        // Untouched correspondences keep their values.
        assert_eq!(state.get(TraitAxis::DisgustTrust), (0.5, 0.5));
    }

    #[test]
    fn neutral_emotion_always_raises_static() {
        let mut state = Personality::new();
        apply_signal(
            &mut state,
            &signal("seek_emotional_support", 0.6, &[("neutral", 0.5)]),
        );
        let (static_pole, dynamic_pole) = state.get(TraitAxis::StaticDynamic);
        assert!(static_pole > 0.5);
        assert!(dynamic_pole < 0.5);
    }

    #[test]
    fn saturation_monotonicity() {
        // Fixed confidence and score; the delta strictly shrinks as the
        // increasing pole approaches 1.0, and is exactly zero at the bound.
        let sig = signal("blame_character", 0.8, &[("anger", 0.5)]);
        let mut last_delta = f64::INFINITY;
        for start in [0.0, 0.25, 0.5, 0.75, 0.9] {
            let mut state = Personality::new();
            state.set(TraitAxis::AngerFear, start).unwrap();
            apply_signal(&mut state, &sig);
            let delta = state.get(TraitAxis::AngerFear).0 - start;
            assert!(delta < last_delta, "delta not shrinking at start={start}");
            last_delta = delta;
        }

        let mut state = Personality::new();
        state.set(TraitAxis::AngerFear, 1.0).unwrap();
        let changes = apply_signal(&mut state, &sig);
        assert!(changes.is_empty());
        assert_eq!(state.get(TraitAxis::AngerFear).0, 1.0);
    }

    #[test]
    fn invariants_hold_across_many_updates() {
        let mut state = Personality::new();
        let signals = [
            signal("express_emotion_towards_character", 0.8, &[("joy", 0.6)]),
            signal("criticize_character", 0.9, &[("anger", 0.7), ("disgust", 0.3)]),
            signal("encourage_personal_growth", 0.95, &[]),
            signal("blame_character", 0.4, &[("fear", 0.2), ("surprise", 0.8)]),
            signal("suggest_personality_change", 0.7, &[]),
        ];
        for sig in &signals {
            apply_signal(&mut state, sig);
            for (axis, v1, v2) in state.snapshot() {
                assert!((v1 + v2 - 1.0).abs() < TOLERANCE, "{axis}");
                assert!((0.0..=1.0).contains(&v1), "{axis}");
            }
        }
    }

    #[test]
    fn clamp_diverges_from_unclamped_source_behavior() {
        // A contract-violating confidence above 1.0 would push the raw
        // computation past the bound; the engine clamps to the bound
        // instead of letting the state layer reject the write mid-update.
        let mut state = Personality::new();
        let changes = apply_signal(
            &mut state,
            &signal("blame_character", 1.5, &[("anger", 1.0)]),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(state.get(TraitAxis::AngerFear).0, 1.0);
    }

    #[test]
    fn shared_avatar_update_is_atomic_per_signal() {
        use crate::avatar::{CharacterAdjective, Detail, DialogueStyle, LanguageStyle};

        let avatar = shared(Avatar::new(
            Detail::new("Ada"),
            "",
            vec![],
            vec![],
            DialogueStyle::new(
                vec![CharacterAdjective::Inquisitive],
                LanguageStyle::ObscureIdioms,
                vec![],
            ),
            Personality::new(),
        ));

        let changes = apply_update(
            &avatar,
            &signal("praise_character", 0.8, &[("joy", 0.5)]),
        );
        assert_eq!(changes.len(), 1);
        let (_, joy) = avatar.lock().personality.get(TraitAxis::SadnessJoy);
        assert!(joy > 0.5);
    }

    #[test]
    fn process_utterance_runs_classify_then_update() {
        use crate::avatar::{CharacterAdjective, Detail, DialogueStyle, LanguageStyle};
        use crate::classification::FailingIntentClassifier;

        let avatar = shared(Avatar::new(
            Detail::new("Ada"),
            "",
            vec![],
            vec![],
            DialogueStyle::new(
                vec![CharacterAdjective::Curt],
                LanguageStyle::MovieQuotes,
                vec![],
            ),
            Personality::new(),
        ));

        let adapter = SignalAdapter::new(
            Box::new(ScriptedEmotionClassifier::new([("joy", 0.6)])),
            Box::new(ScriptedIntentClassifier::new(
                "express_emotion_towards_character",
                0.8,
            )),
        );
        let changes = process_utterance(&avatar, &adapter, "I love this!");
        assert_eq!(changes.len(), 1);

        // A degraded classifier leaves the avatar untouched.
        let degraded = SignalAdapter::new(
            Box::new(ScriptedEmotionClassifier::new([("joy", 0.6)])),
            Box::new(FailingIntentClassifier),
        );
        let before = avatar.lock().personality.clone();
        assert!(process_utterance(&avatar, &degraded, "hello").is_empty());
        assert_eq!(avatar.lock().personality, before);
    }
}
