//! Declared signal-label → axis correspondence tables.
//!
//! Direction is part of the table, not inferred from pole-name string
//! equality at runtime; a test below re-derives every entry from the pole
//! names to prove the table matches the naming convention it replaced.

use crate::personality::TraitAxis;

/// Which way a matching signal label pushes an axis's first pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increase the first pole, seeded from the first pole's headroom.
    IncreaseFirst,
    /// Decrease the first pole, seeded from the second pole's headroom.
    DecreaseFirst,
}

/// One axis/label correspondence with its resolved direction.
#[derive(Debug, Clone, Copy)]
pub struct Correspondence {
    pub axis: TraitAxis,
    pub label: &'static str,
    pub direction: Direction,
}

/// Emotion-path correspondences, in fixed application order.
///
/// "neutral" on Static-Dynamic is the declared exception: it always raises
/// Static even though the label matches neither pole name.
pub const EMOTION_CORRESPONDENCES: [Correspondence; 5] = [
    Correspondence {
        axis: TraitAxis::SadnessJoy,
        label: "joy",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::AngerFear,
        label: "anger",
        direction: Direction::IncreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::DisgustTrust,
        label: "disgust",
        direction: Direction::IncreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::AnticipationSurprise,
        label: "surprise",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::StaticDynamic,
        label: "neutral",
        direction: Direction::IncreaseFirst,
    },
];

/// Personality-path correspondences, in fixed application order.
pub const PERSONALITY_CORRESPONDENCES: [Correspondence; 5] = [
    Correspondence {
        axis: TraitAxis::NegativePositive,
        label: "positive",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::AggressivePeaceful,
        label: "peaceful",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::CautiousOpen,
        label: "open",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::IntrovertExtravert,
        label: "extravert",
        direction: Direction::DecreaseFirst,
    },
    Correspondence {
        axis: TraitAxis::InsecureConfident,
        label: "confident",
        direction: Direction::DecreaseFirst,
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-derive a direction the way the naming convention implies: a label
    /// equal (case-insensitively) to the first pole raises it, a label equal
    /// to the second pole lowers the first.
    fn derived_direction(axis: TraitAxis, label: &str) -> Option<Direction> {
        let (p1, p2) = axis.poles();
        if label.eq_ignore_ascii_case(p1) {
            Some(Direction::IncreaseFirst)
        } else if label.eq_ignore_ascii_case(p2) {
            Some(Direction::DecreaseFirst)
        } else {
            None
        }
    }

    #[test]
    fn declared_directions_match_pole_name_convention() {
        for entry in EMOTION_CORRESPONDENCES
            .iter()
            .chain(PERSONALITY_CORRESPONDENCES.iter())
        {
            match derived_direction(entry.axis, entry.label) {
                Some(direction) => assert_eq!(
                    entry.direction, direction,
                    "{} / {}",
                    entry.axis, entry.label
                ),
                // Only the declared Static-Dynamic exception may fall
                // outside the convention.
                None => {
                    assert_eq!(entry.axis, TraitAxis::StaticDynamic);
                    assert_eq!(entry.label, "neutral");
                    assert_eq!(entry.direction, Direction::IncreaseFirst);
                }
            }
        }
    }

    #[test]
    fn each_axis_appears_at_most_once_per_table() {
        for table in [&EMOTION_CORRESPONDENCES, &PERSONALITY_CORRESPONDENCES] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.axis, b.axis);
                }
            }
        }
    }
}
