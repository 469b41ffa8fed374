//! Trait axis registry and per-avatar personality state.
//!
//! Ten fixed bipolar axes, each holding a normalized `(pole1, pole2)` pair
//! that always sums to one. Mutation happens exclusively through
//! [`Personality::set`], which the update policy engine drives.

pub mod axis;
pub mod state;

pub use axis::{TraitAxis, AXIS_COUNT};
pub use state::Personality;
