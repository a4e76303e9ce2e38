//! Scorer port: where match results come from while recording an event.

use crate::domain::{Match, Side};
use crate::error::Result;

/// Supplies the result of each generated match.
///
/// The interactive CLI asks a person; tests replay a script.
pub trait Scorer {
    /// Which side won match number `number` (1-based).
    fn winner(&mut self, number: usize, pairing: &Match) -> Result<Side>;

    /// Whether that win was a shutout.
    fn shutout(&mut self, number: usize, pairing: &Match) -> Result<bool>;
}
