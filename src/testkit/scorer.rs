//! Scripted [`Scorer`] implementation.

use std::collections::VecDeque;

use crate::domain::{Match, Side};
use crate::error::{Error, Result};
use crate::port::Scorer;

/// Replays `(winner, shutout)` pairs in order, recording what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedScorer {
    results: VecDeque<(Side, bool)>,
    asked: Vec<(usize, Match)>,
}

impl ScriptedScorer {
    pub fn new(results: impl IntoIterator<Item = (Side, bool)>) -> Self {
        Self {
            results: results.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Matches the scorer was asked about, in order.
    pub fn asked(&self) -> &[(usize, Match)] {
        &self.asked
    }
}

impl Scorer for ScriptedScorer {
    fn winner(&mut self, number: usize, pairing: &Match) -> Result<Side> {
        self.asked.push((number, pairing.clone()));
        self.results
            .front()
            .map(|(side, _)| *side)
            .ok_or_else(|| Error::InvalidInput(format!("no scripted result for game #{number}")))
    }

    fn shutout(&mut self, number: usize, _pairing: &Match) -> Result<bool> {
        self.results
            .pop_front()
            .map(|(_, shutout)| shutout)
            .ok_or_else(|| Error::InvalidInput(format!("no scripted result for game #{number}")))
    }
}
