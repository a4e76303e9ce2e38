//! Interactive result entry.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::domain::{Match, Side};
use crate::error::{Error, Result};
use crate::port::Scorer;

/// Parse a typed winner, case-insensitively.
pub fn parse_side(input: &str) -> Option<Side> {
    match input.trim().to_lowercase().as_str() {
        "a" => Some(Side::A),
        "b" => Some(Side::B),
        _ => None,
    }
}

/// Asks the person at the terminal for each result.
pub struct TerminalScorer {
    theme: ColorfulTheme,
}

impl TerminalScorer {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for TerminalScorer {
    fn winner(&mut self, _number: usize, _pairing: &Match) -> Result<Side> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt("Who won? (a/b)")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                parse_side(input)
                    .map(|_| ())
                    .ok_or("Invalid input please enter a or b!")
            })
            .interact_text()?;
        parse_side(&answer).ok_or_else(|| Error::InvalidInput(format!("unknown side '{answer}'")))
    }

    fn shutout(&mut self, _number: usize, _pairing: &Match) -> Result<bool> {
        let flawless = Confirm::with_theme(&self.theme)
            .with_prompt("Flawless victory?")
            .interact()?;
        Ok(flawless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_side_accepts_either_case() {
        assert_eq!(parse_side("a"), Some(Side::A));
        assert_eq!(parse_side(" B "), Some(Side::B));
        assert_eq!(parse_side("c"), None);
        assert_eq!(parse_side(""), None);
    }
}
