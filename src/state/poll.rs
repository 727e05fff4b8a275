#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use thiserror::Error;

/// Question shown on the community poll card.
pub const POLL_QUESTION: &str = "What should the city prioritize next?";

/// Fixed option set for the community poll.
pub const POLL_OPTIONS: [&str; 4] =
    ["Better Roads", "More Parks", "Public Transport", "Waste Management"];

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("Please select an option before voting")]
    NoSelection,
}

/// Single-slot poll selection: at most one option selected at a time.
///
/// Selecting replaces any previous selection; submitting reports the
/// choice and resets the slot. Votes are not tallied or persisted.
#[derive(Clone, Debug, Default)]
pub struct PollState {
    selected: Option<usize>,
}

impl PollState {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, option: usize) -> bool {
        self.selected == Some(option)
    }

    /// Select an option, deselecting any previous one. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, option: usize) {
        if option < POLL_OPTIONS.len() {
            self.selected = Some(option);
        }
    }

    /// Submit the vote: returns the chosen option's label and clears the
    /// selection, or fails without touching state when nothing is
    /// selected.
    pub fn submit(&mut self) -> Result<&'static str, PollError> {
        let option = self.selected.ok_or(PollError::NoSelection)?;
        self.selected = None;
        Ok(POLL_OPTIONS[option])
    }
}
