#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use thiserror::Error;

/// Prefix for simulated ticket identifiers.
pub const TICKET_PREFIX: &str = "MCT";

/// Build a simulated ticket id: `MCT-<year>-<NNN>`.
///
/// `roll` is a uniform sample from `[0, 1)`; it maps to a zero-padded
/// three-digit sequence in `[000, 999]`. Ids carry no uniqueness
/// guarantee, this is placeholder behavior.
#[must_use]
pub fn ticket_id(year: u32, roll: f64) -> String {
    let seq = ((roll * 1000.0) as u32).min(999);
    format!("{TICKET_PREFIX}-{year}-{seq:03}")
}

/// Simulated tracking status, drawn at random per lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    Submitted,
    InProgress,
    Resolved,
}

impl TrackStatus {
    pub const ALL: [TrackStatus; 3] =
        [TrackStatus::Submitted, TrackStatus::InProgress, TrackStatus::Resolved];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrackStatus::Submitted => "Submitted",
            TrackStatus::InProgress => "In Progress",
            TrackStatus::Resolved => "Resolved",
        }
    }

    /// Pick a status from a uniform sample in `[0, 1)`.
    #[must_use]
    pub fn from_roll(roll: f64) -> TrackStatus {
        let idx = ((roll * Self::ALL.len() as f64) as usize).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }
}

/// Result block rendered for a tracking lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingReport {
    pub ticket_id: String,
    pub status: TrackStatus,
    pub checked_on: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    #[error("Please enter a ticket ID")]
    EmptyId,
}

/// Simulate a tracking lookup.
///
/// The status is pure randomness, deliberately uncorrelated with any
/// previously issued ticket id; nothing is persisted between
/// interactions. Only empty queries are rejected.
pub fn track(query: &str, roll: f64, checked_on: String) -> Result<TrackingReport, TrackError> {
    let ticket_id = query.trim();
    if ticket_id.is_empty() {
        return Err(TrackError::EmptyId);
    }
    Ok(TrackingReport {
        ticket_id: ticket_id.to_owned(),
        status: TrackStatus::from_roll(roll),
        checked_on,
    })
}
