//! Problems reported by "Validate All".

use crate::cards::{Seat, Suit};
use thiserror::Error;

/// A single inconsistency found on the board. None of these are fatal; they
/// are shown to the user in a warning dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The declared count of a suit differs from the cards entered for it.
    #[error("{seat} {suit}: count {count} != cards length {len} ('{cards}')")]
    CountMismatch {
        seat: Seat,
        suit: Suit,
        count: String,
        len: usize,
        cards: String,
    },

    /// A hand with cards entered does not hold exactly thirteen.
    #[error("{seat}: has {total} cards (should be 13).")]
    WrongHandSize { seat: Seat, total: usize },
}
