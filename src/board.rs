//! The whole evaluation board: four hands plus the table indicator.

use crate::cards::{Seat, Suit, HAND_SIZE};
use crate::error::ValidationIssue;
use crate::hand::{HandSnapshot, HandState};
use crate::table::TableIndicator;
use anyhow::Context;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    hands: [HandState; 4],
    pub table: TableIndicator,
}

/// Totals shown in the summary bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_cards: usize,
    pub suit_totals: [usize; 4],
    pub min_points: u32,
    pub max_points: u32,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total cards: {} |", self.total_cards)?;
        for suit in Suit::ALL {
            write!(f, " {}{}", suit.symbol(), self.suit_totals[suit.index()])?;
        }
        write!(
            f,
            " | Min pts: {} | Max pts: {}",
            self.min_points, self.max_points
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    #[serde(rename = "N")]
    pub north: HandSnapshot,
    #[serde(rename = "E")]
    pub east: HandSnapshot,
    #[serde(rename = "S")]
    pub south: HandSnapshot,
    #[serde(rename = "W")]
    pub west: HandSnapshot,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self, seat: Seat) -> &HandState {
        &self.hands[seat.index()]
    }

    pub fn hand_mut(&mut self, seat: Seat) -> &mut HandState {
        &mut self.hands[seat.index()]
    }

    /// Each hand contributes the larger of its HCP and its declared bound.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for hand in &self.hands {
            for suit in Suit::ALL {
                let len = hand.suit_len(suit);
                summary.suit_totals[suit.index()] += len;
                summary.total_cards += len;
            }
            let hcp = hand.hcp();
            let (min, max) = (hcp.max(hand.declared_min()), hcp.max(hand.declared_max()));
            summary.min_points = summary.min_points.saturating_add(min);
            summary.max_points = summary.max_points.saturating_add(max);
        }
        summary
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for seat in Seat::ALL {
            let hand = self.hand(seat);
            for suit in Suit::ALL {
                let state = hand.suit(suit);
                let cards = state.cards.trim();
                let len = cards.chars().count();
                if let Some(count) = parse_declared_count(&state.count_text) {
                    if count.parse::<usize>() != Ok(len) {
                        issues.push(ValidationIssue::CountMismatch {
                            seat,
                            suit,
                            count,
                            len,
                            cards: cards.to_string(),
                        });
                    }
                }
            }

            let total = hand.cards_total();
            if total != 0 && total != HAND_SIZE {
                issues.push(ValidationIssue::WrongHandSize { seat, total });
            }
        }
        issues
    }

    pub fn clear_all(&mut self) {
        for hand in &mut self.hands {
            hand.clear();
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            north: self.hand(Seat::North).snapshot(Seat::North),
            east: self.hand(Seat::East).snapshot(Seat::East),
            south: self.hand(Seat::South).snapshot(Seat::South),
            west: self.hand(Seat::West).snapshot(Seat::West),
        }
    }

    pub fn dump_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.snapshot()).context("Failed to serialize board state")
    }
}

/// Only plain digit strings count as a declaration; anything else is ignored.
/// Returns the digits without leading zeros, so counts of any size compare.
fn parse_declared_count(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match text.trim_start_matches('0') {
        "" => Some("0".to_string()),
        digits => Some(digits.to_string()),
    }
}
