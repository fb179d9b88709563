//! Card ranks, suits and seats, plus the string helpers used by every hand.

use std::collections::BTreeMap;
use std::fmt;

/// Canonical rank ordering. `X` stands for an unknown small card.
pub const RANKS_ORDER: &str = "AKQJT98765432X";

/// Placeholder rank for a card whose exact value is not yet known.
pub const UNKNOWN_RANK: char = 'X';

/// Number of cards in a complete bridge hand.
pub const HAND_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// The suit whose entry receives focus after this one (wraps around).
    pub fn next(self) -> Suit {
        Suit::ALL[(self.index() + 1) % Suit::ALL.len()]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    /// Both seats of the partnership this seat belongs to.
    pub fn axis(self) -> [Seat; 2] {
        match self {
            Seat::North | Seat::South => [Seat::North, Seat::South],
            Seat::East | Seat::West => [Seat::West, Seat::East],
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

fn rank_position(rank: char) -> Option<usize> {
    RANKS_ORDER.chars().position(|r| r == rank)
}

pub fn is_rank(ch: char) -> bool {
    rank_position(ch).is_some()
}

/// Turns freeform rank input ("k, q 10 x", "AJ-9.2") into canonical form ("KQTX", "AJ92").
///
/// Separators and unknown characters are dropped, `10` and `0` both become `T`,
/// and the remaining ranks are sorted high to low. Duplicates are kept.
pub fn normalize_cards(text: &str) -> String {
    let raw = text
        .trim()
        .to_uppercase()
        .replace([',', '-', '.'], " ")
        .replace("10", "T");

    let mut ranks: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '0' { 'T' } else { c })
        .filter(|c| is_rank(*c))
        .collect();

    // Stable, so equal ranks keep their input order.
    ranks.sort_by_key(|r| rank_position(*r));
    ranks.into_iter().collect()
}

/// High card points: A=4, K=3, Q=2, J=1.
pub fn hcp_from_cards(cards: &str) -> u32 {
    cards
        .chars()
        .map(|c| match c {
            'A' => 4,
            'K' => 3,
            'Q' => 2,
            'J' => 1,
            _ => 0,
        })
        .sum()
}

pub fn rank_counts(cards: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for rank in cards.chars() {
        *counts.entry(rank).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_by_rank() {
        assert_eq!(normalize_cards("2kqa"), "AKQ2");
        assert_eq!(normalize_cards("x9tj"), "JT9X");
    }

    #[test]
    fn test_normalize_separators_and_ten() {
        assert_eq!(normalize_cards("A, 10, 3"), "AT3");
        assert_eq!(normalize_cards("k-q.j"), "KQJ");
        assert_eq!(normalize_cards(" a 0 "), "AT");
    }

    #[test]
    fn test_normalize_drops_invalid_characters() {
        assert_eq!(normalize_cards("AZ1?K"), "AK");
        assert_eq!(normalize_cards("♠AK"), "AK");
    }

    #[test]
    fn test_normalize_keeps_duplicates_in_order() {
        assert_eq!(normalize_cards("xAx"), "AXX");
        assert_eq!(normalize_cards("aa"), "AA");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_cards(""), "");
        assert_eq!(normalize_cards("   "), "");
        assert_eq!(normalize_cards(",-."), "");
    }

    #[test]
    fn test_hcp() {
        assert_eq!(hcp_from_cards("AKQJ"), 10);
        assert_eq!(hcp_from_cards("T98X"), 0);
        assert_eq!(hcp_from_cards(""), 0);
        assert_eq!(hcp_from_cards("AA"), 8);
    }

    #[test]
    fn test_suit_cycle() {
        assert_eq!(Suit::Spades.next(), Suit::Hearts);
        assert_eq!(Suit::Diamonds.next(), Suit::Clubs);
        assert_eq!(Suit::Clubs.next(), Suit::Spades);
    }

    #[test]
    fn test_seat_axis() {
        assert_eq!(Seat::South.axis(), [Seat::North, Seat::South]);
        assert_eq!(Seat::East.axis(), Seat::West.axis());
    }

    #[test]
    fn test_rank_counts() {
        let counts = rank_counts("AXX");
        assert_eq!(counts.get(&'A'), Some(&1));
        assert_eq!(counts.get(&'X'), Some(&2));
        assert_eq!(counts.get(&'K'), None);
    }
}
