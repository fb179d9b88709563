use crate::cards::{hcp_from_cards, normalize_cards, rank_counts, Seat, Suit, UNKNOWN_RANK};
use serde::Serialize;
use std::collections::BTreeMap;
use std::num::IntErrorKind;

/// Per-suit form state for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuitState {
    /// Raw text of the count entry, as typed.
    pub count_text: String,
    /// Last committed, normalized rank string.
    pub cards: String,
    /// Number of played copies per rank. Never contains `X` or zero entries.
    pub played: BTreeMap<char, u32>,
}

/// One rank tile of a suit strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub rank: char,
    pub played: bool,
}

impl Tile {
    pub fn is_unknown(&self) -> bool {
        self.rank == UNKNOWN_RANK
    }
}

/// Result of committing a cards entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub cards: String,
    pub auto_marked: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandState {
    pub points_min: String,
    pub points_max: String,
    suits: [SuitState; 4],
}

impl HandState {
    pub fn suit(&self, suit: Suit) -> &SuitState {
        &self.suits[suit.index()]
    }

    fn suit_mut(&mut self, suit: Suit) -> &mut SuitState {
        &mut self.suits[suit.index()]
    }

    /// Commits freshly typed rank text for a suit.
    ///
    /// When exactly one `X` of the previous cards was replaced by exactly one
    /// concrete rank, that rank is marked as played.
    pub fn commit_suit(&mut self, suit: Suit, raw: &str) -> CommitOutcome {
        let new_cards = normalize_cards(raw);
        let state = self.suit_mut(suit);
        let auto_marked = inferred_play(&state.cards, &new_cards);

        if let Some(rank) = auto_marked {
            *state.played.entry(rank).or_insert(0) += 1;
            tracing::debug!("Auto-marked {} as played in {}", rank, suit);
        }

        state.count_text = new_cards.chars().count().to_string();
        state.cards = new_cards.clone();

        CommitOutcome {
            cards: new_cards,
            auto_marked,
        }
    }

    /// Re-normalizes a suit without inferring any play.
    pub fn sync_suit(&mut self, suit: Suit, raw: &str) -> String {
        let cards = normalize_cards(raw);
        let state = self.suit_mut(suit);
        state.count_text = cards.chars().count().to_string();
        state.cards = cards.clone();
        cards
    }

    pub fn set_count_text(&mut self, suit: Suit, text: &str) {
        self.suit_mut(suit).count_text = text.to_string();
    }

    pub fn set_points_min(&mut self, text: &str) {
        self.points_min = text.to_string();
    }

    pub fn set_points_max(&mut self, text: &str) {
        self.points_max = text.to_string();
    }

    /// Tiles for a suit strip. The first `played[rank]` copies of a rank are played.
    pub fn tiles(&self, suit: Suit) -> Vec<Tile> {
        let state = self.suit(suit);
        let mut used: BTreeMap<char, u32> = BTreeMap::new();

        state
            .cards
            .chars()
            .map(|rank| {
                let mut played = false;
                if rank != UNKNOWN_RANK {
                    let used_count = used.entry(rank).or_insert(0);
                    if *used_count < state.played.get(&rank).copied().unwrap_or(0) {
                        played = true;
                        *used_count += 1;
                    }
                }
                Tile { rank, played }
            })
            .collect()
    }

    /// Flips the played state of one tile. Returns the new state, or `None`
    /// for `X` tiles and indexes outside the strip.
    pub fn toggle_tile(&mut self, suit: Suit, index: usize) -> Option<bool> {
        let tile = *self.tiles(suit).get(index)?;
        if tile.is_unknown() {
            return None;
        }

        let played = &mut self.suit_mut(suit).played;
        if tile.played {
            if let Some(count) = played.get_mut(&tile.rank) {
                *count -= 1;
                if *count == 0 {
                    played.remove(&tile.rank);
                }
            }
            Some(false)
        } else {
            *played.entry(tile.rank).or_insert(0) += 1;
            Some(true)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn suit_len(&self, suit: Suit) -> usize {
        self.suit(suit).cards.chars().count()
    }

    pub fn hcp(&self) -> u32 {
        self.suits.iter().map(|s| hcp_from_cards(&s.cards)).sum()
    }

    pub fn cards_total(&self) -> usize {
        Suit::ALL.iter().map(|s| self.suit_len(*s)).sum()
    }

    pub fn declared_min(&self) -> u32 {
        parse_points(&self.points_min)
    }

    pub fn declared_max(&self) -> u32 {
        parse_points(&self.points_max)
    }

    pub fn snapshot(&self, seat: Seat) -> HandSnapshot {
        let suit_snapshot = |suit: Suit| {
            let state = self.suit(suit);
            SuitSnapshot {
                count: state.count_text.clone(),
                cards: state.cards.clone(),
                played: state
                    .played
                    .iter()
                    .map(|(rank, n)| (rank.to_string(), *n))
                    .collect(),
            }
        };

        HandSnapshot {
            player: seat.label().to_string(),
            points_range: (self.points_min.clone(), self.points_max.clone()),
            hcp: self.hcp(),
            cards_total: self.cards_total(),
            suits: SuitsSnapshot {
                spades: suit_snapshot(Suit::Spades),
                hearts: suit_snapshot(Suit::Hearts),
                diamonds: suit_snapshot(Suit::Diamonds),
                clubs: suit_snapshot(Suit::Clubs),
            },
        }
    }
}

fn inferred_play(old_cards: &str, new_cards: &str) -> Option<char> {
    if old_cards.is_empty() {
        return None;
    }

    let old_counts = rank_counts(old_cards);
    let new_counts = rank_counts(new_cards);
    let x_count = |counts: &BTreeMap<char, usize>| counts.get(&UNKNOWN_RANK).copied().unwrap_or(0);

    if x_count(&old_counts) != x_count(&new_counts) + 1 {
        return None;
    }

    let added: Vec<(char, usize)> = new_counts
        .iter()
        .filter(|(rank, _)| **rank != UNKNOWN_RANK)
        .filter_map(|(rank, n)| {
            let before = old_counts.get(rank).copied().unwrap_or(0);
            (*n > before).then_some((*rank, n - before))
        })
        .collect();

    match added.as_slice() {
        [(rank, 1)] => Some(*rank),
        _ => None,
    }
}

/// Blank or unparsable point entries count as zero.
/// Blank or non-numeric bounds count as zero; oversized ones saturate.
fn parse_points(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(points) => points,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 0,
    }
}

/// Compares a count entry against the cards text it describes.
///
/// `None` means the count is not a number and the highlight should be left alone.
pub fn count_mismatch(count_text: &str, cards_text: &str) -> Option<bool> {
    match count_text.trim().parse::<i64>() {
        Ok(desired) => Some(desired != cards_text.chars().count() as i64),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Some(true)
        }
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuitSnapshot {
    pub count: String,
    pub cards: String,
    pub played: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuitsSnapshot {
    #[serde(rename = "S")]
    pub spades: SuitSnapshot,
    #[serde(rename = "H")]
    pub hearts: SuitSnapshot,
    #[serde(rename = "D")]
    pub diamonds: SuitSnapshot,
    #[serde(rename = "C")]
    pub clubs: SuitSnapshot,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HandSnapshot {
    pub player: String,
    pub points_range: (String, String),
    pub hcp: u32,
    pub cards_total: usize,
    pub suits: SuitsSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_normalizes_and_sets_count() {
        let mut hand = HandState::default();
        let outcome = hand.commit_suit(Suit::Spades, "q a x x");
        assert_eq!(outcome.cards, "AQXX");
        assert_eq!(outcome.auto_marked, None);
        assert_eq!(hand.suit(Suit::Spades).count_text, "4");
        assert_eq!(hand.hcp(), 6);
        assert_eq!(hand.cards_total(), 4);
    }

    #[test]
    fn test_commit_auto_marks_replaced_x() {
        let mut hand = HandState::default();
        hand.commit_suit(Suit::Hearts, "AXX");
        let outcome = hand.commit_suit(Suit::Hearts, "A9X");
        assert_eq!(outcome.auto_marked, Some('9'));
        assert_eq!(hand.suit(Suit::Hearts).played.get(&'9'), Some(&1));

        let tiles = hand.tiles(Suit::Hearts);
        assert_eq!(
            tiles,
            vec![
                Tile { rank: 'A', played: false },
                Tile { rank: '9', played: true },
                Tile { rank: 'X', played: false },
            ]
        );
    }

    #[test]
    fn test_commit_does_not_mark_without_replacement() {
        let mut hand = HandState::default();
        // First entry never infers a play.
        assert_eq!(hand.commit_suit(Suit::Clubs, "KX").auto_marked, None);
        // Added a rank without removing an X.
        assert_eq!(hand.commit_suit(Suit::Clubs, "KQX").auto_marked, None);
        // Replaced an X with two ranks.
        assert_eq!(hand.commit_suit(Suit::Clubs, "KQJ2").auto_marked, None);
        assert!(hand.suit(Suit::Clubs).played.is_empty());
    }

    #[test]
    fn test_sync_never_marks() {
        let mut hand = HandState::default();
        hand.commit_suit(Suit::Diamonds, "XX");
        assert_eq!(hand.sync_suit(Suit::Diamonds, "x5"), "5X");
        assert!(hand.suit(Suit::Diamonds).played.is_empty());
        assert_eq!(hand.suit(Suit::Diamonds).count_text, "2");
    }

    #[test]
    fn test_toggle_tile() {
        let mut hand = HandState::default();
        hand.commit_suit(Suit::Spades, "AKX");

        assert_eq!(hand.toggle_tile(Suit::Spades, 1), Some(true));
        assert!(hand.tiles(Suit::Spades)[1].played);
        assert_eq!(hand.toggle_tile(Suit::Spades, 1), Some(false));
        assert!(hand.suit(Suit::Spades).played.is_empty());

        assert_eq!(hand.toggle_tile(Suit::Spades, 2), None);
        assert_eq!(hand.toggle_tile(Suit::Spades, 7), None);
    }

    #[test]
    fn test_tiles_with_duplicate_ranks() {
        let mut hand = HandState::default();
        hand.commit_suit(Suit::Spades, "AA");
        hand.toggle_tile(Suit::Spades, 1);
        let tiles = hand.tiles(Suit::Spades);
        assert!(tiles[0].played);
        assert!(!tiles[1].played);
    }

    #[test]
    fn test_clear() {
        let mut hand = HandState::default();
        hand.set_points_min("10");
        hand.commit_suit(Suit::Spades, "AK");
        hand.toggle_tile(Suit::Spades, 0);
        hand.clear();
        assert_eq!(hand, HandState::default());
    }

    #[test]
    fn test_declared_points() {
        let mut hand = HandState::default();
        assert_eq!(hand.declared_min(), 0);
        hand.set_points_min(" 12 ");
        hand.set_points_max("abc");
        assert_eq!(hand.declared_min(), 12);
        assert_eq!(hand.declared_max(), 0);
        hand.set_points_max("99999999999");
        assert_eq!(hand.declared_max(), u32::MAX);
    }

    #[test]
    fn test_count_mismatch() {
        assert_eq!(count_mismatch("3", "AKQ"), Some(false));
        assert_eq!(count_mismatch(" 2 ", "AKQ"), Some(true));
        assert_eq!(count_mismatch("+3", "AKQ"), Some(false));
        assert_eq!(count_mismatch("", "AKQ"), None);
        assert_eq!(count_mismatch("three", "AKQ"), None);
        assert_eq!(count_mismatch("99999999999999999999999", "AK"), Some(true));
        assert_eq!(count_mismatch("-99999999999999999999999", "AK"), Some(true));
    }

    #[test]
    fn test_snapshot() {
        let mut hand = HandState::default();
        hand.set_points_min("11");
        hand.commit_suit(Suit::Hearts, "KQX");
        hand.toggle_tile(Suit::Hearts, 0);

        let snapshot = hand.snapshot(Seat::East);
        assert_eq!(snapshot.player, "East");
        assert_eq!(snapshot.points_range, ("11".to_string(), String::new()));
        assert_eq!(snapshot.hcp, 5);
        assert_eq!(snapshot.cards_total, 3);
        assert_eq!(snapshot.suits.hearts.cards, "KQX");
        assert_eq!(snapshot.suits.hearts.played.get("K"), Some(&1));
        assert_eq!(snapshot.suits.spades.count, "");
    }
}
