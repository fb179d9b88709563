//! The centre "table" square: one marker tile per seat, toggled by partnership.

use crate::cards::Seat;
use crate::constants::{TABLE_PADDING, TABLE_SIZE, TABLE_TILE_HEIGHT, TABLE_TILE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Green,
    Red,
}

impl Marker {
    pub fn flipped(self) -> Marker {
        match self {
            Marker::Green => Marker::Red,
            Marker::Red => Marker::Green,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableIndicator {
    markers: [Marker; 4],
}

impl TableIndicator {
    pub fn marker(&self, seat: Seat) -> Marker {
        self.markers[seat.index()]
    }

    /// Flips the clicked seat's marker and applies the result to its partner too.
    pub fn toggle(&mut self, seat: Seat) -> Marker {
        let new_marker = self.marker(seat).flipped();
        for s in seat.axis() {
            self.markers[s.index()] = new_marker;
        }
        tracing::debug!("Table {:?} axis set to {:?}", seat.axis(), new_marker);
        new_marker
    }
}

/// Centre of a seat's tile inside a square of side `size`.
pub fn tile_center(seat: Seat, size: f64) -> (f64, f64) {
    let inset = TABLE_PADDING + 18.0;
    match seat {
        Seat::North => (size / 2.0, inset),
        Seat::East => (size - inset, size / 2.0),
        Seat::South => (size / 2.0, size - inset),
        Seat::West => (inset, size / 2.0),
    }
}

/// Hit-tests a click against the four tiles of the default-sized table.
pub fn tile_at(x: f64, y: f64) -> Option<Seat> {
    Seat::ALL.into_iter().find(|seat| {
        let (cx, cy) = tile_center(*seat, TABLE_SIZE);
        (x - cx).abs() <= TABLE_TILE_WIDTH / 2.0 && (y - cy).abs() <= TABLE_TILE_HEIGHT / 2.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_green_initially() {
        let table = TableIndicator::default();
        for seat in Seat::ALL {
            assert_eq!(table.marker(seat), Marker::Green);
        }
    }

    #[test]
    fn test_toggle_flips_partnership() {
        let mut table = TableIndicator::default();
        assert_eq!(table.toggle(Seat::West), Marker::Red);
        assert_eq!(table.marker(Seat::East), Marker::Red);
        assert_eq!(table.marker(Seat::North), Marker::Green);

        table.toggle(Seat::East);
        assert_eq!(table.marker(Seat::West), Marker::Green);
    }

    #[test]
    fn test_tile_centers() {
        assert_eq!(tile_center(Seat::North, 140.0), (70.0, 28.0));
        assert_eq!(tile_center(Seat::East, 140.0), (112.0, 70.0));
        assert_eq!(tile_center(Seat::South, 140.0), (70.0, 112.0));
        assert_eq!(tile_center(Seat::West, 140.0), (28.0, 70.0));
    }

    #[test]
    fn test_tile_at() {
        assert_eq!(tile_at(70.0, 28.0), Some(Seat::North));
        assert_eq!(tile_at(120.0, 75.0), Some(Seat::East));
        assert_eq!(tile_at(28.0, 60.0), Some(Seat::West));
        assert_eq!(tile_at(70.0, 70.0), None);
        assert_eq!(tile_at(0.0, 0.0), None);
    }
}
