use crate::cards::Seat;
use crate::constants::{TABLE_MARGIN, TABLE_SIZE};
use crate::ui::hand_panel::HandPanel;
use glib::translate::IntoGlib;
use gtk4::prelude::*;
use gtk4::{
    Box, Constraint, ConstraintAttribute, ConstraintLayout, ConstraintRelation,
    ConstraintStrength, DrawingArea, Label, Orientation, Widget,
};

/// Border and row gap around the board, in pixels.
const BOARD_SPACING: f64 = 4.0;

/// Creates the summary line shown under the header bar.
pub fn create_summary_bar() -> (Box, Label) {
    let summary_bar = Box::new(Orientation::Horizontal, 12);
    summary_bar.set_margin_start(6);
    summary_bar.set_margin_end(6);
    summary_bar.set_margin_top(3);
    summary_bar.set_margin_bottom(3);
    summary_bar.add_css_class("summary-bar");

    let summary_label = Label::new(None);
    summary_label.set_xalign(0.0);
    summary_bar.append(&summary_label);

    (summary_bar, summary_label)
}

/// A child of the board area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Panel(Seat),
    Table,
}

/// `target.attribute == source.source_attribute + constant`, where a missing
/// source is the board area itself.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Link {
    target: Piece,
    attribute: ConstraintAttribute,
    source: Option<Piece>,
    source_attribute: ConstraintAttribute,
    constant: f64,
}

fn link(
    target: Piece,
    attribute: ConstraintAttribute,
    source: Option<Piece>,
    source_attribute: ConstraintAttribute,
    constant: f64,
) -> Link {
    Link {
        target,
        attribute,
        source,
        source_attribute,
        constant,
    }
}

/// The rules placing the hands around the table.
///
/// West, the table and East fill the middle row and the two side panels
/// share the width left over by the table. North and South take the side
/// panels' allocated width and are centered. All three rows are equally tall.
fn board_links() -> Vec<Link> {
    use ConstraintAttribute::{Bottom, CenterX, CenterY, End, Height, Start, Top, Width};
    use Piece::{Panel, Table};

    let north = Panel(Seat::North);
    let east = Panel(Seat::East);
    let south = Panel(Seat::South);
    let west = Panel(Seat::West);
    let gap = TABLE_MARGIN as f64 / 2.0;

    let mut links = vec![
        // Middle row
        link(west, Start, None, Start, BOARD_SPACING),
        link(Table, Start, Some(west), End, gap),
        link(east, Start, Some(Table), End, gap),
        link(east, End, None, End, -BOARD_SPACING),
        link(east, Width, Some(west), Width, 0.0),
        link(Table, CenterY, Some(west), CenterY, 0.0),
        link(east, Top, Some(west), Top, 0.0),
        link(east, Height, Some(west), Height, 0.0),
        // Rows
        link(north, Top, None, Top, BOARD_SPACING),
        link(west, Top, Some(north), Bottom, BOARD_SPACING),
        link(south, Top, Some(west), Bottom, BOARD_SPACING),
        link(south, Bottom, None, Bottom, -BOARD_SPACING),
        link(west, Height, Some(north), Height, 0.0),
        link(south, Height, Some(north), Height, 0.0),
    ];

    for edge in [north, south] {
        links.push(link(edge, Width, Some(west), Width, 0.0));
        links.push(link(edge, CenterX, None, CenterX, 0.0));
    }
    links
}

/// Lays out the four hands around the table in three equal-height rows.
pub fn create_board_area(panels: &[HandPanel], table_area: &DrawingArea) -> Box {
    let area = Box::new(Orientation::Vertical, 0);
    let layout = ConstraintLayout::new();
    let required = ConstraintStrength::Required.into_glib();

    for panel in panels {
        area.append(&panel.frame);
    }
    area.append(table_area);

    let widget_for = |piece: Piece| -> Widget {
        match piece {
            Piece::Table => table_area.clone().upcast(),
            Piece::Panel(seat) => panels
                .iter()
                .find(|panel| panel.seat == seat)
                .map(|panel| panel.frame.clone().upcast())
                .unwrap_or_else(|| area.clone().upcast()),
        }
    };

    for rule in board_links() {
        let target = widget_for(rule.target);
        let source = rule.source.map(widget_for);
        layout.add_constraint(Constraint::new(
            Some(&target),
            rule.attribute,
            ConstraintRelation::Eq,
            source.as_ref(),
            rule.source_attribute,
            1.0,
            rule.constant,
            required,
        ));
    }

    let table: Widget = table_area.clone().upcast();
    for attribute in [ConstraintAttribute::Width, ConstraintAttribute::Height] {
        layout.add_constraint(Constraint::new_constant(
            Some(&table),
            attribute,
            ConstraintRelation::Eq,
            TABLE_SIZE,
            required,
        ));
    }

    area.set_layout_manager(Some(layout));
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_link(links: &[Link], expected: Link) -> bool {
        links.iter().any(|l| *l == expected)
    }

    #[test]
    fn test_top_and_bottom_follow_side_width() {
        let links = board_links();
        for seat in [Seat::North, Seat::South] {
            assert!(has_link(
                &links,
                link(
                    Piece::Panel(seat),
                    ConstraintAttribute::Width,
                    Some(Piece::Panel(Seat::West)),
                    ConstraintAttribute::Width,
                    0.0,
                )
            ));
            assert!(has_link(
                &links,
                link(
                    Piece::Panel(seat),
                    ConstraintAttribute::CenterX,
                    None,
                    ConstraintAttribute::CenterX,
                    0.0,
                )
            ));
        }
        assert!(has_link(
            &links,
            link(
                Piece::Panel(Seat::East),
                ConstraintAttribute::Width,
                Some(Piece::Panel(Seat::West)),
                ConstraintAttribute::Width,
                0.0,
            )
        ));
    }

    #[test]
    fn test_every_piece_is_placed() {
        let links = board_links();
        let pieces = Seat::ALL
            .into_iter()
            .map(Piece::Panel)
            .chain(std::iter::once(Piece::Table));
        for piece in pieces {
            assert!(
                links.iter().any(|l| l.target == piece),
                "{:?} has no placement rule",
                piece
            );
        }
    }
}
