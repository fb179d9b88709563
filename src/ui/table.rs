use crate::cards::Seat;
use crate::constants::{TABLE_SIZE, TABLE_TILE_HEIGHT, TABLE_TILE_WIDTH};
use crate::state::AppState;
use crate::table::{tile_at, tile_center, Marker, TableIndicator};
use crate::ui::style::rgb;
use gtk4::cairo;
use gtk4::prelude::*;
use gtk4::{Align, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

type Rgb = (f64, f64, f64);

/// Creates the fixed-size drawing area for the table square.
pub fn create_table_area() -> DrawingArea {
    DrawingArea::builder()
        .content_width(TABLE_SIZE as i32)
        .content_height(TABLE_SIZE as i32)
        .halign(Align::Center)
        .valign(Align::Center)
        .build()
}

/// Draws the table from the shared state and toggles partnerships on click.
pub fn connect_table(area: &DrawingArea, state: Rc<RefCell<AppState>>) {
    area.set_draw_func(glib::clone!(
        #[strong]
        state,
        move |_, cr, _, _| {
            let (table, green, red) = {
                let s = state.borrow();
                (
                    s.board.table.clone(),
                    rgb(&s.config.colors.table_green),
                    rgb(&s.config.colors.table_red),
                )
            };
            if let Err(e) = draw_table(cr, &table, green, red) {
                tracing::error!("Failed to draw table: {}", e);
            }
        }
    ));

    let click = gtk4::GestureClick::new();
    click.connect_pressed(glib::clone!(
        #[strong]
        state,
        #[weak]
        area,
        move |_, _, x, y| {
            if let Some(seat) = tile_at(x, y) {
                state.borrow_mut().board.table.toggle(seat);
                area.queue_draw();
            }
        }
    ));
    area.add_controller(click);
}

fn draw_table(
    cr: &cairo::Context,
    table: &TableIndicator,
    green: Rgb,
    red: Rgb,
) -> Result<(), cairo::Error> {
    let size = TABLE_SIZE;

    cr.set_source_rgb(0.2, 0.2, 0.2);
    cr.set_line_width(2.0);
    cr.rectangle(1.0, 1.0, size - 2.0, size - 2.0);
    cr.stroke()?;

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(16.0);

    for seat in Seat::ALL {
        let (cx, cy) = tile_center(seat, size);
        let (r, g, b) = match table.marker(seat) {
            Marker::Green => green,
            Marker::Red => red,
        };

        cr.rectangle(
            cx - TABLE_TILE_WIDTH / 2.0,
            cy - TABLE_TILE_HEIGHT / 2.0,
            TABLE_TILE_WIDTH,
            TABLE_TILE_HEIGHT,
        );
        cr.set_source_rgb(r, g, b);
        cr.fill_preserve()?;
        cr.set_source_rgb(0.13, 0.13, 0.13);
        cr.set_line_width(1.0);
        cr.stroke()?;

        let letter = seat.letter().to_string();
        let extents = cr.text_extents(&letter)?;
        cr.move_to(
            cx - extents.width() / 2.0 - extents.x_bearing(),
            cy - extents.height() / 2.0 - extents.y_bearing(),
        );
        cr.show_text(&letter)?;
    }

    Ok(())
}
