use crate::constants::APP_NAME;
use adw::{HeaderBar, WindowTitle};
use gtk4::prelude::{BoxExt, WidgetExt};
use gtk4::{Box, Button, Orientation};

/// Creates the header bar carrying the board-wide actions.
///
/// Returns `(header_bar, clear_btn, sort_btn, dump_btn, validate_btn)`.
pub fn create_header_bar() -> (HeaderBar, Button, Button, Button, Button) {
    let header_bar = HeaderBar::new();
    let view_title = WindowTitle::new(APP_NAME, "");
    header_bar.set_title_widget(Some(&view_title));

    let left_box = Box::new(Orientation::Horizontal, 0);
    left_box.add_css_class("linked");

    let clear_btn = Button::builder()
        .label("Clear All")
        .tooltip_text("Clear every hand")
        .build();
    let sort_btn = Button::builder()
        .label("Sort & Sync All")
        .tooltip_text("Normalize the cards of every hand")
        .build();

    left_box.append(&clear_btn);
    left_box.append(&sort_btn);
    header_bar.pack_start(&left_box);

    let dump_btn = Button::builder()
        .label("Dump State to Console")
        .tooltip_text("Print the board as JSON to standard output")
        .build();
    let validate_btn = Button::builder()
        .label("Validate All")
        .tooltip_text("Check counts and hand sizes")
        .build();
    validate_btn.add_css_class("suggested-action");

    header_bar.pack_end(&validate_btn);
    header_bar.pack_end(&dump_btn);

    (header_bar, clear_btn, sort_btn, dump_btn, validate_btn)
}
