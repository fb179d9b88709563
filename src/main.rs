mod board;
mod cards;
mod config;
mod constants;
mod error;
mod hand;
mod state;
mod table;
mod ui;

use adw::prelude::*;
use adw::{Application, ApplicationWindow, ToastOverlay};
use gtk4::Orientation;
use std::cell::RefCell;
use std::rc::Rc;

use crate::cards::Seat;
use crate::config::AppConfig;
use crate::constants::{APP_ID, APP_NAME, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::state::AppState;
use crate::ui::hand_panel::{connect_hand_panel, HandPanel};

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt::init();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &Application) {
    let config = AppConfig::load();
    ui::style::load_css(&config);

    let window = ApplicationWindow::builder()
        .application(app)
        .default_width(config.window_width)
        .default_height(config.window_height)
        .width_request(MIN_WINDOW_WIDTH)
        .height_request(MIN_WINDOW_HEIGHT)
        .title(APP_NAME)
        .build();

    let state = Rc::new(RefCell::new(AppState::new(config)));

    let toast_overlay = ToastOverlay::new();
    window.set_content(Some(&toast_overlay));

    let content_box = gtk4::Box::new(Orientation::Vertical, 0);
    toast_overlay.set_child(Some(&content_box));

    let (header_bar, clear_btn, sort_btn, dump_btn, validate_btn) =
        ui::header::create_header_bar();
    content_box.append(&header_bar);

    let (summary_bar, summary_label) = ui::layout::create_summary_bar();
    content_box.append(&summary_bar);

    let panels: Rc<Vec<HandPanel>> = Rc::new(Seat::ALL.into_iter().map(HandPanel::new).collect());
    let table_area = ui::table::create_table_area();
    let board_area = ui::layout::create_board_area(&panels, &table_area);
    board_area.set_vexpand(true);
    content_box.append(&board_area);

    let on_change: Rc<dyn Fn()> = Rc::new(glib::clone!(
        #[strong]
        state,
        #[weak]
        summary_label,
        move || {
            let summary = state.borrow().board.summary();
            summary_label.set_text(&summary.to_string());
        }
    ));

    for panel in panels.iter() {
        connect_hand_panel(panel, state.clone(), on_change.clone());
        panel.refresh(&state);
    }
    ui::table::connect_table(&table_area, state.clone());
    ui::actions::connect_board_actions(
        &clear_btn,
        &sort_btn,
        &dump_btn,
        &validate_btn,
        &window,
        &toast_overlay,
        panels.clone(),
        state.clone(),
        on_change.clone(),
    );

    on_change();
    tracing::info!("Board ready");
    window.present();
}
