use crate::state::AppState;
use crate::ui::hand_panel::HandPanel;
use adw::prelude::*;
use adw::{AlertDialog, ApplicationWindow, ToastOverlay};
use gtk4::Button;
use std::cell::RefCell;
use std::rc::Rc;

/// Connects the board-wide header actions.
#[allow(clippy::too_many_arguments)]
pub fn connect_board_actions(
    clear_btn: &Button,
    sort_btn: &Button,
    dump_btn: &Button,
    validate_btn: &Button,
    window: &ApplicationWindow,
    toast_overlay: &ToastOverlay,
    panels: Rc<Vec<HandPanel>>,
    state: Rc<RefCell<AppState>>,
    on_change: Rc<dyn Fn()>,
) {
    clear_btn.connect_clicked(glib::clone!(
        #[strong]
        panels,
        #[strong]
        state,
        #[strong]
        on_change,
        move |_| {
            state.borrow_mut().board.clear_all();
            for panel in panels.iter() {
                panel.refresh(&state);
            }
            on_change();
            tracing::info!("Cleared all hands");
        }
    ));

    sort_btn.connect_clicked(glib::clone!(
        #[strong]
        panels,
        #[strong]
        state,
        #[strong]
        on_change,
        move |_| {
            for panel in panels.iter() {
                panel.sync_all(&state);
            }
            on_change();
            tracing::info!("Sorted and synced all hands");
        }
    ));

    dump_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        toast_overlay,
        move |_| {
            let dump = state.borrow().board.dump_json();
            match dump {
                Ok(json) => {
                    println!("{}", json);
                    tracing::info!("Dumped board state ({} bytes)", json.len());
                    toast_overlay.add_toast(adw::Toast::new("Current state printed to console."));
                }
                Err(e) => {
                    tracing::error!("Failed to dump state: {:#}", e);
                    toast_overlay.add_toast(adw::Toast::new(&format!("Dump failed: {}", e)));
                }
            }
        }
    ));

    validate_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        window,
        move |_| {
            let issues = state.borrow().board.validate();
            let body = if issues.is_empty() {
                "All good!".to_string()
            } else {
                tracing::warn!("Validation found {} issue(s)", issues.len());
                issues
                    .iter()
                    .map(|issue| issue.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            let dialog = AlertDialog::new(Some("Validation"), Some(body.as_str()));
            dialog.add_response("ok", "_OK");
            dialog.set_default_response(Some("ok"));
            dialog.set_close_response("ok");
            dialog.present(Some(&window));
        }
    ));
}
