use crate::cards::{Seat, Suit};
use crate::constants::{CARDS_ENTRY_CHARS, COUNT_ENTRY_CHARS, POINTS_ENTRY_CHARS};
use crate::hand::count_mismatch;
use crate::state::AppState;
use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Frame, Grid, Label, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

/// Widgets of one suit line: count entry, cards entry and the tile strip.
#[derive(Clone)]
pub struct SuitRow {
    pub suit: Suit,
    pub count_entry: Entry,
    pub cards_entry: Entry,
    pub strip: Box,
}

/// The framed card-holder panel for one seat.
#[derive(Clone)]
pub struct HandPanel {
    pub seat: Seat,
    pub frame: Frame,
    pub points_min: Entry,
    pub points_max: Entry,
    pub hcp_label: Label,
    pub cards_label: Label,
    pub rows: Vec<SuitRow>,
    pub sort_btn: Button,
    pub clear_btn: Button,
}

fn small_entry(chars: i32) -> Entry {
    Entry::builder()
        .width_chars(chars)
        .max_width_chars(chars)
        .xalign(0.5)
        .halign(Align::Start)
        .build()
}

fn caption(text: &str) -> Label {
    Label::builder().label(text).xalign(0.0).build()
}

impl HandPanel {
    pub fn new(seat: Seat) -> Self {
        let frame = Frame::new(Some(format!(" {} ", seat.label()).as_str()));
        frame.add_css_class("hand-panel");
        frame.set_hexpand(true);
        frame.set_vexpand(true);

        let grid = Grid::builder()
            .column_spacing(6)
            .row_spacing(2)
            .margin_start(6)
            .margin_end(6)
            .margin_top(4)
            .margin_bottom(4)
            .build();
        frame.set_child(Some(&grid));

        // Columns: 0 suit, 1 count, 2 cards entry, 3 strip (expands)
        let points_min = small_entry(POINTS_ENTRY_CHARS);
        let points_max = small_entry(POINTS_ENTRY_CHARS);
        let points_box = Box::new(Orientation::Horizontal, 4);
        points_box.append(&Label::new(Some("–")));
        points_box.append(&points_max);
        grid.attach(&caption("Pts"), 0, 0, 1, 1);
        grid.attach(&points_min, 1, 0, 1, 1);
        grid.attach(&points_box, 2, 0, 1, 1);

        let hcp_label = Label::builder().label("0").xalign(0.0).width_chars(4).build();
        let cards_label = Label::builder().label("0").xalign(0.0).width_chars(4).build();
        let cards_box = Box::new(Orientation::Horizontal, 4);
        cards_box.set_halign(Align::End);
        cards_box.append(&caption("Cards"));
        cards_box.append(&cards_label);
        grid.attach(&caption("HCP"), 0, 1, 1, 1);
        grid.attach(&hcp_label, 1, 1, 1, 1);
        grid.attach(&cards_box, 2, 1, 1, 1);

        let mut rows = Vec::with_capacity(Suit::ALL.len());
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            let line = 2 + i as i32;

            let symbol = caption(&suit.symbol().to_string());
            symbol.add_css_class("suit-symbol");
            let count_entry = small_entry(COUNT_ENTRY_CHARS);
            let cards_entry = Entry::builder()
                .width_chars(CARDS_ENTRY_CHARS)
                .max_width_chars(CARDS_ENTRY_CHARS)
                .halign(Align::Start)
                .build();
            let strip = Box::new(Orientation::Horizontal, 0);
            strip.set_hexpand(true);

            grid.attach(&symbol, 0, line, 1, 1);
            grid.attach(&count_entry, 1, line, 1, 1);
            grid.attach(&cards_entry, 2, line, 1, 1);
            grid.attach(&strip, 3, line, 1, 1);

            rows.push(SuitRow {
                suit,
                count_entry,
                cards_entry,
                strip,
            });
        }

        let buttons = Box::new(Orientation::Horizontal, 6);
        buttons.set_margin_top(6);
        let sort_btn = Button::with_label("Sort & Sync");
        let clear_btn = Button::with_label("Clear");
        buttons.append(&sort_btn);
        buttons.append(&clear_btn);
        grid.attach(&buttons, 0, 2 + Suit::ALL.len() as i32, 4, 1);

        Self {
            seat,
            frame,
            points_min,
            points_max,
            hcp_label,
            cards_label,
            rows,
            sort_btn,
            clear_btn,
        }
    }

    pub fn row(&self, suit: Suit) -> &SuitRow {
        &self.rows[suit.index()]
    }

    /// Copies the hand's model state into the widgets.
    ///
    /// The model is cloned out first: setting entry text re-enters the
    /// `changed` handlers, which borrow the state mutably.
    pub fn refresh(&self, state: &Rc<RefCell<AppState>>) {
        let (hand, hcp, total) = {
            let s = state.borrow();
            let hand = s.board.hand(self.seat);
            (hand.clone(), hand.hcp(), hand.cards_total())
        };

        set_text_if_changed(&self.points_min, &hand.points_min);
        set_text_if_changed(&self.points_max, &hand.points_max);
        self.hcp_label.set_text(&hcp.to_string());
        self.cards_label.set_text(&total.to_string());

        for row in &self.rows {
            let suit_state = hand.suit(row.suit);
            set_text_if_changed(&row.cards_entry, &suit_state.cards);
            set_text_if_changed(&row.count_entry, &suit_state.count_text);
            update_mismatch(row, Some(false));
            rebuild_strip(&row.strip, state, self.seat, row.suit);
        }
    }

    /// Re-normalizes every suit from the entries' current text.
    pub fn sync_all(&self, state: &Rc<RefCell<AppState>>) {
        for row in &self.rows {
            let raw = row.cards_entry.text();
            state
                .borrow_mut()
                .board
                .hand_mut(self.seat)
                .sync_suit(row.suit, &raw);
        }
        self.refresh(state);
    }

    pub fn clear(&self, state: &Rc<RefCell<AppState>>) {
        state.borrow_mut().board.hand_mut(self.seat).clear();
        self.refresh(state);
    }

    fn focus_next_suit(&self, suit: Suit) {
        let next = &self.row(suit.next()).cards_entry;
        next.grab_focus_without_selecting();
        next.set_position(-1);
    }
}

fn set_text_if_changed(entry: &Entry, text: &str) {
    if entry.text().as_str() != text {
        entry.set_text(text);
    }
}

/// Highlights a cards entry whose count disagrees with it. A count that is not
/// a number leaves the highlight unchanged unless `fallback` says otherwise.
fn update_mismatch(row: &SuitRow, fallback: Option<bool>) {
    let mismatch = count_mismatch(&row.count_entry.text(), &row.cards_entry.text()).or(fallback);
    if let Some(mismatch) = mismatch {
        if mismatch {
            row.cards_entry.add_css_class("count-mismatch");
        } else {
            row.cards_entry.remove_css_class("count-mismatch");
        }
    }
}

/// Replaces the tiles of a suit strip. Clicking a concrete rank toggles it.
fn rebuild_strip(strip: &Box, state: &Rc<RefCell<AppState>>, seat: Seat, suit: Suit) {
    while let Some(child) = strip.first_child() {
        strip.remove(&child);
    }

    let tiles = state.borrow().board.hand(seat).tiles(suit);
    for (index, tile) in tiles.into_iter().enumerate() {
        let button = Button::builder()
            .label(tile.rank.to_string())
            .focusable(false)
            .build();
        button.add_css_class("card-tile");
        if tile.played {
            button.add_css_class("played");
        }

        if !tile.is_unknown() {
            button.connect_clicked(glib::clone!(
                #[weak]
                strip,
                #[strong]
                state,
                move |_| {
                    let toggled = state
                        .borrow_mut()
                        .board
                        .hand_mut(seat)
                        .toggle_tile(suit, index);
                    if let Some(played) = toggled {
                        tracing::debug!("{} {} tile {} played: {}", seat, suit, index, played);
                        rebuild_strip(&strip, &state, seat, suit);
                    }
                }
            ));
        }

        strip.append(&button);
    }
}

/// Connects the panel's entries and buttons to the shared state.
///
/// `on_change` runs after anything that affects the board-wide summary.
pub fn connect_hand_panel(
    panel: &HandPanel,
    state: Rc<RefCell<AppState>>,
    on_change: Rc<dyn Fn()>,
) {
    let seat = panel.seat;

    panel.points_min.connect_changed(glib::clone!(
        #[strong]
        state,
        #[strong]
        on_change,
        move |entry| {
            state
                .borrow_mut()
                .board
                .hand_mut(seat)
                .set_points_min(&entry.text());
            on_change();
        }
    ));

    panel.points_max.connect_changed(glib::clone!(
        #[strong]
        state,
        #[strong]
        on_change,
        move |entry| {
            state
                .borrow_mut()
                .board
                .hand_mut(seat)
                .set_points_max(&entry.text());
            on_change();
        }
    ));

    for row in &panel.rows {
        let suit = row.suit;

        let commit: Rc<dyn Fn()> = {
            let panel = panel.clone();
            let state = state.clone();
            let on_change = on_change.clone();
            Rc::new(move || {
                let raw = panel.row(suit).cards_entry.text();
                let outcome = state
                    .borrow_mut()
                    .board
                    .hand_mut(seat)
                    .commit_suit(suit, &raw);
                tracing::debug!(
                    "{} {} committed as {:?} (auto-marked {:?})",
                    seat,
                    suit,
                    outcome.cards,
                    outcome.auto_marked
                );
                panel.refresh(&state);
                on_change();
            })
        };

        // Enter commits and moves on to the next suit.
        row.cards_entry.connect_activate({
            let panel = panel.clone();
            let commit = commit.clone();
            move |_| {
                commit();
                panel.focus_next_suit(suit);
            }
        });

        // Tab does the same instead of the default focus chain.
        let key_ctrl = gtk4::EventControllerKey::new();
        key_ctrl.set_propagation_phase(gtk4::PropagationPhase::Capture);
        key_ctrl.connect_key_pressed({
            let panel = panel.clone();
            let commit = commit.clone();
            move |_, key, _, _| {
                if key == gdk::Key::Tab {
                    commit();
                    panel.focus_next_suit(suit);
                    return glib::Propagation::Stop;
                }
                glib::Propagation::Proceed
            }
        });
        row.cards_entry.add_controller(key_ctrl);

        let focus_ctrl = gtk4::EventControllerFocus::new();
        focus_ctrl.connect_leave(move |_| commit());
        row.cards_entry.add_controller(focus_ctrl);

        row.count_entry.connect_changed(glib::clone!(
            #[strong]
            state,
            #[strong]
            row,
            move |entry| {
                state
                    .borrow_mut()
                    .board
                    .hand_mut(seat)
                    .set_count_text(suit, &entry.text());
                update_mismatch(&row, None);
            }
        ));
    }

    panel.sort_btn.connect_clicked(glib::clone!(
        #[strong]
        panel,
        #[strong]
        state,
        #[strong]
        on_change,
        move |_| {
            panel.sync_all(&state);
            on_change();
        }
    ));

    panel.clear_btn.connect_clicked(glib::clone!(
        #[strong]
        panel,
        #[strong]
        state,
        #[strong]
        on_change,
        move |_| {
            panel.clear(&state);
            on_change();
        }
    ));
}
