//! UI module containing all user interface components and signal handlers.

pub mod actions;
pub mod hand_panel;
pub mod header;
pub mod layout;
pub mod style;
pub mod table;
