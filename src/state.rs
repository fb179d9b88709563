use crate::board::Board;
use crate::config::AppConfig;

/// Central application state shared by all signal handlers.
pub struct AppState {
    /// Form state of the four hands and the table indicator.
    pub board: Board,
    /// Appearance settings loaded at startup.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            board: Board::new(),
            config,
        }
    }
}
