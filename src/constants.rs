//! Application-wide constants for bridge-eval.
//!
//! Centralizes geometry and default appearance values so the UI modules
//! share one source of truth.

// ============================================================================
// Application Identity
// ============================================================================

/// GTK Application ID following reverse-DNS convention.
pub const APP_ID: &str = "com.github.bridge-eval";

/// Application name displayed in the window and header bar.
pub const APP_NAME: &str = "Bridge Temporary Evaluation";

/// Directory name under the XDG config dir.
pub const CONFIG_DIR_NAME: &str = "bridge-eval";

// ============================================================================
// Window Configuration
// ============================================================================

pub const DEFAULT_WINDOW_WIDTH: i32 = 980;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 700;

pub const MIN_WINDOW_WIDTH: i32 = 820;
pub const MIN_WINDOW_HEIGHT: i32 = 560;

/// Base font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

// ============================================================================
// Hand Panels
// ============================================================================

pub const POINTS_ENTRY_CHARS: i32 = 3;
pub const COUNT_ENTRY_CHARS: i32 = 3;
pub const CARDS_ENTRY_CHARS: i32 = 13;

// ============================================================================
// Table Square
// ============================================================================

/// Side of the table square in pixels.
pub const TABLE_SIZE: f64 = 140.0;

/// Total horizontal gap between the table and the side panels.
pub const TABLE_MARGIN: i32 = 24;

pub const TABLE_PADDING: f64 = 10.0;
pub const TABLE_TILE_WIDTH: f64 = 34.0;
pub const TABLE_TILE_HEIGHT: f64 = 26.0;

// ============================================================================
// Colours
// ============================================================================

pub const PLAYED_COLOR: &str = "#6fff6f";
pub const UNPLAYED_COLOR: &str = "#ffffff";
pub const TABLE_GREEN_COLOR: &str = "#6fff6f";
pub const TABLE_RED_COLOR: &str = "#ff6f6f";
pub const MISMATCH_COLOR: &str = "#fff4f4";
