//! Layout dimension constants for TUI rendering.

/// Height of the title line.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the filter block: date range and selectors inside a border.
pub const FILTER_BLOCK_HEIGHT: u16 = 4;

/// Height of the pagination line.
pub const PAGINATION_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Widest a results column may grow before its cells are truncated.
pub const MAX_COLUMN_WIDTH: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before draining fetch
/// completions.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;
