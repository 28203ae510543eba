//! Domain-level keyboard actions independent of key bindings.

use crate::model::pagination::PageNavigation;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Go to page 1. Default: g/Home
    FirstPage,
    /// Go back one page. Default: h/←
    PrevPage,
    /// Go forward one page. Default: l/→
    NextPage,
    /// Go to the last page. Default: G/End
    LastPage,

    // Date range
    /// Move the whole range one day earlier. Default: [
    ShiftRangeBack,
    /// Move the whole range one day later. Default: ]
    ShiftRangeForward,
    /// Push the end date one day later. Default: }
    ExtendRange,
    /// Pull the end date one day earlier, never before the start. Default: {
    ShrinkRange,
    /// Reset to today through end of tomorrow. Default: t
    ResetRange,

    // Selectors
    /// Select the next location option. Default: o
    NextLocation,
    /// Select the previous location option. Default: O
    PrevLocation,
    /// Select the next zone option. Default: z
    NextZone,
    /// Select the previous zone option. Default: Z
    PrevZone,
    /// Clear both location and zone. Default: x
    ClearSelectors,

    // Table
    /// Move the row highlight down. Default: j/↓
    SelectNextRow,
    /// Move the row highlight up. Default: k/↑
    SelectPrevRow,

    // Application
    /// Fetch the current filters again. Default: r
    Refresh,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// The page navigation this action requests, if any.
    pub fn page_navigation(self) -> Option<PageNavigation> {
        match self {
            KeyAction::FirstPage => Some(PageNavigation::First),
            KeyAction::PrevPage => Some(PageNavigation::Prev),
            KeyAction::NextPage => Some(PageNavigation::Next),
            KeyAction::LastPage => Some(PageNavigation::Last),
            _ => None,
        }
    }
}
