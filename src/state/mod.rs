//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod controller;

// Re-export for convenience
pub use app_state::{ActionOutcome, AppState};
pub use controller::{
    update, ControllerEvent, EventListState, EventListView, FetchRequest, LoadingState,
};
