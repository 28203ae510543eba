//! Domain model types (pure).
//!
//! All types in this module are plain data with pure operations.

pub mod error;
pub mod event_record;
pub mod filter;
pub mod key_action;
pub mod pagination;
pub mod selector;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use event_record::{EventRecord, ResultsPage};
pub use filter::{FilterPatch, FilterState, DEFAULT_PAGE_SIZE};
pub use key_action::KeyAction;
pub use pagination::{PageNavigation, PageWindow};
pub use selector::{Cycle, SelectorOption};
