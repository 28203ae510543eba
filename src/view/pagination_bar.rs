//! Pagination line: navigation markers around the `start - end of total`
//! range.
//!
//! Markers at the edge the current page already sits on are drawn with the
//! disabled style; the matching key bindings are no-ops there.

use super::styles::ListStyles;
use crate::model::PageWindow;
use ratatui::text::{Line, Span};

/// Build the pagination line for `window`, currently showing `page`.
pub fn pagination_line(window: &PageWindow, page: u32, styles: &ListStyles) -> Line<'static> {
    let back = if window.is_first_page {
        styles.control_disabled
    } else {
        styles.control
    };
    let forward = if window.is_last_page {
        styles.control_disabled
    } else {
        styles.control
    };

    Line::from(vec![
        Span::styled("« First", back),
        Span::raw("  "),
        Span::styled("‹ Prev", back),
        Span::raw("   "),
        Span::styled(window.to_string(), styles.value),
        Span::styled(format!("  (page {page}/{})", window.last_page), styles.muted),
        Span::raw("   "),
        Span::styled("Next ›", forward),
        Span::raw("  "),
        Span::styled("Last »", forward),
    ])
}
