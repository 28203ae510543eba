//! Screen layout.
//!
//! Pure rendering of the event list view model, top to bottom: title,
//! filters, pagination, body (errors | loading | results table) and
//! status bar. The help overlay is drawn last, over everything.

use super::constants::{FILTER_BLOCK_HEIGHT, PAGINATION_HEIGHT, STATUS_BAR_HEIGHT, TITLE_HEIGHT};
use super::help::render_help_overlay;
use super::notifications::{render_errors, render_loading};
use super::pagination_bar::pagination_line;
use super::styles::ListStyles;
use super::table::render_results_table;
use crate::model::selector::selection_label;
use crate::state::{AppState, EventListView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title line.
    pub title: Rect,
    /// Date range and selectors.
    pub filters: Rect,
    /// Pagination line.
    pub pagination: Rect,
    /// Errors, loading notice or results table.
    pub body: Rect,
    /// Key hints.
    pub status: Rect,
}

/// Split `area` into the screen regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FILTER_BLOCK_HEIGHT),
            Constraint::Length(PAGINATION_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        filters: chunks[1],
        pagination: chunks[2],
        body: chunks[3],
        status: chunks[4],
    }
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ListStyles) {
    let areas = calculate_areas(frame.area());
    let view = state.list().view();

    render_title(frame, areas.title, &view, styles);
    render_filters(frame, areas.filters, state, &view, styles);
    render_pagination(frame, areas.pagination, &view, styles);
    render_body(frame, areas.body, state, &view, styles);
    render_status_bar(frame, areas.status, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_title(frame: &mut Frame, area: Rect, view: &EventListView<'_>, styles: &ListStyles) {
    let title = Paragraph::new(Line::from(Span::styled(view.title.to_string(), styles.title)));
    frame.render_widget(title, area);
}

/// Date range and selector lines.
pub fn filter_lines(
    state: &AppState,
    view: &EventListView<'_>,
    styles: &ListStyles,
) -> Vec<Line<'static>> {
    let filters = view.filters;
    let location = selection_label(state.locations(), filters.location_id());
    let zone = selection_label(state.zones(), filters.zone_id());

    vec![
        Line::from(vec![
            Span::styled("Date range: ", styles.label),
            Span::styled(filters.date_range_label(), styles.value),
        ]),
        Line::from(vec![
            Span::styled("Location: ", styles.label),
            Span::styled(location.to_string(), styles.value),
            Span::raw("    "),
            Span::styled("Zone: ", styles.label),
            Span::styled(zone.to_string(), styles.value),
        ]),
    ]
}

fn render_filters(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &EventListView<'_>,
    styles: &ListStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.muted)
        .title(" Filters ");
    frame.render_widget(Paragraph::new(filter_lines(state, view, styles)).block(block), area);
}

fn render_pagination(frame: &mut Frame, area: Rect, view: &EventListView<'_>, styles: &ListStyles) {
    // Only a loaded page has a window; while loading or after an error the
    // line stays empty.
    if let Some(window) = &view.window {
        let line = pagination_line(window, view.filters.page(), styles);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &EventListView<'_>,
    styles: &ListStyles,
) {
    if view.loading {
        render_loading(frame, area, styles);
    } else if !view.errors.is_empty() {
        render_errors(frame, area, view.errors, styles);
    } else if view.window.is_some() {
        render_results_table(frame, area, view.results, state.selected_row, styles);
    }
}

/// Key hints shown in the status bar.
const STATUS_HINTS: &[(&str, &str)] = &[
    ("h/l", "page"),
    ("[/]", "dates"),
    ("o/z", "filters"),
    ("r", "refresh"),
    ("?", "help"),
    ("q", "quit"),
];

fn render_status_bar(frame: &mut Frame, area: Rect, styles: &ListStyles) {
    let mut spans = Vec::with_capacity(STATUS_HINTS.len() * 3);
    for (index, (keys, label)) in STATUS_HINTS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", styles.muted));
        }
        spans.push(Span::styled(*keys, styles.key_hint));
        spans.push(Span::styled(format!(": {label}"), styles.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
