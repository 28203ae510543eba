//! Loading and error notifications shown in place of the results table.

use super::styles::ListStyles;
use crate::model::FetchError;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the loading notification.
pub fn render_loading(frame: &mut Frame, area: Rect, styles: &ListStyles) {
    let paragraph = Paragraph::new(Line::from(Span::styled("Loading events…", styles.loading)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.muted),
        );
    frame.render_widget(paragraph, area);
}

/// Lines of the error notification, one per error.
pub fn error_lines(errors: &[FetchError], styles: &ListStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Could not load events:",
        styles.error,
    ))];
    lines.extend(
        errors
            .iter()
            .map(|error| Line::from(Span::styled(format!("  • {error}"), styles.error))),
    );
    lines.push(Line::from(Span::styled(
        "Change a filter or press r to try again.",
        styles.muted,
    )));
    lines
}

/// Render the error notification.
pub fn render_errors(frame: &mut Frame, area: Rect, errors: &[FetchError], styles: &ListStyles) {
    let paragraph = Paragraph::new(error_lines(errors, styles))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.error)
                .title(" Error "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
