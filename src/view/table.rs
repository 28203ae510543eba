//! Results table.

use super::constants::MAX_COLUMN_WIDTH;
use super::styles::ListStyles;
use crate::model::EventRecord;
use ratatui::{
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Column headers, in display order.
pub const COLUMN_HEADERS: [&str; 6] = ["Event", "Location", "Zone", "Type", "Reference", "Timestamp"];

fn cells(record: &EventRecord) -> [&str; 6] {
    [
        record.event.as_str(),
        record.location.as_str(),
        record.zone.as_str(),
        record.kind.as_str(),
        record.reference.as_str(),
        record.timestamp.as_str(),
    ]
}

/// Width of each column: the widest of header and cells, capped at
/// [`MAX_COLUMN_WIDTH`].
pub fn column_widths(records: &[EventRecord]) -> [u16; 6] {
    let mut widths = COLUMN_HEADERS.map(|header| header.width());

    for record in records {
        for (width, cell) in widths.iter_mut().zip(cells(record)) {
            *width = (*width).max(cell.width());
        }
    }

    widths.map(|w| u16::try_from(w).unwrap_or(u16::MAX).min(MAX_COLUMN_WIDTH))
}

/// Render `records` with `selected` highlighted, or a placeholder when the
/// page is empty.
pub fn render_results_table(
    frame: &mut Frame,
    area: Rect,
    records: &[EventRecord],
    selected: Option<usize>,
    styles: &ListStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.muted)
        .title(" Events ");

    if records.is_empty() {
        let empty = Paragraph::new(Text::styled("No events match these filters.", styles.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(COLUMN_HEADERS.map(Cell::from)).style(styles.table_header);
    let rows = records
        .iter()
        .map(|record| Row::new(cells(record).map(|cell| Cell::from(cell.to_string()))));
    let widths = column_widths(records).map(Constraint::Length);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(styles.row_highlight);

    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event: &str, reference: &str) -> EventRecord {
        EventRecord {
            event: event.into(),
            location: "North".into(),
            zone: "Z1".into(),
            kind: "alarm".into(),
            reference: reference.into(),
            timestamp: "2026-10-18T09:15:00".into(),
        }
    }

    #[test]
    fn widths_fall_back_to_headers_without_rows() {
        assert_eq!(column_widths(&[]), [5, 8, 4, 4, 9, 9]);
    }

    #[test]
    fn widths_grow_to_widest_cell() {
        let widths = column_widths(&[record("Door forced", "R-1"), record("Gate", "REF-000123")]);
        assert_eq!(widths[0], 11);
        assert_eq!(widths[4], 10);
        assert_eq!(widths[5], 19);
    }

    #[test]
    fn widths_measure_display_columns_not_bytes() {
        // Each CJK character occupies two terminal columns.
        let widths = column_widths(&[record("入口警報", "R")]);
        assert_eq!(widths[0], 8);
    }

    #[test]
    fn widths_are_capped() {
        let long = "x".repeat(200);
        let widths = column_widths(&[record(&long, "R")]);
        assert_eq!(widths[0], MAX_COLUMN_WIDTH);
    }
}
