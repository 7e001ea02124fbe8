use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::ListItem;

use crate::models::{CollectionStats, RankedBook};

/// Shown instead of the listing when there is nothing to list.
pub(crate) const EMPTY_COLLECTION: &str = "Your collection is empty.";

/// One list item per book in collection order, each wrapped to `width` so
/// long entries stay fully readable instead of being cut at the panel edge.
pub(crate) fn listing_items(books: &[RankedBook<'_>], width: usize) -> Vec<ListItem<'static>> {
    books
        .iter()
        .map(|ranked| {
            let rows: Vec<Line<'static>> = wrap_to_width(&ranked.to_string(), width)
                .into_iter()
                .map(Line::from)
                .collect();
            ListItem::new(rows)
        })
        .collect()
}

/// Split `text` into rows of at most `width` characters, breaking after the
/// last space that fits and mid-word only when a word is longer than a row.
/// Concatenating the rows gives back `text`.
pub(crate) fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    while chars.len() - start > width {
        let window = &chars[start..start + width];
        let cut = match window.iter().rposition(|ch| *ch == ' ') {
            Some(pos) if pos > 0 => pos + 1,
            _ => width,
        };
        rows.push(chars[start..start + cut].iter().collect());
        start += cut;
    }
    rows.push(chars[start..].iter().collect());
    rows
}

/// Text block for the progress panel.
pub(crate) fn progress_lines(stats: &CollectionStats) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Total books in collection: {}", stats.total)),
        Line::from(format!("Books read: {}", stats.read)),
        Line::from(format!("Books unread: {}", stats.unread())),
        Line::from(format!("Reading progress: {}%", stats.completion_label())),
    ]
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
