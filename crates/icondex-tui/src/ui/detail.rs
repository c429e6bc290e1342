//! Copy targets for the selected record.

use crate::state::{AppState, CopyKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = app.theme.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_dim))
        .style(Style::default().bg(palette.surface));

    let Some(record) = app.selected_record() else {
        f.render_widget(block, area);
        return;
    };

    let copied = |kind| {
        if app.is_copied(record, kind) {
            Span::styled("  ✓ copied", Style::default().fg(palette.success))
        } else {
            Span::raw("")
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("import ", Style::default().fg(palette.text_muted)),
            Span::styled(
                record.import_statement(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ↵/y", Style::default().fg(palette.text_muted)),
            copied(CopyKind::Statement),
        ]),
        Line::from(vec![
            Span::styled("path   ", Style::default().fg(palette.text_muted)),
            Span::styled(
                record.import_path.as_str(),
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled("  Y", Style::default().fg(palette.text_muted)),
            copied(CopyKind::Path),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
