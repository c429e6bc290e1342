//! Search input and browse-all toggle rendering.

use crate::state::AppState;
use crate::ui::format_count;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "search: ";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = app.theme.palette();
    let query = app.search.query();
    let is_focused = app.search.is_input_focused();

    let border_style = if is_focused {
        Style::default().fg(palette.border_focus)
    } else {
        Style::default().fg(palette.border_dim)
    };

    let text = if query.is_empty() {
        Span::styled(
            "name or import path…  (Ctrl+K)",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(query, Style::default().fg(palette.text_primary))
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(palette.accent)),
        text,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(if is_focused {
                Style::default().bg(palette.elevated)
            } else {
                Style::default().bg(palette.surface)
            }),
    );

    f.render_widget(input, area);

    if is_focused {
        // 1 (border) + prompt + cursor cells
        let cursor_x = area.x + 1 + PROMPT.len() as u16 + app.search.cursor_column() as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), cursor_y));
    }
}

/// One-line toggle shown only while the query is empty.
pub fn render_browse_toggle(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = app.theme.palette();

    let (mark, label) = if app.search.show_all {
        ("▾", "hide all".to_string())
    } else {
        (
            "▸",
            format!("browse all {} icons", format_count(app.catalog.len())),
        )
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(mark, Style::default().fg(palette.primary)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(palette.text_secondary)),
        Span::styled("  Ctrl+A", Style::default().fg(palette.text_muted)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
