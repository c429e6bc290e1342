//! Header rendering.

use crate::state::AppState;
use crate::ui::format_count;
use icondex_core::build_info::BUILD_INFO;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = app.theme.palette();
    let sep = Span::styled(" | ", Style::default().fg(palette.text_muted));

    let spans = vec![
        Span::styled(
            "icondex",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled("≡ ", Style::default().fg(palette.accent)),
        Span::styled(
            format!("{} icons", format_count(app.catalog.len())),
            Style::default().fg(palette.accent),
        ),
        sep.clone(),
        Span::styled(
            format!("{} {}", app.theme.icon(), app.theme.label()),
            Style::default().fg(palette.text_secondary),
        ),
    ];

    let build_info = BUILD_INFO.short();
    let build_width = (build_info.len() as u16).min(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_dim))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(build_width)])
        .split(inner);

    let left = Paragraph::new(Line::from(spans));
    let right = Paragraph::new(build_info)
        .style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::DIM),
        )
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}
