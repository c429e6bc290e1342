//! Overlay rendering (help).

use crate::keymap;
use crate::state::AppState;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_help(f: &mut Frame, app: &AppState) {
    let palette = app.theme.palette();

    let mut lines = vec![
        Line::from(Span::styled(
            "icondex: find an icon, copy its import",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Matches name or import path, case-insensitive.",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
    ];

    lines.extend(keymap::all_bindings().into_iter().map(|binding| {
        Line::from(vec![
            Span::styled(
                format!("  {:<10}", binding.keys),
                Style::default().fg(palette.accent),
            ),
            Span::styled(binding.hint, Style::default().fg(palette.text_primary)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(palette.text_muted),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.primary))
            .title(" Help ")
            .style(Style::default().bg(palette.bg)),
    );

    let area = crate::ui::layout::centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
