//! Footer / status bar rendering.

use crate::keymap;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = app.theme.palette();

    let spans: Vec<Span> = keymap::available_bindings(app)
        .into_iter()
        .flat_map(|binding| {
            [
                Span::styled(
                    format!("{}:", binding.keys),
                    Style::default().fg(palette.primary),
                ),
                Span::styled(
                    format!(" {}  ", binding.label),
                    Style::default().fg(palette.text_secondary),
                ),
            ]
        })
        .collect();

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    f.render_widget(hints, area);
}
