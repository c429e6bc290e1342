//! UI components and rendering.

pub mod detail;
pub mod footer;
pub mod header;
pub mod layout;
pub mod overlays;
pub mod results;
pub mod search_input;
pub mod theme;

pub use theme::{Palette, Theme};

use crate::state::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Render one frame.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let palette = app.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text_primary)),
        f.area(),
    );

    let hint_height = if app.browse_toggle_visible() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(3),           // Search input
            Constraint::Length(hint_height), // Browse-all toggle
            Constraint::Min(0),              // Results
            Constraint::Length(4),           // Selected detail
            Constraint::Length(1),           // Footer
        ])
        .split(f.area());

    header::render(f, chunks[0], app);
    search_input::render(f, chunks[1], app);
    if hint_height > 0 {
        search_input::render_browse_toggle(f, chunks[2], app);
    }
    results::render(f, chunks[3], app);
    detail::render(f, chunks[4], app);
    footer::render(f, chunks[5], app);

    if app.mode == AppMode::Help {
        overlays::render_help(f, app);
    }
}

/// `1234567` -> `1,234,567`
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (count, ch) in s.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timings;
    use icondex_index::{IconCatalog, IconRecord};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> AppState {
        let catalog = IconCatalog::from_records(vec![
            IconRecord::new("EC2", "aws.compute.EC2", "aws"),
            IconRecord::new("AKS", "azure.compute.AKS", "azure"),
        ]);
        AppState::new(catalog, Theme::Dark, Timings::default())
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1840), "1,840");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn idle_screen_offers_browse_all() {
        let mut app = app();
        app.refresh_results();
        let text = screen(&mut app);
        assert!(text.contains("browse all"));
        assert!(!text.contains("aws.compute"));
    }

    #[test]
    fn query_renders_matches_and_count() {
        let mut app = app();
        app.search.set_query("ec");
        app.refresh_results();
        let text = screen(&mut app);
        assert!(text.contains("EC2"));
        assert!(text.contains("from aws.compute import EC2"));
        assert!(text.contains("results (1 of 2)"));
        assert!(!text.contains("AKS"));
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut app = app();
        app.toggle_help();
        let text = screen(&mut app);
        assert!(text.contains("Ctrl+K"));
        assert!(text.contains("Esc Esc"));
    }
}
