//! Results list rendering.

use crate::state::{AppState, CopyKind};
use crate::ui::format_count;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let palette = app.theme.palette();
    let total = app.result_count();
    let selected = app.search.selected_index;

    // Update scrolling state.
    let viewport_height = area.height.saturating_sub(2) as usize; // borders
    app.ui.viewport_height = viewport_height.max(1);
    app.ui.update_scroll(selected, total);

    let border_style = if app.search.is_results_focused() {
        Style::default().fg(palette.border_focus)
    } else {
        Style::default().fg(palette.border_dim)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(
            "results ({} of {})",
            format_count(total),
            format_count(app.catalog.len())
        ))
        .style(Style::default().bg(palette.surface));

    if total == 0 {
        let empty = Paragraph::new(Span::styled(
            empty_message(app),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let start = app.ui.scroll_offset.min(total);
    let end = (start + viewport_height).min(total);

    // marker + class column + badge + copied marker
    let available_width = area.width.saturating_sub(4) as usize;
    let max_module_len = available_width.saturating_sub(44).max(12);

    let items: Vec<ListItem> = app
        .result_records()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(absolute_index, record)| {
            let is_selected = absolute_index == selected;
            let marker = if is_selected { "▸" } else { " " };
            let tag = record.provider_tag();

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(palette.primary)),
                Span::raw(" "),
                Span::styled(
                    format!("{:<24}", record.class_name()),
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", tag.label()),
                    Style::default().fg(palette.provider(tag)),
                ),
                Span::raw(" "),
                Span::styled(
                    truncate_middle(record.module_path(), max_module_len, is_selected),
                    Style::default()
                        .fg(palette.text_muted)
                        .add_modifier(Modifier::DIM),
                ),
            ];

            if app.is_copied(record, CopyKind::Statement) {
                spans.push(Span::styled(
                    "  ✓ copied",
                    Style::default().fg(palette.success),
                ));
            } else if app.is_copied(record, CopyKind::Path) {
                spans.push(Span::styled(
                    "  ✓ path copied",
                    Style::default().fg(palette.success),
                ));
            }

            let style = if is_selected {
                Style::default().bg(palette.elevated)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Placeholder for an empty list. Ctrl+A is only offered while it works.
fn empty_message(app: &AppState) -> String {
    if app.browse_toggle_visible() {
        "Type to search, or Ctrl+A to browse everything.".to_string()
    } else if app.current_query().is_idle() {
        "Type to search.".to_string()
    } else {
        format!("No icons match \"{}\".", app.search.query())
    }
}

/// Shorten `text` to `max_width` cells by eliding its middle.
pub fn truncate_middle(text: &str, max_width: usize, show_full: bool) -> String {
    if show_full || text.width() <= max_width || max_width < 5 {
        return text.to_string();
    }

    let budget = max_width - 1; // "…"
    let head_budget = budget / 2;
    let tail_budget = budget - head_budget;

    let mut head = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > head_budget {
            break;
        }
        head.push(ch);
        used += w;
    }

    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > tail_budget {
            break;
        }
        tail.push(ch);
        used += w;
    }
    tail.reverse();

    let mut out = head;
    out.push('…');
    out.extend(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timings;
    use crate::ui::Theme;
    use icondex_index::{IconCatalog, IconRecord};

    fn app_with_query(query: &str) -> AppState {
        let catalog =
            IconCatalog::from_records(vec![IconRecord::new("EC2", "aws.compute.EC2", "aws")]);
        let mut app = AppState::new(catalog, Theme::Dark, Timings::default());
        app.search.set_query(query);
        app.refresh_results();
        app
    }

    #[test]
    fn empty_query_offers_browse_all() {
        assert!(empty_message(&app_with_query("")).contains("Ctrl+A"));
    }

    #[test]
    fn blank_query_does_not_offer_browse_all() {
        let app = app_with_query("   ");
        assert!(!app.browse_toggle_visible());
        assert_eq!(empty_message(&app), "Type to search.");
    }

    #[test]
    fn unmatched_query_is_named() {
        assert_eq!(
            empty_message(&app_with_query("zzz")),
            "No icons match \"zzz\"."
        );
    }

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_middle("aws.compute", 20, false), "aws.compute");
    }

    #[test]
    fn long_text_elided_in_middle() {
        let out = truncate_middle("diagrams.alibabacloud.compute.storage", 15, false);
        assert_eq!(out.width(), 15);
        assert!(out.starts_with("diagram"));
        assert!(out.ends_with("storage"));
        assert!(out.contains('…'));
    }

    #[test]
    fn selected_row_shows_full_text() {
        let text = "diagrams.alibabacloud.compute.storage";
        assert_eq!(truncate_middle(text, 10, true), text);
    }
}
