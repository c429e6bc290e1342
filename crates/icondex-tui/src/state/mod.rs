//! Application state management.

mod feedback;

pub use feedback::{CopyFeedback, CopyId, CopyKind, EscapeChord};

use crate::clipboard::ClipboardSink;
use crate::ui::Theme;
use icondex_core::config::UiConfig;
use icondex_index::{IconCatalog, IconRecord, Query, QueryEngine};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use tui_input::{Input, InputRequest};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main search mode
    Search,
    /// Help overlay
    Help,
}

/// Timings for the transient UI markers.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub copy_feedback: Duration,
    pub escape_chord: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for Timings {
    fn from(config: &UiConfig) -> Self {
        Self {
            copy_feedback: Duration::from_millis(config.copy_feedback_ms),
            escape_chord: Duration::from_millis(config.escape_chord_ms),
        }
    }
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Read-only icon list
    pub catalog: IconCatalog,
    /// Search state
    pub search: SearchState,
    /// UI state
    pub ui: UiState,
    /// Display theme for this session
    pub theme: Theme,
    /// "Copied" confirmation
    pub feedback: CopyFeedback,
    /// Double-Escape detector
    pub escape: EscapeChord,
    /// Whether to quit
    pub should_quit: bool,
    /// Query the current results were computed for
    last_query: Option<Query>,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: IconCatalog, theme: Theme, timings: Timings) -> Self {
        Self {
            mode: AppMode::Search,
            catalog,
            search: SearchState::new(),
            ui: UiState::new(),
            theme,
            feedback: CopyFeedback::new(timings.copy_feedback),
            escape: EscapeChord::new(timings.escape_chord),
            should_quit: false,
            last_query: None,
        }
    }

    /// The query as the engine sees it.
    pub fn current_query(&self) -> Query {
        Query::new(self.search.query(), self.search.show_all)
    }

    /// Re-run the query engine if the query or browse flag changed.
    ///
    /// Returns `true` when results were recomputed.
    pub fn refresh_results(&mut self) -> bool {
        let query = self.current_query();
        if self.last_query.as_ref() == Some(&query) {
            return false;
        }

        let engine = QueryEngine::new(self.catalog.records());
        let results = engine.search_indices(&query);
        debug!(
            term = %query.term,
            show_all = query.show_all,
            hits = results.len(),
            "recomputed results"
        );

        self.search.set_results(results);
        self.last_query = Some(query);
        true
    }

    /// Records currently shown, in catalog order.
    pub fn result_records(&self) -> impl Iterator<Item = &IconRecord> + '_ {
        let records = self.catalog.records();
        self.search.results.iter().filter_map(|&idx| records.get(idx))
    }

    pub fn result_count(&self) -> usize {
        self.search.results.len()
    }

    /// Get selected record
    pub fn selected_record(&self) -> Option<&IconRecord> {
        self.search
            .results
            .get(self.search.selected_index)
            .and_then(|&idx| self.catalog.records().get(idx))
    }

    /// The browse-all toggle is only offered while the query is empty.
    pub fn browse_toggle_visible(&self) -> bool {
        self.search.query().is_empty()
    }

    /// Flip browse-all. Ignored while the toggle is hidden.
    pub fn toggle_show_all(&mut self) -> bool {
        if !self.browse_toggle_visible() {
            return false;
        }
        self.search.show_all = !self.search.show_all;
        self.search.selected_index = 0;
        self.ui.scroll_offset = 0;
        true
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.label(), "theme toggled");
    }

    /// Move focus to the search input from anywhere.
    pub fn focus_search(&mut self) {
        self.mode = AppMode::Search;
        self.search.focus = FocusTarget::Input;
    }

    /// Handle an Escape press. A double press clears the query and moves
    /// focus off the input.
    pub fn press_escape(&mut self, now: Instant) -> bool {
        if !self.escape.press(now) {
            return false;
        }
        self.search.clear_query();
        self.search.focus = FocusTarget::Results;
        true
    }

    /// Copy `text` and show the confirmation for `id`.
    ///
    /// Clipboard failures are logged and otherwise ignored.
    pub fn copy(
        &mut self,
        text: &str,
        id: CopyId,
        clipboard: &mut dyn ClipboardSink,
        now: Instant,
    ) {
        if let Err(err) = clipboard.set_text(text) {
            warn!(error = %err, "clipboard write failed");
        }
        self.feedback.mark(id, now);
    }

    /// Copy the selected record's import statement or import path.
    pub fn copy_selected(
        &mut self,
        kind: CopyKind,
        clipboard: &mut dyn ClipboardSink,
        now: Instant,
    ) -> bool {
        let Some(record) = self.selected_record() else {
            return false;
        };

        let text = match kind {
            CopyKind::Statement => record.import_statement(),
            CopyKind::Path => record.import_path.clone(),
        };
        let id = CopyId::new(record.import_path.clone(), kind);

        self.copy(&text, id, clipboard, now);
        true
    }

    pub fn is_copied(&self, record: &IconRecord, kind: CopyKind) -> bool {
        self.feedback
            .current()
            .is_some_and(|id| id.kind == kind && id.import_path == record.import_path)
    }

    /// Advance timers.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Search,
            AppMode::Search => AppMode::Help,
        };
    }
}

/// Focus target in search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Search input is focused
    Input,
    /// Results list is focused
    Results,
}

/// Search state
pub struct SearchState {
    /// Query text and cursor
    pub input: Input,
    /// Browse the whole catalog while the query is empty
    pub show_all: bool,
    /// Matching positions in the catalog
    pub results: Vec<usize>,
    /// Selected result index
    pub selected_index: usize,
    /// Current focus target
    pub focus: FocusTarget,
}

impl SearchState {
    /// Create a new search state
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            show_all: false,
            results: Vec::new(),
            selected_index: 0,
            focus: FocusTarget::Input,
        }
    }

    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Cursor column in terminal cells.
    pub fn cursor_column(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Toggle focus between input and results
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusTarget::Input => FocusTarget::Results,
            FocusTarget::Results => FocusTarget::Input,
        };
    }

    /// Check if input is focused
    pub fn is_input_focused(&self) -> bool {
        self.focus == FocusTarget::Input
    }

    /// Check if results are focused
    pub fn is_results_focused(&self) -> bool {
        self.focus == FocusTarget::Results
    }

    /// Update query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.input = Input::new(query.into());
        self.selected_index = 0;
    }

    /// Clear query. `show_all` is left as is.
    pub fn clear_query(&mut self) {
        self.input.reset();
        self.selected_index = 0;
    }

    /// Add character at cursor
    pub fn insert_char(&mut self, c: char) {
        self.edit(InputRequest::InsertChar(c));
    }

    /// Remove character before cursor
    pub fn delete_char(&mut self) {
        self.edit(InputRequest::DeletePrevChar);
    }

    /// Remove word before cursor
    pub fn delete_word(&mut self) {
        self.edit(InputRequest::DeletePrevWord);
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.input.handle(InputRequest::GoToPrevChar);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        self.input.handle(InputRequest::GoToNextChar);
    }

    pub fn move_cursor_home(&mut self) {
        self.input.handle(InputRequest::GoToStart);
    }

    pub fn move_cursor_end(&mut self) {
        self.input.handle(InputRequest::GoToEnd);
    }

    fn edit(&mut self, request: InputRequest) {
        if self.input.handle(request).is_some() {
            self.selected_index = 0;
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.results.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Jump to top
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to bottom
    pub fn select_last(&mut self) {
        self.selected_index = self.results.len().saturating_sub(1);
    }

    /// Move selection by a page
    pub fn select_page(&mut self, rows: usize, down: bool) {
        let rows = rows.max(1);
        self.selected_index = if down {
            (self.selected_index + rows).min(self.results.len().saturating_sub(1))
        } else {
            self.selected_index.saturating_sub(rows)
        };
    }

    /// Update results
    pub fn set_results(&mut self, results: Vec<usize>) {
        self.results = results;
        // Reset selection if out of bounds
        if self.selected_index >= self.results.len() {
            self.selected_index = self.results.len().saturating_sub(1);
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI state
pub struct UiState {
    /// Scroll offset for results list
    pub scroll_offset: usize,
    /// Viewport height
    pub viewport_height: usize,
}

impl UiState {
    /// Create a new UI state
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 0,
        }
    }

    /// Update scroll offset to keep selection visible
    pub fn update_scroll(&mut self, selected_row: usize, total_rows: usize) {
        let total_rows = total_rows.max(1);
        let selected_row = selected_row.min(total_rows - 1);
        let viewport = self.viewport_height.max(1);

        if selected_row < self.scroll_offset {
            self.scroll_offset = selected_row;
        } else if selected_row >= self.scroll_offset + viewport {
            self.scroll_offset = selected_row + 1 - viewport;
        }

        self.scroll_offset = self.scroll_offset.min(total_rows - 1);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
