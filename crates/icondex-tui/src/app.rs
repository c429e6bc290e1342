//! Main application loop and event handling.

use crate::clipboard::ClipboardSink;
use crate::state::{AppMode, AppState, CopyKind, FocusTarget};
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Run the TUI application
pub fn run(app: &mut AppState, clipboard: &mut dyn ClipboardSink) -> Result<()> {
    // Restores the terminal on every exit, including early errors and panics.
    let _guard = TerminalGuard::new(restore_terminal);
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(
        records = app.catalog.len(),
        theme = app.theme.label(),
        "session started"
    );

    let res = run_app(&mut terminal, app, clipboard);

    info!("session ended");
    res
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs `restore` exactly once, when dropped.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    clipboard: &mut dyn ClipboardSink,
) -> Result<()> {
    loop {
        app.refresh_results();

        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key, clipboard, Instant::now());
                }
            }
        }

        app.tick(Instant::now());

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard events
pub fn handle_key_event(
    app: &mut AppState,
    key: KeyEvent,
    clipboard: &mut dyn ClipboardSink,
    now: Instant,
) {
    match app.mode {
        AppMode::Search => handle_search_keys(app, key, clipboard, now),
        AppMode::Help => handle_help_keys(app, key),
    }
}

fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// Handle keys in search mode
fn handle_search_keys(
    app: &mut AppState,
    key: KeyEvent,
    clipboard: &mut dyn ClipboardSink,
    now: Instant,
) {
    // Global keys that work regardless of focus
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('k') | KeyCode::Char('K') if is_command(key.modifiers) => {
            app.focus_search();
            return;
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_theme();
            return;
        }
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_show_all();
            return;
        }
        KeyCode::Esc => {
            app.press_escape(now);
            return;
        }
        KeyCode::Tab => {
            app.search.toggle_focus();
            return;
        }
        _ => {}
    }

    // Focus-specific keys
    if app.search.is_input_focused() {
        handle_input_keys(app, key, clipboard, now);
    } else {
        handle_results_keys(app, key, clipboard, now);
    }
}

/// Handle keys when input is focused
fn handle_input_keys(
    app: &mut AppState,
    key: KeyEvent,
    clipboard: &mut dyn ClipboardSink,
    now: Instant,
) {
    match (key.code, key.modifiers) {
        // Typing characters
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            app.search.insert_char(c);
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            app.search.delete_word();
        }
        (KeyCode::Backspace, _) => {
            app.search.delete_char();
        }
        // Cursor movement
        (KeyCode::Left, _) => {
            app.search.move_cursor_left();
        }
        (KeyCode::Right, _) => {
            app.search.move_cursor_right();
        }
        (KeyCode::Home, _) => {
            app.search.move_cursor_home();
        }
        (KeyCode::End, _) => {
            app.search.move_cursor_end();
        }
        (KeyCode::Enter, _) => {
            app.copy_selected(CopyKind::Statement, clipboard, now);
        }
        // Down arrow switches to results if there are any
        (KeyCode::Down, _) => {
            if !app.search.results.is_empty() {
                app.search.focus = FocusTarget::Results;
            }
        }
        _ => {}
    }
}

/// Handle keys when results are focused
fn handle_results_keys(
    app: &mut AppState,
    key: KeyEvent,
    clipboard: &mut dyn ClipboardSink,
    now: Instant,
) {
    let page = app.ui.viewport_height;

    match (key.code, key.modifiers) {
        // Up arrow at top goes back to input
        (KeyCode::Up, KeyModifiers::NONE) if app.search.selected_index == 0 => {
            app.search.focus = FocusTarget::Input;
        }
        // Navigation - vi keys and arrows
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            app.search.select_next();
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            app.search.select_previous();
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
            app.search.select_first();
        }
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
            app.search.select_last();
        }
        (KeyCode::PageDown, _) => {
            app.search.select_page(page, true);
        }
        (KeyCode::PageUp, _) => {
            app.search.select_page(page, false);
        }
        // Copy affordances
        (KeyCode::Enter, _) | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            app.copy_selected(CopyKind::Statement, clipboard, now);
        }
        (KeyCode::Char('Y'), _) => {
            app.copy_selected(CopyKind::Path, clipboard, now);
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            app.focus_search();
        }
        (KeyCode::Char('?'), _) => {
            app.toggle_help();
        }
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            app.quit();
        }
        _ => {}
    }
}

/// Handle keys in help mode
fn handle_help_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.toggle_help();
        }
        KeyCode::Char('k') | KeyCode::Char('K') if is_command(key.modifiers) => {
            app.focus_search();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        _ => {}
    }
}
