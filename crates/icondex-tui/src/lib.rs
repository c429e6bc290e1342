//! icondex-tui: Terminal finder for icon imports.

pub mod app;
pub mod clipboard;
pub mod keymap;
pub mod platform;
pub mod state;
pub mod ui;

pub use app::run;
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use state::{AppMode, AppState, Timings};
pub use ui::Theme;
