//! Common filesystem paths used by icondex.

use std::path::PathBuf;

/// Base directory for icondex state (config, catalog, logs).
///
/// Defaults to `~/.config/icondex`, but can be overridden via `ICONDEX_DIR`
/// for testing or side-by-side catalogs.
pub fn icondex_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ICONDEX_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("icondex")
}

/// Path to the icondex configuration file.
pub fn config_path() -> PathBuf {
    icondex_dir().join("config.toml")
}

/// Default location of the icon catalog.
pub fn default_catalog_path() -> PathBuf {
    icondex_dir().join("icons.json")
}

/// Log file used by the TUI, which cannot write to its own terminal.
pub fn tui_log_path() -> PathBuf {
    icondex_dir().join("icondex-tui.log")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
