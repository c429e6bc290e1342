//! icondex TUI - search an icon catalog and copy imports.

use anyhow::{Context, Result};
use clap::Parser;
use icondex_core::build_info::BUILD_INFO;
use icondex_core::config::ThemePreference;
use icondex_core::{paths, Config};
use icondex_index::IconCatalog;
use icondex_tui::platform::SystemColorScheme;
use icondex_tui::{AppState, ClipboardSink, MemoryClipboard, SystemClipboard, Theme, Timings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icondex-tui")]
#[command(about = "Interactive icon finder", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Icon catalog (JSON array)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Startup theme: auto, light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Keep copies in memory instead of the system clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", BUILD_INFO.version_line("icondex-tui"));
        return Ok(());
    }

    // The terminal belongs to the UI, so logs go to a file.
    if let Err(err) = icondex_core::logging::init_file(&paths::tui_log_path()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let config_path = cli.config.unwrap_or_else(paths::config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let catalog_path = cli.catalog.unwrap_or_else(|| config.catalog_path.clone());
    let catalog = IconCatalog::open(&catalog_path)?;

    let preference = match cli.theme.as_deref() {
        Some(raw) => raw.parse::<ThemePreference>()?,
        None => config.ui.theme,
    };
    let theme = Theme::detect(preference, &SystemColorScheme);

    let mut app = AppState::new(catalog, theme, Timings::from(&config.ui));

    let mut clipboard: Box<dyn ClipboardSink> = if cli.no_clipboard {
        Box::new(MemoryClipboard::default())
    } else {
        Box::new(SystemClipboard::new())
    };

    icondex_tui::run(&mut app, clipboard.as_mut())
}
