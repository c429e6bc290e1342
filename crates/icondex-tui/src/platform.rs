//! Platform colour-scheme detection.

/// Reports whether the surrounding environment prefers a dark scheme.
pub trait ColorSchemeProbe {
    /// `None` when the platform gives no signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Asks the desktop for its colour scheme, then falls back to the terminal's
/// `COLORFGBG` hint.
///
/// - **Windows**: `AppsUseLightTheme` registry value
/// - **macOS**: `AppleInterfaceStyle` user default
/// - **Linux**: XDG Desktop Portal `color-scheme` setting
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemColorScheme;

impl ColorSchemeProbe for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        from_mode(dark_light::detect()).or_else(|| EnvColorScheme.prefers_dark())
    }
}

/// Map the desktop's reported mode. `Default` means the platform had no
/// preference to report.
pub fn from_mode(mode: dark_light::Mode) -> Option<bool> {
    match mode {
        dark_light::Mode::Dark => Some(true),
        dark_light::Mode::Light => Some(false),
        dark_light::Mode::Default => None,
    }
}

/// Reads the `COLORFGBG` variable set by rxvt, Konsole, iTerm2 and others.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
    }
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Parse `fg;bg` (or `fg;default;bg`). The background is the last field, as
/// an ANSI colour index.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_modes_map_to_preference() {
        assert_eq!(from_mode(dark_light::Mode::Dark), Some(true));
        assert_eq!(from_mode(dark_light::Mode::Light), Some(false));
        assert_eq!(from_mode(dark_light::Mode::Default), None);
    }

    #[test]
    fn parses_common_values() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("12;default;7"), Some(false));
        assert_eq!(parse_colorfgbg("7;8"), Some(true));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15;default"), None);
        assert_eq!(parse_colorfgbg("0;200"), None);
    }
}
