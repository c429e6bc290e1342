//! Light and dark palettes.

use crate::platform::ColorSchemeProbe;
use icondex_core::config::ThemePreference;
use icondex_index::ProviderTag;
use ratatui::style::Color;

/// Display theme for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme. `Auto` consults the probe once; no signal
    /// means dark.
    pub fn detect(preference: ThemePreference, probe: &dyn ColorSchemeProbe) -> Self {
        match preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Auto => match probe.prefers_dark() {
                Some(false) => Theme::Light,
                Some(true) | None => Theme::Dark,
            },
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Colours used by every widget.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub elevated: Color,
    pub primary: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub success: Color,
    pub border_dim: Color,
    pub border_focus: Color,
    pub providers: ProviderColors,
}

/// Badge colour per provider tag.
#[derive(Debug, Clone, Copy)]
pub struct ProviderColors {
    pub aws: Color,
    pub azure: Color,
    pub gcp: Color,
    pub k8s: Color,
    pub alibaba: Color,
    pub other: Color,
}

impl Palette {
    pub fn provider(&self, tag: ProviderTag) -> Color {
        let p = &self.providers;
        match tag {
            ProviderTag::Aws => p.aws,
            ProviderTag::Azure => p.azure,
            ProviderTag::Gcp => p.gcp,
            ProviderTag::K8s => p.k8s,
            ProviderTag::Alibaba => p.alibaba,
            ProviderTag::Other => p.other,
        }
    }
}

/// Midnight amber.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(18, 18, 24), // #121218
    surface: Color::Rgb(24, 24, 32), // #181820
    elevated: Color::Rgb(32, 32, 42), // #20202A
    primary: Color::Rgb(255, 179, 71), // #FFB347
    accent: Color::Rgb(103, 224, 227), // #67E0E3
    text_primary: Color::Rgb(230, 230, 235),
    text_secondary: Color::Rgb(160, 160, 170),
    text_muted: Color::Rgb(100, 100, 110),
    success: Color::Rgb(118, 218, 133), // #76DA85
    border_dim: Color::Rgb(48, 48, 58),
    border_focus: Color::Rgb(255, 179, 71),
    providers: ProviderColors {
        aws: Color::Rgb(255, 153, 0), // #FF9900
        azure: Color::Rgb(80, 160, 255),
        gcp: Color::Rgb(234, 67, 53),
        k8s: Color::Rgb(110, 150, 255),
        alibaba: Color::Rgb(255, 106, 0),
        other: Color::Rgb(160, 160, 170),
    },
};

/// Paper.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(250, 248, 243), // #FAF8F3
    surface: Color::Rgb(242, 239, 232),
    elevated: Color::Rgb(228, 224, 214),
    primary: Color::Rgb(176, 98, 0), // #B06200
    accent: Color::Rgb(0, 120, 130),
    text_primary: Color::Rgb(30, 30, 36),
    text_secondary: Color::Rgb(80, 80, 92),
    text_muted: Color::Rgb(130, 130, 140),
    success: Color::Rgb(30, 130, 60),
    border_dim: Color::Rgb(205, 200, 190),
    border_focus: Color::Rgb(176, 98, 0),
    providers: ProviderColors {
        aws: Color::Rgb(196, 110, 0),
        azure: Color::Rgb(0, 94, 184),
        gcp: Color::Rgb(190, 40, 30),
        k8s: Color::Rgb(50, 90, 200),
        alibaba: Color::Rgb(210, 80, 0),
        other: Color::Rgb(100, 100, 110),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedColorScheme;

    #[test]
    fn auto_follows_probe() {
        let light = FixedColorScheme(Some(false));
        let dark = FixedColorScheme(Some(true));
        let silent = FixedColorScheme(None);

        assert_eq!(Theme::detect(ThemePreference::Auto, &light), Theme::Light);
        assert_eq!(Theme::detect(ThemePreference::Auto, &dark), Theme::Dark);
        assert_eq!(Theme::detect(ThemePreference::Auto, &silent), Theme::Dark);
    }

    #[test]
    fn explicit_preference_wins() {
        let dark = FixedColorScheme(Some(true));
        assert_eq!(Theme::detect(ThemePreference::Light, &dark), Theme::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Light.palette().bg, Theme::Dark.palette().bg);
        assert_ne!(
            DARK.provider(ProviderTag::Aws),
            DARK.provider(ProviderTag::Azure)
        );
    }
}
