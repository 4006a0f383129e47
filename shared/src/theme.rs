//! Colour themes expressed as CSS custom properties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local storage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Orange,
    Purple,
    Green,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Light,
        ThemeName::Dark,
        ThemeName::Orange,
        ThemeName::Purple,
        ThemeName::Green,
    ];

    /// Class placed on the document root
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Orange => "orange",
            ThemeName::Purple => "purple",
            ThemeName::Green => "green",
        }
    }

    pub fn config(&self) -> &'static ThemeConfig {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
            ThemeName::Orange => &ORANGE,
            ThemeName::Purple => &PURPLE,
            ThemeName::Green => &GREEN,
        }
    }

    /// Stored theme, or the default when missing or unrecognised
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(ThemeName::from_str) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("{}, using default theme", e);
                ThemeName::default()
            }
            None => ThemeName::default(),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct ThemeError(pub String);

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .ok_or_else(|| ThemeError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub accent_from: &'static str,
    pub accent_to: &'static str,
    pub hover: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: &'static str,
    pub value: ThemeName,
    pub icon: &'static str,
    pub description: &'static str,
    pub colors: Palette,
}

impl ThemeConfig {
    /// `--name: value;` declarations for every palette entry
    pub fn css_variables(&self) -> Vec<(&'static str, &'static str)> {
        let c = &self.colors;
        vec![
            ("--background", c.background),
            ("--foreground", c.foreground),
            ("--card-bg", c.card_bg),
            ("--card-border", c.card_border),
            ("--text-primary", c.text_primary),
            ("--text-secondary", c.text_secondary),
            ("--accent-from", c.accent_from),
            ("--accent-to", c.accent_to),
            ("--hover", c.hover),
            ("--border", c.border),
        ]
    }

    /// Inline style string setting every variable
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Mobile browser chrome colour
    pub fn meta_color(&self) -> &'static str {
        self.colors.background
    }
}

static LIGHT: ThemeConfig = ThemeConfig {
    name: "Light",
    value: ThemeName::Light,
    icon: "☀️",
    description: "Bright & Clean",
    colors: Palette {
        background: "#ffffff",
        foreground: "#171717",
        card_bg: "#ffffff",
        card_border: "#e5e7eb",
        text_primary: "#111827",
        text_secondary: "#6b7280",
        accent_from: "#3b82f6",
        accent_to: "#8b5cf6",
        hover: "#f3f4f6",
        border: "#e5e7eb",
    },
};

static DARK: ThemeConfig = ThemeConfig {
    name: "Dark",
    value: ThemeName::Dark,
    icon: "🌙",
    description: "Easy on Eyes",
    colors: Palette {
        background: "#0f172a",
        foreground: "#f1f5f9",
        card_bg: "#1e293b",
        card_border: "#334155",
        text_primary: "#f8fafc",
        text_secondary: "#94a3b8",
        accent_from: "#3b82f6",
        accent_to: "#8b5cf6",
        hover: "#334155",
        border: "#334155",
    },
};

static ORANGE: ThemeConfig = ThemeConfig {
    name: "Orange",
    value: ThemeName::Orange,
    icon: "🔥",
    description: "Warm & Vibrant",
    colors: Palette {
        background: "#fff7ed",
        foreground: "#7c2d12",
        card_bg: "#ffedd5",
        card_border: "#fed7aa",
        text_primary: "#9a3412",
        text_secondary: "#c2410c",
        accent_from: "#f97316",
        accent_to: "#ea580c",
        hover: "#fed7aa",
        border: "#fdba74",
    },
};

static PURPLE: ThemeConfig = ThemeConfig {
    name: "Purple",
    value: ThemeName::Purple,
    icon: "💜",
    description: "Royal & Elegant",
    colors: Palette {
        background: "#faf5ff",
        foreground: "#581c87",
        card_bg: "#f3e8ff",
        card_border: "#e9d5ff",
        text_primary: "#6b21a8",
        text_secondary: "#7c3aed",
        accent_from: "#a855f7",
        accent_to: "#7c3aed",
        hover: "#e9d5ff",
        border: "#d8b4fe",
    },
};

static GREEN: ThemeConfig = ThemeConfig {
    name: "Green",
    value: ThemeName::Green,
    icon: "🌿",
    description: "Fresh & Natural",
    colors: Palette {
        background: "#f0fdf4",
        foreground: "#14532d",
        card_bg: "#dcfce7",
        card_border: "#bbf7d0",
        text_primary: "#166534",
        text_secondary: "#15803d",
        accent_from: "#22c55e",
        accent_to: "#16a34a",
        hover: "#bbf7d0",
        border: "#86efac",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_round_trip() {
        for theme in ThemeName::ALL {
            assert_eq!(theme.as_str().parse::<ThemeName>(), Ok(theme));
            assert_eq!(theme.config().value, theme);
        }
        assert!("neon".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_from_stored_falls_back_to_light() {
        assert_eq!(ThemeName::from_stored(None), ThemeName::Light);
        assert_eq!(ThemeName::from_stored(Some("neon")), ThemeName::Light);
        assert_eq!(ThemeName::from_stored(Some("dark")), ThemeName::Dark);
    }

    #[test]
    fn test_css_variables() {
        let dark = ThemeName::Dark.config();
        let vars = dark.css_variables();
        assert_eq!(vars.len(), 10);
        assert_eq!(vars[0], ("--background", "#0f172a"));
        assert!(dark.style_attribute().starts_with("--background: #0f172a;"));
        assert_eq!(dark.meta_color(), "#0f172a");
        assert_eq!(ThemeName::Green.config().meta_color(), "#f0fdf4");
    }
}
