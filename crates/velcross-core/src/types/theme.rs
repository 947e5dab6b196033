//! Per-character accent themes.
//!
//! A closed set of variants so that an invalid theme is a compile error in
//! the catalogue rather than a silently unstyled card.

use std::fmt;

use serde::Serialize;

/// Accent colour family for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Rose,
    Indigo,
    #[default]
    Amber,
    Emerald,
    Violet,
    Sky,
    Crimson,
    Slate,
}

/// Concrete colours for a theme, lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Role label and trait text
    pub text: &'static str,
    /// Accent bar under the card portrait
    pub accent: &'static str,
    /// Badge and chip borders
    pub border: &'static str,
    /// Badge fill and banner gradient end
    pub deep: &'static str,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 8] = [
        ColorTheme::Rose,
        ColorTheme::Indigo,
        ColorTheme::Amber,
        ColorTheme::Emerald,
        ColorTheme::Violet,
        ColorTheme::Sky,
        ColorTheme::Crimson,
        ColorTheme::Slate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Rose => "rose",
            ColorTheme::Indigo => "indigo",
            ColorTheme::Amber => "amber",
            ColorTheme::Emerald => "emerald",
            ColorTheme::Violet => "violet",
            ColorTheme::Sky => "sky",
            ColorTheme::Crimson => "crimson",
            ColorTheme::Slate => "slate",
        }
    }

    pub fn palette(&self) -> ThemePalette {
        let (text, accent, border, deep) = match self {
            ColorTheme::Rose => ("#fb7185", "#f43f5e", "#881337", "#4c0519"),
            ColorTheme::Indigo => ("#818cf8", "#6366f1", "#312e81", "#1e1b4b"),
            ColorTheme::Amber => ("#fbbf24", "#f59e0b", "#78350f", "#451a03"),
            ColorTheme::Emerald => ("#34d399", "#10b981", "#064e3b", "#022c22"),
            ColorTheme::Violet => ("#a78bfa", "#8b5cf6", "#4c1d95", "#2e1065"),
            ColorTheme::Sky => ("#38bdf8", "#0ea5e9", "#0c4a6e", "#082f49"),
            ColorTheme::Crimson => ("#f87171", "#ef4444", "#7f1d1d", "#450a0a"),
            ColorTheme::Slate => ("#94a3b8", "#64748b", "#334155", "#0f172a"),
        };
        ThemePalette {
            text,
            accent,
            border,
            deep,
        }
    }

    /// Inline CSS custom properties consumed by the themed classes.
    pub fn css_vars(&self) -> String {
        let p = self.palette();
        format!(
            "--theme-text: {}; --theme-accent: {}; --theme-border: {}; --theme-deep: {};",
            p.text, p.accent, p.border, p.deep
        )
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct_and_displayed() {
        let names: std::collections::HashSet<_> =
            ColorTheme::ALL.iter().map(|theme| theme.name()).collect();
        assert_eq!(names.len(), ColorTheme::ALL.len());
        assert_eq!(ColorTheme::Rose.to_string(), "rose");
    }

    #[test]
    fn css_vars_carry_the_palette() {
        let vars = ColorTheme::Indigo.css_vars();
        assert!(vars.contains("--theme-text: #818cf8;"));
        assert!(vars.contains("--theme-deep: #1e1b4b;"));
    }

    #[test]
    fn default_theme_is_amber() {
        assert_eq!(ColorTheme::default(), ColorTheme::Amber);
    }
}
