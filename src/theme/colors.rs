//! Color constants shared by the stylesheet and inline SVG.
//!
//! Mirrors the custom properties at the top of `GLOBAL_STYLES`; SVG
//! presentation attributes cannot read CSS variables in every webview.

// === AMBER (Titles, Icons, Chart data) ===
pub const AMBER_400: &str = "#fbbf24";
pub const AMBER_500: &str = "#f59e0b";

// === SLATE (Surfaces, Chart grid) ===
pub const SLATE_400: &str = "#94a3b8";
pub const SLATE_700: &str = "#334155";
