use serde::Serialize;

use super::{colorizer::colorize, palette::ColorTheme};

/// Where the active palette came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSource {
    Default,
    Heuristic,
    Service,
}

/// The single theme value owned by the session and passed down to rendering.
///
/// Every transition replaces all four tokens at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeState {
    current: ColorTheme,
    source: ThemeSource,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            current: ColorTheme::default(),
            source: ThemeSource::Default,
        }
    }

    pub fn current(&self) -> &ColorTheme {
        &self.current
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Live update while typing. Unmatched text leaves the theme untouched.
    pub fn apply_mood(&mut self, text: &str) -> bool {
        match colorize(text) {
            Some(theme) => {
                self.current = theme;
                self.source = ThemeSource::Heuristic;
                true
            }
            None => false,
        }
    }

    /// Service palette from a successful search; supersedes any heuristic one.
    pub fn apply_service_palette(&mut self, palette: &ColorTheme) {
        self.current = palette.clone();
        self.source = ThemeSource::Service;
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
