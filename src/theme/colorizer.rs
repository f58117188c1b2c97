//! Mood Colorizer: maps free text to a theme while the user is still typing.
//!
//! Groups are scanned top to bottom and the first group with a matching trigger
//! wins. Triggers are plain substrings (Italian and English stems), matched
//! against the lower-cased input.

use super::palette::{ColorTheme, HexColor};

#[derive(Debug)]
pub struct MoodGroup {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub primary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
}

impl MoodGroup {
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }

    /// Text token is derived from the background, so dark backgrounds get
    /// light text without per-entry overrides.
    pub fn theme(&self) -> ColorTheme {
        ColorTheme::from_base(
            self.primary.clone(),
            self.accent.clone(),
            self.background.clone(),
        )
    }
}

const fn group(
    name: &'static str,
    triggers: &'static [&'static str],
    primary: &'static str,
    accent: &'static str,
    background: &'static str,
) -> MoodGroup {
    MoodGroup {
        name,
        triggers,
        primary: HexColor::from_static(primary),
        accent: HexColor::from_static(accent),
        background: HexColor::from_static(background),
    }
}

/// Precedence table. Order is authoritative for overlapping triggers.
pub static MOOD_GROUPS: &[MoodGroup] = &[
    group(
        "joy",
        &["gioia", "felic", "joy", "happy"],
        "#FBBF24",
        "#F59E0B",
        "#FFFBEB",
    ),
    group(
        "sadness",
        &["tristez", "malincon", "sad", "blue"],
        "#3B82F6",
        "#2563EB",
        "#EFF6FF",
    ),
    group(
        "envy",
        &["disgust", "invidia", "envy", "verde"],
        "#10B981",
        "#059669",
        "#ECFDF5",
    ),
    group(
        "anger",
        &["rabbia", "adrenalin", "anger", "rage", "rosso"],
        "#EF4444",
        "#DC2626",
        "#FEF2F2",
    ),
    group(
        "boredom",
        &["noia", "stanc", "bored", "tired", "viola"],
        "#8B5CF6",
        "#7C3AED",
        "#F5F3FF",
    ),
    group(
        "energy",
        &["energi", "creativ", "energy", "arancione"],
        "#F97316",
        "#EA580C",
        "#FFF7ED",
    ),
    group(
        "love",
        &["amore", "dolcez", "love", "rosa"],
        "#EC4899",
        "#DB2777",
        "#FDF2F8",
    ),
    group(
        "calm",
        &["calm", "pace", "peace", "azzurro"],
        "#06B6D4",
        "#0891B2",
        "#ECFEFF",
    ),
    group("neon", &["neon", "night"], "#FF00FF", "#00FFFF", "#0F172A"),
    group(
        "tech",
        &["futur", "tecnolog", "tech", "cibernetico"],
        "#00D1FF",
        "#0075FF",
        "#F8FAFC",
    ),
    group(
        "electric",
        &["elettrico", "vibrante", "zap"],
        "#FFFF00",
        "#FF00FF",
        "#111111",
    ),
    group(
        "urban",
        &["urbano", "città", "city"],
        "#64748B",
        "#334155",
        "#F1F5F9",
    ),
];

/// First group in precedence order whose triggers appear in `text`.
pub fn matching_group(text: &str) -> Option<&'static MoodGroup> {
    let lowered = text.to_lowercase();
    MOOD_GROUPS.iter().find(|group| group.matches(&lowered))
}

/// Heuristic theme for `text`, or `None` when no group matches.
pub fn colorize(text: &str) -> Option<ColorTheme> {
    matching_group(text).map(MoodGroup::theme)
}
