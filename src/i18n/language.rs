use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::strings::UiStrings;

/// Key under which the selected UI language code is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "vibeguide-lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
    Fr,
    Es,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::It,
        Language::En,
        Language::Fr,
        Language::Es,
        Language::De,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
        }
    }

    /// Human-readable name, also used to tell the service which language to write in.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::It => "Italiano",
            Language::En => "English",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::De => "Deutsch",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::It => "🇮🇹",
            Language::En => "🇺🇸",
            Language::Fr => "🇫🇷",
            Language::Es => "🇪🇸",
            Language::De => "🇩🇪",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code.trim())
    }

    /// Restores a stored code, falling back to the default for absent or unknown values.
    pub fn from_stored(code: Option<&str>) -> Self {
        code.and_then(Language::from_code).unwrap_or_default()
    }

    pub fn strings(self) -> &'static UiStrings {
        UiStrings::for_language(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(&s.to_lowercase()).ok_or_else(|| {
            let known: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
            format!("unsupported language `{s}` (expected one of {})", known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn stored_value_falls_back_to_italian() {
        assert_eq!(Language::from_stored(None), Language::It);
        assert_eq!(Language::from_stored(Some("klingon")), Language::It);
        assert_eq!(Language::from_stored(Some("de")), Language::De);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert!("xx".parse::<Language>().is_err());
    }
}
