//! Supported UI languages and their preloaded label sets.

pub mod language;
pub mod strings;

pub use language::{Language, LANGUAGE_PREFERENCE_KEY};
pub use strings::{RegionLabels, UiStrings, MOOD_SUGGESTIONS};
