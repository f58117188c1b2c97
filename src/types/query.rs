use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::QueryError, i18n::Language};

pub const BUDGET_MIN_RANGE: (u32, u32) = (10, 200);
pub const BUDGET_MAX_RANGE: (u32, u32) = (100, 2000);
/// Smallest gap kept between budget minimum and maximum while editing.
pub const BUDGET_MIN_GAP: u32 = 20;
pub const MAX_TRIP_DAYS: u32 = 90;

/// Daily budget range in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Result<Self, QueryError> {
        if min >= max {
            return Err(QueryError::InvalidBudget { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Slider edit of the lower bound: kept in range and below `max`.
    pub fn adjust_min(self, value: u32) -> Self {
        let value = value.clamp(BUDGET_MIN_RANGE.0, BUDGET_MIN_RANGE.1);
        Self {
            min: value.min(self.max.saturating_sub(BUDGET_MIN_GAP)),
            max: self.max,
        }
    }

    /// Slider edit of the upper bound: kept in range and above `min`.
    pub fn adjust_max(self, value: u32) -> Self {
        let value = value.clamp(BUDGET_MAX_RANGE.0, BUDGET_MAX_RANGE.1);
        Self {
            min: self.min,
            max: value.max(self.min.saturating_add(BUDGET_MIN_GAP)),
        }
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self { min: 50, max: 500 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travelers {
    adults: u32,
    children: u32,
    pets: u32,
}

impl Travelers {
    pub fn new(adults: u32, children: u32, pets: u32) -> Result<Self, QueryError> {
        if adults == 0 {
            return Err(QueryError::NoAdults);
        }
        Ok(Self {
            adults,
            children,
            pets,
        })
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn pets(&self) -> u32 {
        self.pets
    }

    /// Applies a +/- step to one counter; adults never drop below one.
    pub fn step(self, kind: TravelerKind, delta: i32) -> Self {
        let apply = |value: u32, floor: u32| -> u32 {
            let next = i64::from(value) + i64::from(delta);
            next.max(i64::from(floor)).min(i64::from(u32::MAX)) as u32
        };
        match kind {
            TravelerKind::Adults => Self {
                adults: apply(self.adults, 1),
                ..self
            },
            TravelerKind::Children => Self {
                children: apply(self.children, 0),
                ..self
            },
            TravelerKind::Pets => Self {
                pets: apply(self.pets, 0),
                ..self
            },
        }
    }
}

impl Default for Travelers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            pets: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerKind {
    Adults,
    Children,
    Pets,
}

/// Geographic filter, relative to the home country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Any,
    Domestic,
    Continental,
    International,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Any,
        Region::Domestic,
        Region::Continental,
        Region::International,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::Any => "any",
            Region::Domestic => "domestic",
            Region::Continental => "continental",
            Region::International => "international",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.key() == lowered)
            .ok_or_else(|| {
                format!("unknown region `{s}` (expected any, domestic, continental or international)")
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPreferences {
    days: u32,
    region: Region,
}

impl TripPreferences {
    pub fn new(days: u32, region: Region) -> Result<Self, QueryError> {
        if days == 0 {
            return Err(QueryError::ZeroDays);
        }
        Ok(Self { days, region })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn with_days(self, days: u32) -> Self {
        Self {
            days: days.clamp(1, MAX_TRIP_DAYS),
            ..self
        }
    }

    pub fn with_region(self, region: Region) -> Self {
        Self { region, ..self }
    }
}

impl Default for TripPreferences {
    fn default() -> Self {
        Self {
            days: 7,
            region: Region::Any,
        }
    }
}

/// One search request. Built fresh per search and never mutated after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodQuery {
    text: String,
    language: Language,
    budget: Option<BudgetRange>,
    travelers: Option<Travelers>,
    preferences: Option<TripPreferences>,
}

impl MoodQuery {
    pub fn new(text: impl Into<String>, language: Language) -> Result<Self, QueryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QueryError::EmptyMood);
        }
        Ok(Self {
            text,
            language,
            budget: None,
            travelers: None,
            preferences: None,
        })
    }

    pub fn with_budget(mut self, budget: BudgetRange) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_travelers(mut self, travelers: Travelers) -> Self {
        self.travelers = Some(travelers);
        self
    }

    pub fn with_preferences(mut self, preferences: TripPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn budget(&self) -> Option<&BudgetRange> {
        self.budget.as_ref()
    }

    pub fn travelers(&self) -> Option<&Travelers> {
        self.travelers.as_ref()
    }

    pub fn preferences(&self) -> Option<&TripPreferences> {
        self.preferences.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_mood_is_rejected() {
        assert_eq!(
            MoodQuery::new("   \t", Language::En),
            Err(QueryError::EmptyMood)
        );
        assert!(MoodQuery::new(" misty ", Language::En).is_ok());
    }

    #[test]
    fn guards_reject_degenerate_preferences() {
        assert_eq!(
            BudgetRange::new(500, 500),
            Err(QueryError::InvalidBudget { min: 500, max: 500 })
        );
        assert_eq!(Travelers::new(0, 2, 0), Err(QueryError::NoAdults));
        assert_eq!(TripPreferences::new(0, Region::Any), Err(QueryError::ZeroDays));
    }

    #[test]
    fn budget_edits_keep_a_gap() {
        let budget = BudgetRange::new(50, 120).unwrap();
        assert_eq!(budget.adjust_min(200).min(), 100);
        assert_eq!(budget.adjust_min(0).min(), 10);
        assert_eq!(budget.adjust_max(100).max(), 100);

        let wide = BudgetRange::new(180, 1000).unwrap();
        assert_eq!(wide.adjust_max(100).max(), 200);
        assert_eq!(wide.adjust_max(5000).max(), 2000);
    }

    #[test]
    fn budget_edits_near_u32_max_do_not_overflow() {
        let extreme = BudgetRange::new(u32::MAX - 1, u32::MAX).unwrap();
        let adjusted = extreme.adjust_max(500);
        assert_eq!(adjusted.max(), u32::MAX);
        assert_eq!(adjusted.min(), u32::MAX - 1);
    }

    #[test]
    fn traveler_steps_respect_floors() {
        let travelers = Travelers::default();
        assert_eq!(travelers.step(TravelerKind::Adults, -1).adults(), 1);
        assert_eq!(travelers.step(TravelerKind::Pets, -3).pets(), 0);
        let grown = travelers.step(TravelerKind::Children, 2);
        assert_eq!(grown.children(), 2);
        assert_eq!(grown.adults(), 1);
    }

    #[test]
    fn trip_days_are_clamped() {
        let prefs = TripPreferences::default();
        assert_eq!(prefs.with_days(0).days(), 1);
        assert_eq!(prefs.with_days(365).days(), MAX_TRIP_DAYS);
    }

    #[test]
    fn region_parses_from_keys() {
        assert_eq!("Continental".parse::<Region>(), Ok(Region::Continental));
        assert!("mars".parse::<Region>().is_err());
    }
}
