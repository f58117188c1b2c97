//! Caller-side state for one user: language, trip preferences, live theme and
//! the outcome of the latest search.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::{QueryError, ServiceError, StoreError},
    i18n::{Language, UiStrings, MOOD_SUGGESTIONS},
    services::RecommendationSource,
    store::{load_language, save_language, PreferenceStore},
    theme::ThemeState,
    types::{
        BudgetRange, MoodQuery, Recommendation, Region, TravelerKind, Travelers, TripPreferences,
    },
};

/// Budget, travelers and trip shape sent along with every search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub budget: BudgetRange,
    pub travelers: Travelers,
    pub trip: TripPreferences,
}

impl Preferences {
    pub fn query(&self, text: &str, language: Language) -> Result<MoodQuery, QueryError> {
        Ok(MoodQuery::new(text, language)?
            .with_budget(self.budget)
            .with_travelers(self.travelers)
            .with_preferences(self.trip))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Identifies one dispatched search. Only the most recent ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

/// A search that has been started but not yet completed.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub query: MoodQuery,
}

pub struct VibeSession<S, P> {
    source: S,
    store: P,
    language: Language,
    preferences: Preferences,
    theme: ThemeState,
    state: SearchState,
    recommendation: Option<Recommendation>,
    last_failure: Option<ServiceError>,
    issued: u64,
    in_flight: Option<u64>,
}

impl<S, P> VibeSession<S, P>
where
    S: RecommendationSource,
    P: PreferenceStore,
{
    /// Restores the persisted language; everything else starts from defaults.
    pub fn new(source: S, store: P) -> Self {
        let language = load_language(&store);
        debug!(target: "vibeguide::session", %language, "session started");
        Self {
            source,
            store,
            language,
            preferences: Preferences::default(),
            theme: ThemeState::new(),
            state: SearchState::Idle,
            recommendation: None,
            last_failure: None,
            issued: 0,
            in_flight: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static UiStrings {
        self.language.strings()
    }

    /// Switch language and persist the choice.
    ///
    /// The switch takes effect even when persisting fails; the error is returned
    /// so the caller can report it.
    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.language = language;
        save_language(&self.store, language).map_err(|err| {
            warn!(target: "vibeguide::store", error = %err, "language preference not saved");
            err
        })
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_budget_min(&mut self, value: u32) {
        self.preferences.budget = self.preferences.budget.adjust_min(value);
    }

    pub fn set_budget_max(&mut self, value: u32) {
        self.preferences.budget = self.preferences.budget.adjust_max(value);
    }

    pub fn step_travelers(&mut self, kind: TravelerKind, delta: i32) {
        self.preferences.travelers = self.preferences.travelers.step(kind, delta);
    }

    pub fn set_travelers(&mut self, travelers: Travelers) {
        self.preferences.travelers = travelers;
    }

    pub fn set_days(&mut self, days: u32) {
        self.preferences.trip = self.preferences.trip.with_days(days);
    }

    pub fn set_region(&mut self, region: Region) {
        self.preferences.trip = self.preferences.trip.with_region(region);
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Live colorizer hook for every edit of the mood text.
    pub fn change_mood(&mut self, text: &str) -> bool {
        self.theme.apply_mood(text)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Latest successful recommendation. Survives later failures.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Localized generic message while the last search is failed.
    pub fn error_message(&self) -> Option<&'static str> {
        (self.state == SearchState::Failed).then(|| self.strings().error)
    }

    /// Diagnostic cause of the last failure. Never shown to the user.
    pub fn last_failure(&self) -> Option<&ServiceError> {
        self.last_failure.as_ref()
    }

    /// Validate input, enter `Loading` and hand out the query to run.
    ///
    /// Rejected input leaves the session unchanged.
    pub fn begin_search(&mut self, text: &str) -> Result<PendingSearch, QueryError> {
        let query = self.preferences.query(text, self.language)?;

        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.state = SearchState::Loading;
        self.last_failure = None;

        info!(target: "vibeguide::session", ticket = self.issued, mood = query.text(), "search started");
        Ok(PendingSearch {
            ticket: SearchTicket(self.issued),
            query,
        })
    }

    /// Apply the outcome of a search. Returns false when the ticket was
    /// superseded or already completed, in which case nothing changes.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Recommendation, ServiceError>,
    ) -> bool {
        if self.in_flight != Some(ticket.0) {
            debug!(target: "vibeguide::session", ticket = ticket.0, "ignoring stale search result");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(recommendation) => {
                self.theme.apply_service_palette(&recommendation.color_palette);
                self.recommendation = Some(recommendation);
                self.state = SearchState::Success;
            }
            Err(err) => {
                warn!(target: "vibeguide::session", error = %err, detail = err.detail().unwrap_or_default(), "search failed");
                self.last_failure = Some(err);
                self.state = SearchState::Failed;
            }
        }
        true
    }

    /// Run one search end to end against the configured source.
    pub async fn search(&mut self, text: &str) -> Result<SearchState, QueryError> {
        let pending = self.begin_search(text)?;
        let result = self.source.fetch_recommendation(&pending.query).await;
        self.complete_search(pending.ticket, result);
        Ok(self.state)
    }

    /// Search with one of the quick-pick moods. `None` for an unknown index.
    pub async fn choose_suggestion(&mut self, index: usize) -> Option<SearchState> {
        let text = *MOOD_SUGGESTIONS.get(index)?;
        self.change_mood(text);
        self.search(text).await.ok()
    }
}
