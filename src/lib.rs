//! vibe-guide: mood-driven travel inspiration.
//!
//! Type a mood and the interface recolors itself as you type. Submit it and a
//! generative service returns five destinations with a hotel, a typical dish,
//! three flight tiers and a handful of attractions each, plus a palette that
//! captures the aesthetic.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vibe_guide::{ClientConfig, Language, MoodQuery, RecommendationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = RecommendationClient::from_config(&config);
//!
//!     let query = MoodQuery::new("lonely, foggy, nordic architecture", Language::En)?;
//!     let recommendation = client.fetch_recommendation(&query).await?;
//!     for place in &recommendation.destinations {
//!         println!("{} ({})", place.name, place.country);
//!     }
//!     Ok(())
//! }
//! ```

extern crate self as vibe_guide;

pub mod config;
pub mod error;
pub mod i18n;
pub mod schemas;
pub mod services;
pub mod session;
pub mod store;
pub mod theme;
pub mod types;

pub use config::ClientConfig;
pub use error::{QueryError, Result, ServiceError, StoreError, VibeError};
pub use i18n::{Language, UiStrings, MOOD_SUGGESTIONS};
pub use schemas::{schema_type_name, CompletionSchema, SchemaHandle, Validator};
pub use services::{RecommendationClient, RecommendationSource};
pub use session::{PendingSearch, Preferences, SearchState, SearchTicket, VibeSession};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{colorize, ColorTheme, HexColor, ThemeSource, ThemeState};
pub use types::{
    BudgetRange, Destination, FlightTier, MoodQuery, Recommendation, Region, TravelerKind,
    Travelers, TripPreferences,
};
pub use vibeguide_macros::completion_schema;

pub use schemas as schema;

#[cfg(feature = "cli")]
pub mod cli;
