use std::collections::HashSet;

use crate::{completion_schema, error::ServiceError, theme::ColorTheme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of destinations requested per search.
pub const DESTINATION_COUNT: usize = 5;
/// Number of attractions requested per destination.
pub const ATTRACTION_COUNT: usize = 3;

/// Travel recommendation set returned for one mood query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[completion_schema(name = "Recommendation")]
pub struct Recommendation {
    /// Short descriptive tags for the mood
    pub mood_tags: Vec<String>,
    /// Palette capturing the aesthetic of the mood
    pub color_palette: ColorTheme,
    /// Specific places around the world matching the mood
    #[serde(rename = "recommended_locations")]
    pub destinations: Vec<Destination>,
}

impl Recommendation {
    /// Rules the schema cannot express: destination ids are unique and each
    /// flight tier appears at most once per destination.
    pub fn check_invariants(&self) -> Result<(), ServiceError> {
        let mut ids = HashSet::new();
        for destination in &self.destinations {
            if !ids.insert(destination.id.as_str()) {
                return Err(ServiceError::invalid(format!(
                    "duplicate destination id `{}`",
                    destination.id
                )));
            }

            let mut tiers = HashSet::new();
            for flight in &destination.flights {
                if !tiers.insert(flight.tier) {
                    return Err(ServiceError::invalid(format!(
                        "destination `{}` lists {} more than once",
                        destination.id,
                        flight.tier.as_str()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Destination {
    pub id: String,
    /// Name of the place
    pub name: String,
    /// Country the place belongs to
    pub country: String,
    /// Detailed description of the place
    pub description: String,
    /// Why this place matches the mood
    pub aesthetic_reason: String,
    /// Short query for a high quality travel photo of this place
    #[serde(rename = "image_query")]
    pub image_query_hint: String,
    /// Recommended hotel
    pub hotel: HotelPick,
    /// Typical dish and where to eat it
    pub food: FoodPick,
    /// One flight option per service tier
    pub flights: Vec<FlightOption>,
    /// Must-see attractions or points of interest
    pub attractions: Vec<Attraction>,
}

impl Destination {
    /// Flights in Economy, Premium, Luxury order, whatever order the service used.
    pub fn flights_by_tier(&self) -> Vec<&FlightOption> {
        let mut flights: Vec<&FlightOption> = self.flights.iter().collect();
        flights.sort_by_key(|flight| flight.tier);
        flights
    }

    pub fn flight(&self, tier: FlightTier) -> Option<&FlightOption> {
        self.flights.iter().find(|flight| flight.tier == tier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HotelPick {
    /// Name of the recommended hotel
    pub name: String,
    /// Short description of the hotel
    pub description: String,
    /// How to reach the hotel by public transport or taxi
    #[serde(rename = "how_to_get_there")]
    pub directions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FoodPick {
    /// Name of the typical dish
    pub dish_name: String,
    /// Restaurant or market where to eat it
    #[serde(rename = "place_to_eat")]
    pub venue_name: String,
    /// Description of the dish
    pub description: String,
    /// Exactly where the place is
    pub location_details: String,
}

/// Flight service class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightTier {
    Economy,
    Premium,
    Luxury,
}

impl FlightTier {
    pub const ALL: [FlightTier; 3] = [FlightTier::Economy, FlightTier::Premium, FlightTier::Luxury];

    pub fn as_str(self) -> &'static str {
        match self {
            FlightTier::Economy => "ECONOMY",
            FlightTier::Premium => "PREMIUM",
            FlightTier::Luxury => "LUXURY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlightOption {
    #[serde(rename = "type")]
    pub tier: FlightTier,
    pub airline: String,
    /// Currency-formatted price, kept as text
    pub estimated_price: String,
    pub baggage: Baggage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Baggage {
    /// What is included, e.g. backpack only, cabin bag, checked bag
    #[serde(rename = "included")]
    pub included_description: String,
    /// Maximum dimensions, e.g. 40x20x25 cm
    #[serde(rename = "dimensions")]
    pub max_dimensions: String,
    /// Maximum weight, e.g. 10kg
    #[serde(rename = "weight")]
    pub max_weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Attraction {
    /// Name of the attraction
    pub name: String,
    /// Short description of the attraction
    pub description: String,
    /// Kind of attraction, e.g. museum, park, monument
    #[serde(rename = "type")]
    pub category: String,
}
