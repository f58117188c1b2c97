pub mod query;
pub mod recommendation;

pub use query::{BudgetRange, MoodQuery, Region, TravelerKind, Travelers, TripPreferences};
pub use recommendation::{
    Attraction, Baggage, Destination, FlightOption, FlightTier, FoodPick, HotelPick,
    Recommendation, ATTRACTION_COUNT, DESTINATION_COUNT,
};
