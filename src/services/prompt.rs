use crate::types::{
    BudgetRange, MoodQuery, Travelers, TripPreferences, ATTRACTION_COUNT, DESTINATION_COUNT,
};

/// Budget clause, present only when the query carries a budget.
pub fn budget_clause(budget: &BudgetRange) -> String {
    format!(
        "The estimated total budget for the trip (hotel + food per person per day) must be between {}€ and {}€.",
        budget.min(),
        budget.max()
    )
}

/// Traveler composition clause, present only when the query carries travelers.
pub fn travelers_clause(travelers: &Travelers) -> String {
    format!(
        "The trip is for {} adults, {} children and {} pets. Make sure hotels and flights suit this group and that estimated prices reflect the total for this number of people.",
        travelers.adults(),
        travelers.children(),
        travelers.pets()
    )
}

/// Duration and region clause. The region is named in the query's language.
pub fn preferences_clause(preferences: &TripPreferences, region_label: &str) -> String {
    format!(
        "The trip lasts {} days. The preferred region is: {}. Only suggest places that respect this geographic preference.",
        preferences.days(),
        region_label
    )
}

/// Full instruction sent to the generative service for `query`.
pub fn build_instruction(query: &MoodQuery) -> String {
    let language = query.language();
    let strings = language.strings();

    let mut lines = vec![
        format!("Interpret this travel mood: \"{}\".", query.text()),
        format!(
            "Return a JSON object that captures its aesthetic and suggests exactly {DESTINATION_COUNT} specific places around the world that match this vibe perfectly."
        ),
    ];

    lines.extend(query.budget().map(budget_clause));
    lines.extend(query.travelers().map(travelers_clause));
    lines.extend(
        query
            .preferences()
            .map(|prefs| preferences_clause(prefs, strings.regions.label(prefs.region()))),
    );

    lines.push("For each place, include:".to_string());
    lines.push(
        "1. A recommended hotel with directions on how to get there (public transport or taxi)."
            .to_string(),
    );
    lines.push(
        "2. A typical dish with the best place to eat it and exact details on where that place is."
            .to_string(),
    );
    lines.push(
        "3. Three flight options (ECONOMY, PREMIUM, LUXURY) with airline, estimated price and precise baggage rules (dimensions and weight)."
            .to_string(),
    );
    lines.push(format!(
        "4. A list of {ATTRACTION_COUNT} must-see attractions or points of interest with a short description."
    ));
    lines.push(format!(
        "IMPORTANT: All descriptions, tags and aesthetic reasons must be written in {}.",
        language.display_name().to_uppercase()
    ));

    lines.join("\n")
}
