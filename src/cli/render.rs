//! Plain-text rendering of session output.

use std::fmt::Write;

use crate::{
    i18n::{UiStrings, MOOD_SUGGESTIONS},
    theme::{ColorTheme, ThemeSource},
    types::{Destination, Recommendation},
};

pub fn palette(theme: &ColorTheme, source: ThemeSource, strings: &UiStrings) -> String {
    let mut out = String::new();
    let origin = match source {
        ThemeSource::Default => "default",
        ThemeSource::Heuristic => "mood",
        ThemeSource::Service => "service",
    };
    let _ = writeln!(out, "{} ({origin})", strings.current_palette);
    let _ = writeln!(out, "  primary  {}", theme.primary);
    let _ = writeln!(out, "  accent   {}", theme.accent);
    let _ = writeln!(out, "  bg       {}", theme.background);
    let _ = writeln!(out, "  text     {}", theme.text);
    out
}

pub fn suggestions(strings: &UiStrings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", strings.placeholder);
    for (index, mood) in MOOD_SUGGESTIONS.iter().enumerate() {
        let _ = writeln!(out, "  [{index}] {mood}");
    }
    out
}

pub fn recommendation(rec: &Recommendation, strings: &UiStrings) -> String {
    let mut out = String::new();
    if !rec.mood_tags.is_empty() {
        let tags: Vec<String> = rec.mood_tags.iter().map(|tag| format!("#{tag}")).collect();
        let _ = writeln!(out, "{}\n", tags.join(" "));
    }

    for (position, place) in rec.destinations.iter().enumerate() {
        destination(&mut out, position + 1, place, strings);
    }
    out
}

fn destination(out: &mut String, position: usize, place: &Destination, strings: &UiStrings) {
    let _ = writeln!(out, "{position:02}. {} ({})", place.name, place.country);
    let _ = writeln!(out, "    {}", place.description);
    let _ = writeln!(out, "    {}: {}", strings.match_label, place.aesthetic_reason);

    let _ = writeln!(out, "  {}", strings.stay_label);
    let _ = writeln!(out, "    {} - {}", place.hotel.name, place.hotel.description);
    let _ = writeln!(out, "    {}: {}", strings.get_there_label, place.hotel.directions);

    let _ = writeln!(out, "  {}", strings.food_label);
    let _ = writeln!(out, "    {} - {}", place.food.dish_name, place.food.description);
    let _ = writeln!(
        out,
        "    {}: {}, {}",
        strings.find_label, place.food.venue_name, place.food.location_details
    );

    let _ = writeln!(out, "  {}", strings.flights_label);
    for flight in place.flights_by_tier() {
        let _ = writeln!(
            out,
            "    {:<8} {} {} | {}, {}, {}",
            flight.tier.as_str(),
            flight.airline,
            flight.estimated_price,
            flight.baggage.included_description,
            flight.baggage.max_dimensions,
            flight.baggage.max_weight
        );
    }

    if !place.attractions.is_empty() {
        let _ = writeln!(out, "  {}", strings.attractions_label);
        for attraction in &place.attractions {
            let _ = writeln!(
                out,
                "    {} [{}] {}",
                attraction.name, attraction.category, attraction.description
            );
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{i18n::Language, theme::colorize, types::recommendation::fixtures};

    #[test]
    fn recommendation_uses_localized_labels_and_tier_order() {
        let rec: Recommendation = serde_json::from_value(fixtures::recommendation()).unwrap();
        let text = recommendation(&rec, Language::En.strings());

        assert!(text.contains("Where to Stay"));
        assert!(text.contains("Flight Options"));
        assert!(text.starts_with('#'));

        let economy = text.find("ECONOMY").unwrap();
        let premium = text.find("PREMIUM").unwrap();
        let luxury = text.find("LUXURY").unwrap();
        assert!(economy < premium && premium < luxury);
        assert!(text.contains("05. "));
    }

    #[test]
    fn palette_lists_all_tokens() {
        let theme = colorize("neon nights").unwrap();
        let text = palette(&theme, ThemeSource::Heuristic, Language::It.strings());
        assert!(text.starts_with("Palette Attuale (mood)"));
        assert!(text.contains("#FF00FF"));
        assert!(text.contains("#0F172A"));
    }

    #[test]
    fn suggestions_are_indexed() {
        let text = suggestions(Language::En.strings());
        assert!(text.contains("[0] Cyberpunk Tokyo"));
        assert!(text.contains("[3] Lunar Iceland"));
    }
}
