#![allow(dead_code)]

use serde_json::{json, Value};

pub const MODEL: &str = "gemini-test";
pub const API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

pub fn destination(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "country": "Iceland",
        "description": "Black sand and basalt columns.",
        "aesthetic_reason": "A landscape that looks like the moon.",
        "image_query": "reynisfjara black sand beach",
        "hotel": {
            "name": "Hotel Vik",
            "description": "Small hotel facing the cliffs.",
            "how_to_get_there": "Strætó bus 51 from Reykjavik, then a short taxi."
        },
        "food": {
            "dish_name": "Kjötsúpa",
            "place_to_eat": "Sudur Vik",
            "description": "Lamb and root vegetable soup.",
            "location_details": "Sudurvikurvegur 1, Vik."
        },
        "flights": [
            {
                "type": "ECONOMY",
                "airline": "PLAY",
                "estimated_price": "€220",
                "baggage": { "included": "Backpack only", "dimensions": "42x32x25 cm", "weight": "10kg" }
            },
            {
                "type": "PREMIUM",
                "airline": "Icelandair",
                "estimated_price": "€540",
                "baggage": { "included": "Cabin and checked bag", "dimensions": "55x40x20 cm", "weight": "23kg" }
            },
            {
                "type": "LUXURY",
                "airline": "Icelandair Saga",
                "estimated_price": "€1,300",
                "baggage": { "included": "Two checked bags", "dimensions": "158 cm", "weight": "32kg" }
            }
        ],
        "attractions": [
            { "name": "Reynisfjara", "description": "Black sand beach.", "type": "Beach" },
            { "name": "Dyrhólaey", "description": "Rock arch.", "type": "Viewpoint" },
            { "name": "Sólheimajökull", "description": "Glacier tongue.", "type": "Glacier" }
        ]
    })
}

pub fn recommendation() -> Value {
    let names = ["Vik", "Lanzarote", "Cappadocia", "Atacama", "Wadi Rum"];
    json!({
        "mood_tags": ["lunar", "stark", "quiet"],
        "color_palette": {
            "primary": "#1E293B",
            "accent": "#94A3B8",
            "bg": "#0B1120",
            "text": "#F8FAFC"
        },
        "recommended_locations": names
            .iter()
            .enumerate()
            .map(|(idx, name)| destination(&format!("loc-{idx}"), name))
            .collect::<Vec<_>>()
    })
}

/// Wraps `text` the way `generateContent` returns it.
pub fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
