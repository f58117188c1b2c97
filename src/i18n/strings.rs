use serde::Serialize;

use super::language::Language;
use crate::types::query::Region;

/// Quick-pick moods offered under the input box.
pub const MOOD_SUGGESTIONS: [&str; 4] = [
    "Cyberpunk Tokyo",
    "Minimalist Alps",
    "Tuscany Sunset",
    "Lunar Iceland",
];

#[derive(Debug, Serialize)]
pub struct RegionLabels {
    pub any: &'static str,
    pub domestic: &'static str,
    pub continental: &'static str,
    pub international: &'static str,
}

impl RegionLabels {
    pub fn label(&self, region: Region) -> &'static str {
        match region {
            Region::Any => self.any,
            Region::Domestic => self.domestic,
            Region::Continental => self.continental,
            Region::International => self.international,
        }
    }
}

/// Preloaded label set for one language.
#[derive(Debug, Serialize)]
pub struct UiStrings {
    pub hero_title: &'static str,
    pub hero_aesthetic: &'static str,
    pub hero_sub: &'static str,
    pub calibrating: &'static str,
    pub current_palette: &'static str,
    /// Generic message shown for any failed search.
    pub error: &'static str,
    pub footer: &'static str,
    pub placeholder: &'static str,
    pub vibe_btn: &'static str,
    pub match_label: &'static str,
    pub stay_label: &'static str,
    pub food_label: &'static str,
    pub get_there_label: &'static str,
    pub find_label: &'static str,
    pub explore_maps: &'static str,
    pub details_label: &'static str,
    pub explore_btn: &'static str,
    pub budget_label: &'static str,
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub flights_label: &'static str,
    pub travelers_label: &'static str,
    pub adults_label: &'static str,
    pub children_label: &'static str,
    pub pets_label: &'static str,
    pub duration_label: &'static str,
    pub region_label: &'static str,
    pub regions: RegionLabels,
    pub attractions_label: &'static str,
}

impl UiStrings {
    pub fn for_language(language: Language) -> &'static UiStrings {
        match language {
            Language::It => &IT,
            Language::En => &EN,
            Language::Fr => &FR,
            Language::Es => &ES,
            Language::De => &DE,
        }
    }
}

static IT: UiStrings = UiStrings {
    hero_title: "Scopri la tua",
    hero_aesthetic: "Meta Ideale.",
    hero_sub: "Dove vuoi sentirti? Descrivi un mood, un colore o un sogno, e lascia che l'AI tracci il tuo viaggio.",
    calibrating: "Calibrazione Vibe...",
    current_palette: "Palette Attuale",
    error: "Il controllo del vibe è fallito. Prova un altro mood.",
    footer: "Tutti i diritti riservati.",
    placeholder: "Descrivi il tuo mood... (es. 'solitario, nebbioso, architettura nordica')",
    vibe_btn: "Esplora",
    match_label: "Corrispondenza Estetica",
    stay_label: "Dove Soggiornare",
    food_label: "Sapori Tipici",
    get_there_label: "Come arrivare",
    find_label: "Dove trovarlo",
    explore_maps: "Esplora su Maps",
    details_label: "Dettagli Esperienza",
    explore_btn: "Esplora Destinazione",
    budget_label: "Budget (al giorno)",
    min_label: "Min",
    max_label: "Max",
    flights_label: "Opzioni Volo",
    travelers_label: "Viaggiatori",
    adults_label: "Adulti",
    children_label: "Bambini",
    pets_label: "Animali",
    duration_label: "Durata (giorni)",
    region_label: "Regione",
    regions: RegionLabels {
        any: "Ovunque",
        domestic: "Italia",
        continental: "Europa",
        international: "Fuori Europa",
    },
    attractions_label: "Cosa Visitare",
};

static EN: UiStrings = UiStrings {
    hero_title: "Discover Your",
    hero_aesthetic: "Ideal Destination.",
    hero_sub: "Where do you want to feel? Describe a mood, a color, or a dream, and let AI map your journey.",
    calibrating: "Calibrating Vibe...",
    current_palette: "Current Palette",
    error: "The vibe check failed. Try another mood.",
    footer: "All rights reserved.",
    placeholder: "Describe your mood... (e.g. 'lonely, foggy, nordic architecture')",
    vibe_btn: "Explore",
    match_label: "Aesthetic Match",
    stay_label: "Where to Stay",
    food_label: "Typical Flavors",
    get_there_label: "How to get there",
    find_label: "Where to find it",
    explore_maps: "Explore on Maps",
    details_label: "Experience Details",
    explore_btn: "Explore Destination",
    budget_label: "Budget (per day)",
    min_label: "Min",
    max_label: "Max",
    flights_label: "Flight Options",
    travelers_label: "Travelers",
    adults_label: "Adults",
    children_label: "Children",
    pets_label: "Pets",
    duration_label: "Duration (days)",
    region_label: "Region",
    regions: RegionLabels {
        any: "Anywhere",
        domestic: "Italy",
        continental: "Europe",
        international: "Outside Europe",
    },
    attractions_label: "What to Visit",
};

static FR: UiStrings = UiStrings {
    hero_title: "Découvrez Votre",
    hero_aesthetic: "Destination Idéale.",
    hero_sub: "Où voulez-vous vous sentir ? Décrivez une ambiance, une couleur ou un rêve, et laissez l'IA tracer votre voyage.",
    calibrating: "Calibration du Vibe...",
    current_palette: "Palette Actuelle",
    error: "Le contrôle du vibe a échoué. Essayez une autre ambiance.",
    footer: "Tous droits réservés.",
    placeholder: "Décrivez votre ambiance... (ex. 'solitaire, brumeux, architecture nordique')",
    vibe_btn: "Explorer",
    match_label: "Match Esthétique",
    stay_label: "Où Séjourner",
    food_label: "Saveurs Typiques",
    get_there_label: "Comment s'y rendre",
    find_label: "Où le trouver",
    explore_maps: "Explorer sur Maps",
    details_label: "Détails de l'Expérience",
    explore_btn: "Explorer la Destination",
    budget_label: "Budget (par jour)",
    min_label: "Min",
    max_label: "Max",
    flights_label: "Options de Vol",
    travelers_label: "Voyageurs",
    adults_label: "Adultes",
    children_label: "Enfants",
    pets_label: "Animaux",
    duration_label: "Durée (jours)",
    region_label: "Région",
    regions: RegionLabels {
        any: "Partout",
        domestic: "Italie",
        continental: "Europe",
        international: "Hors Europe",
    },
    attractions_label: "À Visiter",
};

static ES: UiStrings = UiStrings {
    hero_title: "Descubre Tu",
    hero_aesthetic: "Destino Ideal.",
    hero_sub: "¿Dónde quieres sentirte? Describe un estado de ánimo, un color o un sueño, y deja que la IA trace tu viaje.",
    calibrating: "Calibrando Vibe...",
    current_palette: "Paleta Actual",
    error: "El control de vibe falló. Prueba otro estado de ánimo.",
    footer: "Todos los derechos reservados.",
    placeholder: "Describe tu estado de ánimo... (ej. 'solitario, brumoso, arquitectura nórdica')",
    vibe_btn: "Explorar",
    match_label: "Coincidencia Estética",
    stay_label: "Dónde Alojarse",
    food_label: "Sabores Típicos",
    get_there_label: "Cómo llegar",
    find_label: "Dónde encontrarlo",
    explore_maps: "Explorar en Maps",
    details_label: "Detalles de la Experiencia",
    explore_btn: "Explorar Destino",
    budget_label: "Presupuesto (por día)",
    min_label: "Mín",
    max_label: "Máx",
    flights_label: "Opciones de Vuelo",
    travelers_label: "Viajeros",
    adults_label: "Adultos",
    children_label: "Niños",
    pets_label: "Mascotas",
    duration_label: "Duración (días)",
    region_label: "Región",
    regions: RegionLabels {
        any: "Cualquier lugar",
        domestic: "Italia",
        continental: "Europa",
        international: "Fuera de Europa",
    },
    attractions_label: "Qué Visitar",
};

static DE: UiStrings = UiStrings {
    hero_title: "Entdecke Deine",
    hero_aesthetic: "Ideales Ziel.",
    hero_sub: "Wo möchtest du dich fühlen? Beschreibe eine Stimmung, eine Farbe oder einen Traum und lass die KI deine Reise planen.",
    calibrating: "Vibe-Kalibrierung...",
    current_palette: "Aktuelle Palette",
    error: "Vibe-Check fehlgeschlagen. Versuche eine andere Stimmung.",
    footer: "Alle Rechte vorbehalten.",
    placeholder: "Beschreibe deine Stimmung... (z.B. 'einsam, neblig, nordische Architektur')",
    vibe_btn: "Erkunden",
    match_label: "Ästhetische Übereinstimmung",
    stay_label: "Unterkunft",
    food_label: "Typische Aromen",
    get_there_label: "Anreise",
    find_label: "Standort",
    explore_maps: "Auf Maps erkunden",
    details_label: "Erlebnisdetails",
    explore_btn: "Ziel erkunden",
    budget_label: "Budget (pro Tag)",
    min_label: "Min",
    max_label: "Max",
    flights_label: "Flugoptionen",
    travelers_label: "Reisende",
    adults_label: "Erwachsene",
    children_label: "Kinder",
    pets_label: "Haustiere",
    duration_label: "Dauer (Tage)",
    region_label: "Region",
    regions: RegionLabels {
        any: "Überall",
        domestic: "Italien",
        continental: "Europa",
        international: "Außerhalb Europas",
    },
    attractions_label: "Sehenswürdigkeiten",
};
