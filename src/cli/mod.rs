pub mod render;

use std::{env, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{error, info, warn};

use crate::{
    config::{ClientConfig, API_KEY_VAR, BASE_URL_VAR, MODEL_VAR},
    i18n::Language,
    session::{SearchState, VibeSession},
    store::{load_language, FilePreferenceStore},
    theme::ThemeState,
    types::{Region, Travelers},
    RecommendationClient,
};

fn command() -> Command {
    Command::new("vibe-guide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Describe a mood, get five places to feel it")
        .arg(
            Arg::new("mood")
                .help("Free-text mood, e.g. \"lonely, foggy, nordic architecture\"")
                .index(1)
                .required_unless_present("suggestions"),
        )
        .arg(
            Arg::new("lang")
                .short('l')
                .long("lang")
                .value_name("CODE")
                .help("Interface and output language (it, en, fr, es, de); remembered for next time")
                .value_parser(|raw: &str| raw.parse::<Language>()),
        )
        .arg(
            Arg::new("budget-min")
                .long("budget-min")
                .value_name("EUR")
                .help("Minimum daily budget per person (10-200)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("budget-max")
                .long("budget-max")
                .value_name("EUR")
                .help("Maximum daily budget per person (100-2000)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("adults")
                .long("adults")
                .value_name("COUNT")
                .default_value("1")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("children")
                .long("children")
                .value_name("COUNT")
                .default_value("0")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("pets")
                .long("pets")
                .value_name("COUNT")
                .default_value("0")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days (1-90)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .value_name("REGION")
                .help("any, domestic, continental or international")
                .value_parser(|raw: &str| raw.parse::<Region>()),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the recommendation as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("palette")
                .long("palette")
                .help("Only print the palette the mood text maps to; no request is made")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("suggestions")
                .long("suggestions")
                .help("List the quick-pick moods")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Gemini model (or set GEMINI_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GEMINI_API_KEY)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Service base URL (or set GEMINI_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Transport timeout in seconds; none by default")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("prefs-file")
                .long("prefs-file")
                .value_name("PATH")
                .help("Preference file location")
                .value_parser(value_parser!(PathBuf)),
        )
}

/// CLI entry point for the vibe-guide tool
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();

    let store = match matches.get_one::<PathBuf>("prefs-file") {
        Some(path) => FilePreferenceStore::new(path),
        None => FilePreferenceStore::open_default().context("cannot locate preference file")?,
    };

    let language = matches
        .get_one::<Language>("lang")
        .copied()
        .unwrap_or_else(|| load_language(&store));
    let strings = language.strings();

    if matches.get_flag("suggestions") {
        print!("{}", render::suggestions(strings));
        return Ok(());
    }

    let mood = matches
        .get_one::<String>("mood")
        .ok_or_else(|| anyhow!("a mood is required"))?;

    if matches.get_flag("palette") {
        let mut theme = ThemeState::new();
        theme.apply_mood(mood);
        print!("{}", render::palette(theme.current(), theme.source(), strings));
        return Ok(());
    }

    let config = resolve_config(&matches)?;
    info!("Using model: {}", config.model);
    info!("Base URL: {}", config.base_url);

    let mut session = VibeSession::new(RecommendationClient::from_config(&config), store);
    if let Some(language) = matches.get_one::<Language>("lang") {
        if let Err(err) = session.set_language(*language) {
            warn!("Language preference not saved: {}", err);
        }
    }
    apply_preferences(&mut session, &matches)?;

    session.change_mood(mood);
    println!("{}", strings.calibrating);

    match session.search(mood).await? {
        SearchState::Success => {
            let recommendation = session
                .recommendation()
                .ok_or_else(|| anyhow!("search succeeded without a recommendation"))?;
            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(recommendation)?);
            } else {
                print!("{}", render::recommendation(recommendation, strings));
                let theme = session.theme();
                print!("{}", render::palette(theme.current(), theme.source(), strings));
            }
            Ok(())
        }
        _ => {
            if let Some(cause) = session.last_failure() {
                error!("Search failed: {}", cause);
            }
            let message = session.error_message().unwrap_or(strings.error);
            Err(anyhow!(message))
        }
    }
}

/// Flags win over the environment.
fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ClientConfig> {
    let flag_for = |key: &str| -> Option<String> {
        let name = match key {
            API_KEY_VAR => "api-key",
            BASE_URL_VAR => "base-url",
            MODEL_VAR => "model",
            _ => return None,
        };
        matches.get_one::<String>(name).cloned()
    };

    let mut config = ClientConfig::from_lookup(|key| flag_for(key).or_else(|| env::var(key).ok()))?;
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*seconds));
    }
    Ok(config)
}

fn apply_preferences<S, P>(
    session: &mut VibeSession<S, P>,
    matches: &ArgMatches,
) -> anyhow::Result<()>
where
    S: crate::RecommendationSource,
    P: crate::PreferenceStore,
{
    // max first, so a raised minimum is clamped against the new maximum
    if let Some(max) = matches.get_one::<u32>("budget-max") {
        session.set_budget_max(*max);
    }
    if let Some(min) = matches.get_one::<u32>("budget-min") {
        session.set_budget_min(*min);
    }

    let count = |name: &str| matches.get_one::<u32>(name).copied().unwrap_or_default();
    session.set_travelers(Travelers::new(
        count("adults"),
        count("children"),
        count("pets"),
    )?);

    if let Some(days) = matches.get_one::<u32>("days") {
        session.set_days(*days);
    }
    if let Some(region) = matches.get_one::<Region>("region") {
        session.set_region(*region);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_trip_flags() {
        let matches = command()
            .try_get_matches_from([
                "vibe-guide",
                "foggy nordic",
                "--lang",
                "de",
                "--region",
                "continental",
                "--days",
                "10",
                "--adults",
                "2",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<Language>("lang"), Some(&Language::De));
        assert_eq!(matches.get_one::<Region>("region"), Some(&Region::Continental));
        assert_eq!(matches.get_one::<u32>("days"), Some(&10));
        assert_eq!(matches.get_one::<u32>("adults"), Some(&2));
        assert_eq!(matches.get_one::<u32>("pets"), Some(&0));
    }

    #[test]
    fn mood_is_optional_only_for_suggestions() {
        assert!(command().try_get_matches_from(["vibe-guide"]).is_err());
        assert!(command()
            .try_get_matches_from(["vibe-guide", "--suggestions"])
            .is_ok());
        assert!(command()
            .try_get_matches_from(["vibe-guide", "x", "--lang", "pt"])
            .is_err());
    }
}
