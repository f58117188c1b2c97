//! Client configuration loaded from the environment.
//!
//! Recognised variables: `GEMINI_API_KEY` (required), `GEMINI_BASE_URL`,
//! `GEMINI_MODEL` and `VIBEGUIDE_TIMEOUT_SECS`.

use std::{env, time::Duration};

use crate::{
    error::{Result, VibeError},
    services::{DEFAULT_BASE_URL, DEFAULT_MODEL},
};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const TIMEOUT_VAR: &str = "VIBEGUIDE_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Transport timeout. The client imposes none unless this is set.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                VibeError::Config(format!(
                    "{API_KEY_VAR} environment variable must be set before searching"
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                VibeError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got `{raw}`"))
            })?;
            config.timeout = Some(Duration::from_secs(seconds));
        }

        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        let blank = ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k")])).unwrap();
        assert_eq!(config, ClientConfig::new("k"));
        assert_eq!(config.timeout, None);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn overrides_are_read() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "k"),
            (BASE_URL_VAR, "http://localhost:9000"),
            (MODEL_VAR, "gemini-test"),
            (TIMEOUT_VAR, "45"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "soon")]));
        assert!(matches!(result, Err(VibeError::Config(_))));
    }
}
