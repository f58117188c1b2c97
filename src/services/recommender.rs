use async_trait::async_trait;
use tracing::{info, warn};

use super::{
    gemini_client::{GeminiClient, GenerateContentRequest},
    prompt::build_instruction,
};
use crate::{
    config::ClientConfig,
    error::ServiceError,
    schemas::{CompletionSchema, Validator},
    types::{MoodQuery, Recommendation},
};

/// Anything that can turn a mood query into a recommendation.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendation(&self, query: &MoodQuery)
        -> Result<Recommendation, ServiceError>;
}

/// Builds the instruction, declares the output schema, makes one service call
/// and validates what comes back.
#[derive(Clone, Debug)]
pub struct RecommendationClient {
    gemini: GeminiClient,
    validator: Validator,
}

impl RecommendationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            gemini: GeminiClient::new(api_key),
            validator: Validator::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut gemini = GeminiClient::new(config.api_key.clone());
        gemini.set_base_url(config.base_url.clone());
        gemini.set_model(config.model.clone());
        gemini.set_timeout(config.timeout);
        Self {
            gemini,
            validator: Validator::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.gemini.set_model(model);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.gemini.set_timeout(Some(timeout));
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// The exact body that will be sent for `query`.
    pub fn request_body(&self, query: &MoodQuery) -> serde_json::Value {
        GenerateContentRequest::new(build_instruction(query))
            .with_json_schema(Recommendation::schema().service_schema().clone())
            .into_value()
    }

    pub async fn fetch_recommendation(
        &self,
        query: &MoodQuery,
    ) -> Result<Recommendation, ServiceError> {
        info!(
            target: "vibeguide::service",
            model = self.gemini.model(),
            language = %query.language(),
            "requesting recommendation"
        );

        let body = self.request_body(query);
        let text = self.gemini.generate_content(&body).await?;

        self.validator
            .decode_text::<Recommendation>(&text)
            .and_then(|recommendation| {
                recommendation.check_invariants()?;
                Ok(recommendation)
            })
            .map_err(|err| {
                warn!(
                    target: "vibeguide::service",
                    detail = err.detail().unwrap_or_default(),
                    "discarding invalid recommendation"
                );
                err
            })
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn fetch_recommendation(
        &self,
        query: &MoodQuery,
    ) -> Result<Recommendation, ServiceError> {
        RecommendationClient::fetch_recommendation(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn request_body_declares_schema_and_instruction() {
        let client = RecommendationClient::new("key");
        let query = MoodQuery::new("cyberpunk tokyo", Language::Fr).unwrap();
        let body = client.request_body(&query);

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("cyberpunk tokyo"));
        assert!(prompt.contains("FRANÇAIS"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert!(config["responseSchema"]["properties"]["recommended_locations"].is_object());
    }
}
