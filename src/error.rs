use thiserror::Error;

/// Failure talking to the generative service.
///
/// The end user only ever sees one generic localized message for any of these;
/// the variants exist for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Payload was not JSON, did not match the declared schema, or carried an
    /// out-of-range enum value.
    #[error("invalid recommendation data")]
    InvalidRecommendation { detail: String },
}

impl ServiceError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        ServiceError::InvalidRecommendation {
            detail: detail.into(),
        }
    }

    /// Diagnostic detail that is never shown in the UI.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::InvalidRecommendation { detail } => Some(detail),
            _ => None,
        }
    }
}

/// Input guards checked before a search is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("mood text must not be empty")]
    EmptyMood,

    #[error("budget minimum {min} must be lower than maximum {max}")]
    InvalidBudget { min: u32, max: u32 },

    #[error("at least one adult traveler is required")]
    NoAdults,

    #[error("trip must last at least one day")]
    ZeroDays,
}

/// Persisted preference failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum VibeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, VibeError>;

impl VibeError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            VibeError::Config(_) => "CONFIG_ERROR",
            VibeError::Service(ServiceError::Transport(_)) => "TRANSPORT_ERROR",
            VibeError::Service(ServiceError::Status { .. }) => "SERVICE_STATUS_ERROR",
            VibeError::Service(ServiceError::InvalidRecommendation { .. }) => {
                "INVALID_RECOMMENDATION"
            }
            VibeError::Query(_) => "INVALID_QUERY",
            VibeError::Store(_) => "STORE_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_recommendation_hides_detail_in_display() {
        let err = ServiceError::invalid("missing field `hotel` at recommended_locations[0]");
        assert_eq!(err.to_string(), "invalid recommendation data");
        assert_eq!(
            err.detail(),
            Some("missing field `hotel` at recommended_locations[0]")
        );
    }

    #[test]
    fn payload_carries_code_and_message() {
        let err = VibeError::from(ServiceError::Status {
            status: 503,
            message: "overloaded".to_string(),
        });
        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "SERVICE_STATUS_ERROR");
        assert!(payload["error"]["message"]
            .as_str()
            .unwrap()
            .contains("503"));
    }

    #[test]
    fn query_errors_are_wrapped() {
        let err: VibeError = QueryError::EmptyMood.into();
        assert_eq!(err.error_code(), "INVALID_QUERY");
    }
}
