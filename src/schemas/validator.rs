use serde_json::Value;

use super::{
    validation::{deserialize_structured, validate_structured_payload},
    CompletionSchema,
};
use crate::error::ServiceError;

/// How a service payload is checked before it is handed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validator {
    /// Typed decoding only; serde rejects missing fields and unknown enum values.
    SerdeFirst,
    /// JSON Schema validation first, then typed decoding.
    #[default]
    Strict,
}

impl Validator {
    /// Validate and deserialize a payload into `T`.
    pub fn decode<T: CompletionSchema>(&self, payload: &Value) -> Result<T, ServiceError> {
        if let Validator::Strict = self {
            validate_structured_payload(T::schema(), payload)?;
        }
        deserialize_structured(payload)
    }

    /// Decode raw response text. Non-JSON text is an invalid payload too.
    pub fn decode_text<T: CompletionSchema>(&self, text: &str) -> Result<T, ServiceError> {
        let payload: Value = serde_json::from_str(text.trim()).map_err(|err| {
            ServiceError::invalid(format!("response is not JSON: {err}"))
        })?;
        self.decode(&payload)
    }
}
