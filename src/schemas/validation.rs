use std::any::{type_name, TypeId};

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::debug;

use super::{CompletionSchema, SchemaHandle};
use crate::error::ServiceError;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a structured payload against a schema
pub fn validate_structured_payload(
    schema: &SchemaHandle,
    payload: &Value,
) -> Result<(), ServiceError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            ServiceError::invalid(format!(
                "failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details: Vec<String> = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx == MAX_SCHEMA_ERRORS {
                truncated = true;
                break;
            }
            let path = error.instance_path.to_string();
            let path = if path.is_empty() { "<root>".to_string() } else { path };
            details.push(format!("{path}: {error}"));
        }

        let mut detail = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };
        if truncated {
            detail.push_str("; additional errors truncated");
        }

        debug!(
            target: "vibeguide::schema",
            schema = schema.schema_name(),
            error = %detail,
            payload = %payload
        );

        return Err(ServiceError::invalid(format!(
            "payload does not match `{}` schema: {}",
            schema.schema_name(),
            detail
        )));
    }

    Ok(())
}

/// Decode a validated payload into its response type, reporting the JSON path
/// of the first mismatch.
pub fn deserialize_structured<T>(payload: &Value) -> Result<T, ServiceError>
where
    T: CompletionSchema,
{
    let schema = T::schema();
    ensure_schema_matches::<T>(schema)?;

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        ServiceError::invalid(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err.inner()
        ))
    })
}

fn ensure_schema_matches<T: 'static>(schema: &SchemaHandle) -> Result<(), ServiceError> {
    if schema.type_id() != TypeId::of::<T>() {
        return Err(ServiceError::invalid(format!(
            "schema `{}` does not match target type `{}`",
            schema.schema_name(),
            type_name::<T>(),
        )));
    }
    Ok(())
}
