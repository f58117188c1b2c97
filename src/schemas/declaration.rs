//! Converts a schemars Draft-7 schema into the OpenAPI-style subset accepted as
//! `generationConfig.responseSchema`: references are inlined, type names are
//! upper-cased and keywords the service does not understand are dropped.

use serde_json::{Map, Value};
use tracing::warn;

const DEFINITIONS_PREFIX: &str = "#/definitions/";
const MAX_DEPTH: usize = 32;

/// Keywords copied through unchanged.
const PASSTHROUGH: [&str; 2] = ["description", "enum"];

pub fn to_service_schema(root: &Value) -> Value {
    let definitions = root
        .get("definitions")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    convert(root, &definitions, 0)
}

fn convert(node: &Value, definitions: &Map<String, Value>, depth: usize) -> Value {
    let Some(object) = node.as_object() else {
        return object_fallback();
    };

    if depth > MAX_DEPTH {
        warn!(target: "vibeguide::schema", "schema nesting exceeds {MAX_DEPTH}; truncating");
        return object_fallback();
    }

    if let Some(target) = object.get("$ref").and_then(Value::as_str) {
        let resolved = target
            .strip_prefix(DEFINITIONS_PREFIX)
            .and_then(|name| definitions.get(name));
        let mut converted = match resolved {
            Some(definition) => convert(definition, definitions, depth + 1),
            None => {
                warn!(target: "vibeguide::schema", reference = target, "unresolved schema reference");
                object_fallback()
            }
        };
        overlay_description(&mut converted, object);
        return converted;
    }

    // schemars wraps documented references as `allOf: [{ $ref }]`.
    if let Some([single]) = object.get("allOf").and_then(Value::as_array).map(Vec::as_slice) {
        let mut converted = convert(single, definitions, depth + 1);
        overlay_description(&mut converted, object);
        return converted;
    }

    let mut out = Map::new();

    if let Some((type_name, nullable)) = primary_type(object.get("type")) {
        out.insert("type".to_string(), Value::String(type_name.to_uppercase()));
        if nullable {
            out.insert("nullable".to_string(), Value::Bool(true));
        }
    }

    for key in PASSTHROUGH {
        if let Some(value) = object.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }

    if let Some(properties) = object.get("properties").and_then(Value::as_object) {
        let converted: Map<String, Value> = properties
            .iter()
            .map(|(name, schema)| (name.clone(), convert(schema, definitions, depth + 1)))
            .collect();
        out.insert("properties".to_string(), Value::Object(converted));
        if let Some(required) = object.get("required") {
            out.insert("required".to_string(), required.clone());
        }
    }

    if let Some(items) = object.get("items") {
        out.insert("items".to_string(), convert(items, definitions, depth + 1));
    }

    Value::Object(out)
}

/// First non-null type and whether `null` was allowed alongside it.
fn primary_type(type_value: Option<&Value>) -> Option<(&str, bool)> {
    match type_value? {
        Value::String(name) => Some((name.as_str(), false)),
        Value::Array(names) => {
            let names: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
            let nullable = names.contains(&"null");
            names
                .into_iter()
                .find(|name| *name != "null")
                .map(|name| (name, nullable))
        }
        _ => None,
    }
}

fn overlay_description(converted: &mut Value, source: &Map<String, Value>) {
    if let (Some(description), Some(target)) = (source.get("description"), converted.as_object_mut())
    {
        target.insert("description".to_string(), description.clone());
    }
}

fn object_fallback() -> Value {
    serde_json::json!({ "type": "OBJECT" })
}
