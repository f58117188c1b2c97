//! Response schemas: derivation, local validation and the declaration sent to
//! the generative service.

pub mod declaration;
pub mod schema;
pub mod validation;
pub mod validator;

pub use declaration::to_service_schema;
pub use schema::{apply_doc_comments, schema_type_name, CompletionSchema, SchemaHandle};
pub use validation::{deserialize_structured, validate_structured_payload};
pub use validator::Validator;
