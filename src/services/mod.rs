pub mod gemini_client;
pub mod prompt;
pub mod recommender;

pub use gemini_client::{GeminiClient, GenerateContentRequest, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::build_instruction;
pub use recommender::{RecommendationClient, RecommendationSource};
