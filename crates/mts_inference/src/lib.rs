use std::fmt;
use std::sync::Arc;

use mts_core::{SummarizationPipeline, TranslationPipeline};
use mts_core::{DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TRANSLATION_MODEL};

pub mod adapters;
pub mod models;
pub mod test_utils;

pub use models::create_pipelines;

#[derive(Clone)]
pub struct InferenceConfig {
    /// Backend name: `huggingface`, `dummy` or `ollama`
    pub backend: String,
    /// Base URL of the backend; each backend has its own default
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub translation_model: String,
    pub summarization_model: String,
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("backend", &self.backend)
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_deref().map(|_| "<redacted>"))
            .field("translation_model", &self.translation_model)
            .field("summarization_model", &self.summarization_model)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: "huggingface".to_string(),
            api_url: None,
            api_token: None,
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
            summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
        }
    }
}

/// The two model handles, loaded once at startup and shared for the life of the process.
#[derive(Debug, Clone)]
pub struct Pipelines {
    pub translator: Arc<dyn TranslationPipeline>,
    pub summarizer: Arc<dyn SummarizationPipeline>,
}

impl Pipelines {
    pub fn new(
        translator: Arc<dyn TranslationPipeline>,
        summarizer: Arc<dyn SummarizationPipeline>,
    ) -> Self {
        Self {
            translator,
            summarizer,
        }
    }
}

pub mod prelude {
    pub use super::adapters::{summarize, translate};
    pub use super::models::create_pipelines;
    pub use super::{InferenceConfig, Pipelines};
    pub use mts_core::{Error, LanguageTag, Result, ResultText, SummaryBounds};
}
