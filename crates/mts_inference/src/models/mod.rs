use std::sync::Arc;

use mts_core::{Error, Result};
use tracing::info;

use crate::{InferenceConfig, Pipelines};

pub mod dummy;
pub mod huggingface;
#[cfg(feature = "ollama")]
pub mod ollama;

pub use dummy::{DummySummarizer, DummyTranslator};
pub use huggingface::{HuggingFaceSummarizer, HuggingFaceTranslator};

pub const AVAILABLE_BACKENDS: &[&str] = &["huggingface", "dummy", "ollama"];

/// Build both pipelines for the configured backend.
pub async fn create_pipelines(config: &InferenceConfig) -> Result<Pipelines> {
    let pipelines = match config.backend.to_lowercase().as_str() {
        "huggingface" | "hf" => {
            let (translator, summarizer) = huggingface::create_pipelines(config)?;
            Pipelines::new(Arc::new(translator), Arc::new(summarizer))
        }
        "dummy" => Pipelines::new(Arc::new(DummyTranslator), Arc::new(DummySummarizer)),
        #[cfg(feature = "ollama")]
        "ollama" => {
            let (translator, summarizer) = ollama::create_pipelines(config).await?;
            Pipelines::new(Arc::new(translator), Arc::new(summarizer))
        }
        #[cfg(not(feature = "ollama"))]
        "ollama" => {
            return Err(Error::Config(
                "the ollama backend requires building with the `ollama` feature".to_string(),
            ))
        }
        other => {
            return Err(Error::Config(format!(
                "Unknown backend '{}'. Available backends: {}",
                other,
                AVAILABLE_BACKENDS.join(", ")
            )))
        }
    };

    info!(
        "🧠 Pipelines ready (translation: {}, summarization: {})",
        pipelines.translator.name(),
        pipelines.summarizer.name()
    );
    Ok(pipelines)
}
