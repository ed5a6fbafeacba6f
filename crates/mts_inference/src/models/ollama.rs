use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use langchain_rust::language_models::llm::LLM;
use langchain_rust::llm::client::GenerationOptions;
use langchain_rust::llm::ollama::client::{Ollama, OllamaClient};
use mts_core::{Error, LanguageTag, Result, SummarizationPipeline, SummaryBounds, TranslationPipeline};
use mts_core::{DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TRANSLATION_MODEL};
use url::Url;

use crate::InferenceConfig;

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "gemma3:12b";

#[derive(Debug)]
pub struct OllamaModelConfig {
    host: String,
    port: u16,
    translation_model: String,
    summarization_model: String,
}

/// A per-task model other than the Hugging Face default wins over the one
/// named in the URL path.
fn select_model(task_model: &str, hf_default: &str, url_model: &str) -> String {
    if task_model.is_empty() || task_model == hf_default {
        url_model.to_string()
    } else {
        task_model.to_string()
    }
}

impl OllamaModelConfig {
    /// `api_url` may carry the model name as its path, e.g. `http://localhost:11434/llama3`.
    pub fn from_inference_config(config: &InferenceConfig) -> Result<Self> {
        let raw = config.api_url.as_deref().unwrap_or(DEFAULT_OLLAMA_URL);
        let url = Url::parse(raw)
            .map_err(|e| Error::Config(format!("Invalid Ollama URL '{}': {}", raw, e)))?;

        let path_model = url.path().trim_start_matches('/');
        let url_model = if path_model.is_empty() {
            DEFAULT_OLLAMA_MODEL
        } else {
            path_model
        };

        Ok(Self {
            host: format!("{}://{}", url.scheme(), url.host_str().unwrap_or("localhost")),
            port: url.port().unwrap_or(11434),
            translation_model: select_model(
                &config.translation_model,
                DEFAULT_TRANSLATION_MODEL,
                url_model,
            ),
            summarization_model: select_model(
                &config.summarization_model,
                DEFAULT_SUMMARIZATION_MODEL,
                url_model,
            ),
        })
    }

    /// Probes the server once and hands out one handle per distinct model.
    async fn connect(&self) -> Result<(Arc<Ollama>, Arc<Ollama>)> {
        let client = Arc::new(OllamaClient::new(self.host.clone(), self.port));
        let translation = Arc::new(Ollama::new(
            client.clone(),
            self.translation_model.clone(),
            Some(GenerationOptions::default()),
        ));

        if let Err(e) = translation.invoke("ping").await {
            return Err(Error::External(anyhow!(
                "Ollama is not available at {}:{}: {}. Please ensure Ollama is running and the model '{}' is installed.",
                self.host,
                self.port,
                e,
                self.translation_model
            )));
        }

        let summarization = if self.summarization_model == self.translation_model {
            translation.clone()
        } else {
            Arc::new(Ollama::new(
                client,
                self.summarization_model.clone(),
                Some(GenerationOptions::default()),
            ))
        };
        Ok((translation, summarization))
    }
}

pub async fn create_pipelines(config: &InferenceConfig) -> Result<(OllamaTranslator, OllamaSummarizer)> {
    let model_config = OllamaModelConfig::from_inference_config(config)?;
    let (translation, summarization) = model_config.connect().await?;
    Ok((
        OllamaTranslator {
            ollama: translation,
        },
        OllamaSummarizer {
            ollama: summarization,
        },
    ))
}

async fn invoke(ollama: &Ollama, prompt: &str) -> Result<String> {
    ollama
        .invoke(prompt)
        .await
        .map_err(|e| Error::External(anyhow!("Ollama generation failed: {}", e)))
}

pub struct OllamaTranslator {
    ollama: Arc<Ollama>,
}

impl fmt::Debug for OllamaTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaTranslator")
            .field("ollama", &"<Ollama>")
            .finish()
    }
}

#[async_trait]
impl TranslationPipeline for OllamaTranslator {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn translate(&self, text: &str, source: LanguageTag, target: LanguageTag) -> Result<String> {
        let prompt = format!(
            "Translate the following text from {} to {}. Reply with the translation only.\n\n{}",
            source.english_name(),
            target.english_name(),
            text
        );
        invoke(&self.ollama, &prompt).await
    }
}

pub struct OllamaSummarizer {
    ollama: Arc<Ollama>,
}

impl fmt::Debug for OllamaSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaSummarizer")
            .field("ollama", &"<Ollama>")
            .finish()
    }
}

#[async_trait]
impl SummarizationPipeline for OllamaSummarizer {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let prompt = format!(
            "Summarize the following text in {} to {} words. Reply with the summary only.\n\n{}",
            bounds.min_length, bounds.max_length, text
        );
        invoke(&self.ollama, &prompt).await
    }
}
