use std::fmt;

use async_trait::async_trait;
use mts_core::{Error, LanguageTag, Result, SummarizationPipeline, SummaryBounds, TranslationPipeline};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::InferenceConfig;

pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Serialize)]
struct InferenceRequest<'a, P> {
    inputs: &'a str,
    parameters: P,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct TranslationParameters {
    src_lang: &'static str,
    tgt_lang: &'static str,
}

#[derive(Serialize)]
struct SummarizationParameters {
    min_length: usize,
    max_length: usize,
}

#[derive(Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

/// Connection shared by the translation and summarization pipelines.
#[derive(Clone)]
struct HuggingFaceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HuggingFaceClient {
    fn new(config: &InferenceConfig) -> Result<Self> {
        let base_url = config.api_url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid inference API URL '{}': {}", base_url, e)))?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }

    async fn run<P, T>(&self, model: &str, inputs: &str, parameters: P) -> Result<Vec<T>>
    where
        P: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let request = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self.client.post(self.endpoint(model)).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(Error::Inference(format!(
                "{} returned {}: {}",
                model, status, message
            )));
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

pub struct HuggingFaceTranslator {
    inner: HuggingFaceClient,
    model: String,
}

/// Both pipelines over a single HTTP connection pool.
pub fn create_pipelines(
    config: &InferenceConfig,
) -> Result<(HuggingFaceTranslator, HuggingFaceSummarizer)> {
    let inner = HuggingFaceClient::new(config)?;
    let translator = HuggingFaceTranslator {
        inner: inner.clone(),
        model: config.translation_model.clone(),
    };
    let summarizer = HuggingFaceSummarizer {
        inner,
        model: config.summarization_model.clone(),
    };
    Ok((translator, summarizer))
}

impl HuggingFaceTranslator {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        Ok(Self {
            inner: HuggingFaceClient::new(config)?,
            model: config.translation_model.clone(),
        })
    }
}

impl fmt::Debug for HuggingFaceTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceTranslator")
            .field("client", &"<reqwest::Client>")
            .field("api_token", &self.inner.api_token.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.inner.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl TranslationPipeline for HuggingFaceTranslator {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn translate(&self, text: &str, source: LanguageTag, target: LanguageTag) -> Result<String> {
        let parameters = TranslationParameters {
            src_lang: source.code(),
            tgt_lang: target.code(),
        };
        let outputs: Vec<TranslationOutput> = self.inner.run(&self.model, text, parameters).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text)
            .ok_or_else(|| Error::Inference(format!("{} returned no translation", self.model)))
    }
}

pub struct HuggingFaceSummarizer {
    inner: HuggingFaceClient,
    model: String,
}

impl HuggingFaceSummarizer {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        Ok(Self {
            inner: HuggingFaceClient::new(config)?,
            model: config.summarization_model.clone(),
        })
    }
}

impl fmt::Debug for HuggingFaceSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceSummarizer")
            .field("client", &"<reqwest::Client>")
            .field("api_token", &self.inner.api_token.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.inner.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl SummarizationPipeline for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let parameters = SummarizationParameters {
            min_length: bounds.min_length,
            max_length: bounds.max_length,
        };
        let outputs: Vec<SummarizationOutput> = self.inner.run(&self.model, text, parameters).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| Error::Inference(format!("{} returned no summary", self.model)))
    }
}
