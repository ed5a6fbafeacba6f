use std::fmt;

use async_trait::async_trait;
use mts_core::{LanguageTag, Result, SummarizationPipeline, SummaryBounds, TranslationPipeline};

/// Offline translator: tags the text with the target language.
pub struct DummyTranslator;

impl fmt::Debug for DummyTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyTranslator").finish()
    }
}

#[async_trait]
impl TranslationPipeline for DummyTranslator {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn translate(&self, text: &str, source: LanguageTag, target: LanguageTag) -> Result<String> {
        if source == target {
            return Ok(text.to_string());
        }
        Ok(format!("[{}] {}", target, text))
    }
}

/// Offline summarizer: keeps the first `max_length` words.
pub struct DummySummarizer;

impl fmt::Debug for DummySummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummySummarizer").finish()
    }
}

#[async_trait]
impl SummarizationPipeline for DummySummarizer {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(bounds.max_length).collect();
        Ok(words.join(" "))
    }
}
