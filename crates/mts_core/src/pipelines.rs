use std::fmt;

use async_trait::async_trait;

use crate::types::{LanguageTag, SummaryBounds};
use crate::Result;

#[async_trait]
pub trait TranslationPipeline: Send + Sync + fmt::Debug {
    /// Backend name, used in logs
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target`
    async fn translate(&self, text: &str, source: LanguageTag, target: LanguageTag) -> Result<String>;
}

#[async_trait]
pub trait SummarizationPipeline: Send + Sync + fmt::Debug {
    /// Backend name, used in logs
    fn name(&self) -> &str;

    /// Summarize `text` within the given length bounds
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String>;
}
