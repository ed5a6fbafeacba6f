//! Request adapters sitting between the presentation layer and the pipelines.
//!
//! Both adapters share the same contract: an empty request never reaches the
//! pipeline and yields `Ok(None)`; otherwise the pipeline is called exactly
//! once and its output is returned untouched. Errors are not retried.

use mts_core::{
    Result, ResultText, SummarizationPipeline, SummarizationRequest, TranslationPipeline,
    TranslationRequest,
};
use tracing::{debug, error};

pub async fn translate(
    pipeline: &dyn TranslationPipeline,
    request: &TranslationRequest,
) -> Result<Option<ResultText>> {
    if request.is_empty() {
        debug!("Empty translation input, skipping pipeline call");
        return Ok(None);
    }

    debug!(
        "🌐 Translating {} chars {} -> {} with {}",
        request.text.chars().count(),
        request.source_tag,
        request.target_tag,
        pipeline.name()
    );
    match pipeline
        .translate(&request.text, request.source_tag, request.target_tag)
        .await
    {
        Ok(text) => Ok(Some(ResultText::from(text))),
        Err(e) => {
            error!("Translation with {} failed: {}", pipeline.name(), e);
            Err(e)
        }
    }
}

pub async fn summarize(
    pipeline: &dyn SummarizationPipeline,
    request: &SummarizationRequest,
) -> Result<Option<ResultText>> {
    if request.is_empty() {
        debug!("Empty summarization input, skipping pipeline call");
        return Ok(None);
    }

    debug!(
        "📝 Summarizing {} chars ({}..{}) with {}",
        request.text.chars().count(),
        request.bounds.min_length,
        request.bounds.max_length,
        pipeline.name()
    );
    match pipeline.summarize(&request.text, request.bounds).await {
        Ok(text) => Ok(Some(ResultText::from(text))),
        Err(e) => {
            error!("Summarization with {} failed: {}", pipeline.name(), e);
            Err(e)
        }
    }
}
