use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mts_core::{
    LanguageTag, SummarizationRequest, SummaryBounds, TranslationRequest, SOURCE_LANGUAGES,
    TARGET_LANGUAGES,
};
use mts_inference::adapters;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub text: String,
    #[serde(default = "LanguageTag::default_source")]
    pub src_lang: LanguageTag,
    #[serde(default = "LanguageTag::default_target")]
    pub tgt_lang: LanguageTag,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    pub text: String,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub source: Vec<LanguageTag>,
    pub target: Vec<LanguageTag>,
}

pub async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        source: SOURCE_LANGUAGES.to_vec(),
        target: TARGET_LANGUAGES.to_vec(),
    })
}

/// 204 when `text` is empty, otherwise the pipeline output as-is.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TranslateBody>,
) -> Result<Response, ApiError> {
    let request = TranslationRequest::new(body.text, body.src_lang, body.tgt_lang);
    let response = match adapters::translate(state.pipelines.translator.as_ref(), &request).await? {
        Some(text) => Json(TranslationResponse {
            translation_text: text.into_inner(),
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummarizeBody>,
) -> Result<Response, ApiError> {
    let bounds = SummaryBounds::new(
        body.min_length.unwrap_or(state.summary_bounds.min_length),
        body.max_length.unwrap_or(state.summary_bounds.max_length),
    )?;
    let request = SummarizationRequest::new(body.text, bounds);
    let response = match adapters::summarize(state.pipelines.summarizer.as_ref(), &request).await? {
        Some(text) => Json(SummaryResponse {
            summary_text: text.into_inner(),
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}
