use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use mts_core::{SummarizationRequest, TranslationRequest};
use mts_inference::adapters;

use crate::error::WebError;
use crate::page::{self, PageForm};
use crate::AppState;

pub async fn index() -> Result<Html<String>, WebError> {
    page::render(&PageForm::default())
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    Form(mut form): Form<PageForm>,
) -> Result<Html<String>, WebError> {
    let request = TranslationRequest::new(form.text.clone(), form.src_lang, form.tgt_lang);
    let result = adapters::translate(state.pipelines.translator.as_ref(), &request).await?;
    form.translation_output = result.map(String::from);
    page::render(&form)
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Form(mut form): Form<PageForm>,
) -> Result<Html<String>, WebError> {
    let request = SummarizationRequest::new(form.summary_text.clone(), state.summary_bounds);
    let result = adapters::summarize(state.pipelines.summarizer.as_ref(), &request).await?;
    form.summary_output = result.map(String::from);
    page::render(&form)
}

pub async fn health() -> &'static str {
    "ok"
}
