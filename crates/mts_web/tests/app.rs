use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mts_core::{LanguageTag, SummaryBounds};
use mts_inference::test_utils::{MockSummarizer, MockTranslator};
use mts_inference::Pipelines;
use mts_web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

struct Harness {
    app: Router,
    translator: Arc<MockTranslator>,
    summarizer: Arc<MockSummarizer>,
}

fn harness(translator: MockTranslator, summarizer: MockSummarizer) -> Harness {
    let translator = Arc::new(translator);
    let summarizer = Arc::new(summarizer);
    let pipelines = Pipelines::new(translator.clone(), summarizer.clone());
    Harness {
        app: create_app(AppState::new(pipelines, SummaryBounds::default())),
        translator,
        summarizer,
    }
}

fn default_harness() -> Harness {
    harness(
        MockTranslator::returning("Bonjour"),
        MockSummarizer::returning("A short summary"),
    )
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_renders_both_sections() {
    let h = default_harness();
    let (status, html) = get(&h.app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Translation</h2>"));
    assert!(html.contains("<h2>Summarization</h2>"));
    assert!(html.contains(r#"formaction="/translate""#));
    assert!(html.contains(r#"formaction="/summarize""#));
    assert!(!html.contains("Translated Text:"));
    assert_eq!(h.translator.call_count(), 0);
    assert_eq!(h.summarizer.call_count(), 0);
}

#[tokio::test]
async fn test_translation_shows_pipeline_output() {
    let h = default_harness();
    let (status, html) = post_form(
        &h.app,
        "/translate",
        "text=Hello&src_lang=eng_Latn&tgt_lang=fra_Latn&summary_text=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Translated Text:"));
    assert!(html.contains("name=\"translation_output\" readonly>\nBonjour</textarea>"));
    assert_eq!(
        h.translator.calls(),
        vec![("Hello".to_string(), LanguageTag::EngLatn, LanguageTag::FraLatn)]
    );
    // Inputs survive the round trip.
    assert!(html.contains("name=\"text\">\nHello</textarea>"));
}

#[tokio::test]
async fn test_empty_translation_does_not_call_pipeline() {
    let h = default_harness();
    let (status, html) = post_form(
        &h.app,
        "/translate",
        "text=&src_lang=eng_Latn&tgt_lang=fra_Latn",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.translator.call_count(), 0);
    assert!(!html.contains("Translated Text:"));
}

#[tokio::test]
async fn test_identical_language_tags_still_translate() {
    let h = default_harness();
    let (status, _) = post_form(
        &h.app,
        "/translate",
        "text=Hola&src_lang=spa_Latn&tgt_lang=spa_Latn",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        h.translator.calls(),
        vec![("Hola".to_string(), LanguageTag::SpaLatn, LanguageTag::SpaLatn)]
    );
}

#[tokio::test]
async fn test_selected_languages_are_kept() {
    let h = default_harness();
    let (_, html) = post_form(
        &h.app,
        "/translate",
        "text=Hola&src_lang=spa_Latn&tgt_lang=eng_Latn",
    )
    .await;

    assert!(html.contains(r#"<option value="spa_Latn" selected>"#));
    assert!(html.contains(r#"<option value="eng_Latn" selected>"#));
    assert!(!html.contains(r#"<option value="fra_Latn" selected>"#));
}

#[tokio::test]
async fn test_unknown_language_tag_is_rejected() {
    let h = default_harness();
    let (status, _) = post_form(
        &h.app,
        "/translate",
        "text=Hello&src_lang=eng_Latn&tgt_lang=deu_Latn",
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(h.translator.call_count(), 0);
}

#[tokio::test]
async fn test_long_summary_is_shown_verbatim() {
    let summary = "verbatim ".repeat(300).trim_end().to_string();
    let h = harness(
        MockTranslator::returning("unused"),
        MockSummarizer::returning(&summary),
    );
    let input = "word ".repeat(400);
    let body = format!("summary_text={}", input.trim_end().replace(' ', "+"));

    let (status, html) = post_form(&h.app, "/summarize", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!("name=\"summary_output\" readonly>\n{}</textarea>", summary)));
    let calls = h.summarizer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, SummaryBounds::default());
}

#[tokio::test]
async fn test_empty_summary_does_not_call_pipeline() {
    let h = default_harness();
    let (status, html) = post_form(&h.app, "/summarize", "summary_text=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.summarizer.call_count(), 0);
    assert!(!html.contains("Summary:"));
}

#[tokio::test]
async fn test_summarizing_keeps_translation_output() {
    let h = default_harness();
    let (_, html) = post_form(
        &h.app,
        "/summarize",
        "text=Hello&src_lang=eng_Latn&tgt_lang=fra_Latn&translation_output=Bonjour&summary_text=Long+text",
    )
    .await;

    assert!(html.contains("name=\"translation_output\" readonly>\nBonjour</textarea>"));
    assert!(html.contains("name=\"summary_output\" readonly>\nA short summary</textarea>"));
    assert_eq!(h.translator.call_count(), 0);
    assert_eq!(h.summarizer.call_count(), 1);
}

#[tokio::test]
async fn test_translating_keeps_summary_output() {
    let h = default_harness();
    let (_, html) = post_form(
        &h.app,
        "/translate",
        "text=Hello&src_lang=eng_Latn&tgt_lang=fra_Latn&summary_text=Long+text&summary_output=Earlier+summary",
    )
    .await;

    assert!(html.contains("name=\"summary_output\" readonly>\nEarlier summary</textarea>"));
    assert!(html.contains("name=\"translation_output\" readonly>\nBonjour</textarea>"));
    assert_eq!(h.summarizer.call_count(), 0);
}

#[tokio::test]
async fn test_pipeline_failure_renders_generic_page() {
    let h = harness(
        MockTranslator::failing("CUDA out of memory"),
        MockSummarizer::returning("unused"),
    );
    let (status, html) = post_form(
        &h.app,
        "/translate",
        "text=Hello&src_lang=eng_Latn&tgt_lang=fra_Latn",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("CUDA out of memory"));
}

#[tokio::test]
async fn test_api_translate() {
    let h = default_harness();
    let (status, body) = post_json(
        &h.app,
        "/api/translate",
        json!({ "text": "Hello", "src_lang": "eng_Latn", "tgt_lang": "fra_Latn" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({ "translation_text": "Bonjour" }));
}

#[tokio::test]
async fn test_api_empty_text_is_no_content() {
    let h = default_harness();
    let (status, body) = post_json(&h.app, "/api/translate", json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = post_json(&h.app, "/api/summarize", json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(h.translator.call_count(), 0);
    assert_eq!(h.summarizer.call_count(), 0);
}

#[tokio::test]
async fn test_api_summarize_bounds() {
    let h = default_harness();
    let (status, body) = post_json(
        &h.app,
        "/api/summarize",
        json!({ "text": "Some long text", "max_length": 40 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["summary_text"], "A short summary");
    assert_eq!(
        h.summarizer.calls(),
        vec![("Some long text".to_string(), SummaryBounds { min_length: 10, max_length: 40 })]
    );

    let (status, _) = post_json(
        &h.app,
        "/api/summarize",
        json!({ "text": "Some long text", "min_length": 50, "max_length": 40 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(h.summarizer.call_count(), 1);
}

#[tokio::test]
async fn test_api_failure_is_json() {
    let h = harness(
        MockTranslator::returning("unused"),
        MockSummarizer::failing("model exploded"),
    );
    let (status, body) = post_json(&h.app, "/api/summarize", json!({ "text": "Text" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], "Inference error: model exploded");
}

#[tokio::test]
async fn test_api_languages_and_health() {
    let h = default_harness();
    let (status, body) = get(&h.app, "/api/languages").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["source"], json!(["eng_Latn", "fra_Latn", "spa_Latn"]));
    assert_eq!(value["target"], json!(["fra_Latn", "eng_Latn", "spa_Latn"]));

    let (status, body) = get(&h.app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_leading_newlines_survive_rendering() {
    let h = harness(
        MockTranslator::returning("\nBonjour"),
        MockSummarizer::returning("unused"),
    );
    let (status, html) = post_form(
        &h.app,
        "/translate",
        "text=%0Aline+two&src_lang=eng_Latn&tgt_lang=fra_Latn",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // The parser eats one newline after the start tag, so the content keeps its own.
    assert!(html.contains("name=\"translation_output\" readonly>\n\nBonjour</textarea>"));
    assert!(html.contains("name=\"text\">\n\nline two</textarea>"));
    assert_eq!(h.translator.calls()[0].0, "\nline two");

    // A carried-over output keeps its leading newline too.
    let (_, html) = post_form(
        &h.app,
        "/summarize",
        "translation_output=%0ABonjour&summary_text=",
    )
    .await;
    assert!(html.contains("name=\"translation_output\" readonly>\n\nBonjour</textarea>"));
}
