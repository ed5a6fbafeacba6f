use askama::Template;
use axum::response::Html;
use mts_core::{LanguageTag, SOURCE_LANGUAGES, TARGET_LANGUAGES};
use serde::Deserialize;

use crate::error::WebError;

/// Everything the page posts back. Both submit buttons share one form, so
/// either action carries the whole page, including the outputs on display.
#[derive(Debug, Clone, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub text: String,
    #[serde(default = "LanguageTag::default_source")]
    pub src_lang: LanguageTag,
    #[serde(default = "LanguageTag::default_target")]
    pub tgt_lang: LanguageTag,
    #[serde(default)]
    pub translation_output: Option<String>,
    #[serde(default)]
    pub summary_text: String,
    #[serde(default)]
    pub summary_output: Option<String>,
}

impl Default for PageForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            src_lang: LanguageTag::default_source(),
            tgt_lang: LanguageTag::default_target(),
            translation_output: None,
            summary_text: String::new(),
            summary_output: None,
        }
    }
}

pub struct LanguageOption {
    pub code: &'static str,
    pub selected: bool,
}

fn options(tags: &[LanguageTag], selected: LanguageTag) -> Vec<LanguageOption> {
    tags.iter()
        .map(|tag| LanguageOption {
            code: tag.code(),
            selected: *tag == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub text: &'a str,
    pub source_options: Vec<LanguageOption>,
    pub target_options: Vec<LanguageOption>,
    pub translation_output: Option<&'a str>,
    pub summary_text: &'a str,
    pub summary_output: Option<&'a str>,
}

impl<'a> From<&'a PageForm> for IndexPage<'a> {
    fn from(form: &'a PageForm) -> Self {
        Self {
            text: &form.text,
            source_options: options(&SOURCE_LANGUAGES, form.src_lang),
            target_options: options(&TARGET_LANGUAGES, form.tgt_lang),
            translation_output: form.translation_output.as_deref(),
            summary_text: &form.summary_text,
            summary_output: form.summary_output.as_deref(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage;

pub fn render(form: &PageForm) -> Result<Html<String>, WebError> {
    let html = IndexPage::from(form).render()?;
    Ok(Html(html))
}
