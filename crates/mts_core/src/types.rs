use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_TRANSLATION_MODEL: &str = "facebook/nllb-200-distilled-600M";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";

/// Language and script codes in the FLORES-200 format used by NLLB models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageTag {
    #[serde(rename = "eng_Latn")]
    EngLatn,
    #[serde(rename = "fra_Latn")]
    FraLatn,
    #[serde(rename = "spa_Latn")]
    SpaLatn,
}

/// Order offered by the source language selector; the first entry is the default.
pub const SOURCE_LANGUAGES: [LanguageTag; 3] = [
    LanguageTag::EngLatn,
    LanguageTag::FraLatn,
    LanguageTag::SpaLatn,
];

/// Order offered by the target language selector; the first entry is the default.
pub const TARGET_LANGUAGES: [LanguageTag; 3] = [
    LanguageTag::FraLatn,
    LanguageTag::EngLatn,
    LanguageTag::SpaLatn,
];

impl LanguageTag {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EngLatn => "eng_Latn",
            Self::FraLatn => "fra_Latn",
            Self::SpaLatn => "spa_Latn",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::EngLatn => "English",
            Self::FraLatn => "French",
            Self::SpaLatn => "Spanish",
        }
    }

    pub fn default_source() -> Self {
        SOURCE_LANGUAGES[0]
    }

    pub fn default_target() -> Self {
        TARGET_LANGUAGES[0]
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SOURCE_LANGUAGES
            .iter()
            .copied()
            .find(|tag| tag.code() == s)
            .ok_or_else(|| Error::InvalidLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_tag: LanguageTag,
    pub target_tag: LanguageTag,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source_tag: LanguageTag, target_tag: LanguageTag) -> Self {
        Self {
            text: text.into(),
            source_tag,
            target_tag,
        }
    }

    /// Only the empty string counts as empty; whitespace is forwarded as-is.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub min_length: usize,
    pub max_length: usize,
}

impl SummaryBounds {
    pub const DEFAULT_MIN_LENGTH: usize = 10;
    pub const DEFAULT_MAX_LENGTH: usize = 100;

    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        let bounds = Self {
            min_length,
            max_length,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(Error::Config("max_length must be greater than zero".to_string()));
        }
        if self.min_length > self.max_length {
            return Err(Error::Config(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRequest {
    pub text: String,
    pub bounds: SummaryBounds,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>, bounds: SummaryBounds) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Pipeline output, passed to the display layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultText(pub String);

impl ResultText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ResultText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ResultText> for String {
    fn from(value: ResultText) -> Self {
        value.0
    }
}

impl fmt::Display for ResultText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
