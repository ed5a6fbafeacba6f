pub mod error;
pub mod pipelines;
pub mod types;

pub use error::Error;
pub use pipelines::{SummarizationPipeline, TranslationPipeline};
pub use types::{
    LanguageTag, ResultText, SummarizationRequest, SummaryBounds, TranslationRequest,
    DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TRANSLATION_MODEL, SOURCE_LANGUAGES, TARGET_LANGUAGES,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{
        Error, LanguageTag, Result, ResultText, SummarizationPipeline, SummarizationRequest,
        SummaryBounds, TranslationPipeline, TranslationRequest,
    };
}
