//! Recording pipelines for tests. They never touch the network.

use std::sync::Mutex;

use async_trait::async_trait;
use mts_core::{Error, LanguageTag, Result, SummarizationPipeline, SummaryBounds, TranslationPipeline};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Failure(String),
}

impl Reply {
    fn produce(&self) -> Result<String> {
        match self {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure(message) => Err(Error::Inference(message.clone())),
        }
    }
}

#[derive(Debug)]
pub struct MockTranslator {
    reply: Reply,
    calls: Mutex<Vec<(String, LanguageTag, LanguageTag)>>,
}

impl MockTranslator {
    pub fn returning(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Failure(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, LanguageTag, LanguageTag)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl TranslationPipeline for MockTranslator {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn translate(&self, text: &str, source: LanguageTag, target: LanguageTag) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), source, target));
        }
        self.reply.produce()
    }
}

#[derive(Debug)]
pub struct MockSummarizer {
    reply: Reply,
    calls: Mutex<Vec<(String, SummaryBounds)>>,
}

impl MockSummarizer {
    pub fn returning(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Failure(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SummaryBounds)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl SummarizationPipeline for MockSummarizer {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), bounds));
        }
        self.reply.produce()
    }
}
