use std::io::{self, Write};

use clap::{Parser, Subcommand};
use mts_core::{LanguageTag, Result, SummarizationRequest, SummaryBounds, TranslationRequest};
use mts_core::{DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TRANSLATION_MODEL, SOURCE_LANGUAGES, TARGET_LANGUAGES};
use mts_inference::{adapters, create_pipelines, InferenceConfig};
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Multilingual translation and text summarization", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "huggingface", help = "Pipeline backend. Available backends: huggingface (default), dummy, ollama")]
    backend: String,
    /// Base URL of the inference backend
    #[arg(long)]
    api_url: Option<String>,
    /// Access token for the inference backend
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    api_token: Option<String>,
    #[arg(long, default_value = DEFAULT_TRANSLATION_MODEL)]
    translation_model: String,
    #[arg(long, default_value = DEFAULT_SUMMARIZATION_MODEL)]
    summarization_model: String,
    /// Lower bound handed to the summarization model
    #[arg(long, default_value_t = SummaryBounds::DEFAULT_MIN_LENGTH)]
    min_length: usize,
    /// Upper bound handed to the summarization model
    #[arg(long, default_value_t = SummaryBounds::DEFAULT_MAX_LENGTH)]
    max_length: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the web page and JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8501)]
        port: u16,
    },
    /// Translate a piece of text and print the result
    Translate {
        #[arg(long, default_value = "eng_Latn", value_parser = parse_language)]
        src: LanguageTag,
        #[arg(long, default_value = "fra_Latn", value_parser = parse_language)]
        tgt: LanguageTag,
        text: String,
    },
    /// Summarize a piece of text and print the result
    Summarize { text: String },
    /// List the supported language tags
    Languages,
}

fn parse_language(s: &str) -> std::result::Result<LanguageTag, String> {
    s.parse::<LanguageTag>().map_err(|e| e.to_string())
}

impl Cli {
    fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            backend: self.backend.clone(),
            api_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            translation_model: self.translation_model.clone(),
            summarization_model: self.summarization_model.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();
    run(cli, &mut io::stdout()).await
}

/// Dispatch one command, printing results to `out`. Empty input prints nothing.
async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if let Commands::Languages = cli.command {
        let codes = |tags: &[LanguageTag]| tags.iter().map(|t| t.code()).collect::<Vec<_>>().join(", ");
        writeln!(out, "source: {}", codes(&SOURCE_LANGUAGES))?;
        writeln!(out, "target: {}", codes(&TARGET_LANGUAGES))?;
        return Ok(());
    }

    let bounds = SummaryBounds::new(cli.min_length, cli.max_length)?;
    let config = cli.inference_config();
    info!("🔧 Loading pipelines ({:?})", config);
    let pipelines = create_pipelines(&config).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let app = mts_web::create_app(mts_web::AppState::new(pipelines, bounds));
            let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
            info!("🚀 Listening on http://{}", listener.local_addr()?);
            axum::serve(listener, app).await?;
        }
        Commands::Translate { src, tgt, text } => {
            let request = TranslationRequest::new(text, src, tgt);
            if let Some(output) = adapters::translate(pipelines.translator.as_ref(), &request).await? {
                writeln!(out, "{}", output)?;
            }
        }
        Commands::Summarize { text } => {
            let request = SummarizationRequest::new(text, bounds);
            if let Some(output) = adapters::summarize(pipelines.summarizer.as_ref(), &request).await? {
                writeln!(out, "{}", output)?;
            }
        }
        Commands::Languages => {}
    }

    Ok(())
}
