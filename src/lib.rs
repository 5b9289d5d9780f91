//! SmartDoc - a document-summarization backend.
//!
//! Callers submit text (extracted from a file, pasted, or scraped from a web
//! page), receive an AI-generated summary, and can browse or delete their
//! summarization history.
//!
//! # Architecture
//!
//! The core is a chunking pipeline: input text is split into model-sized
//! chunks on sentence boundaries ([`chunker`]), each viable chunk is sent
//! sequentially to an external summarization capability ([`ai::Summarize`]),
//! and the partial summaries are concatenated into one result
//! ([`summarize::generate_summary`]). Completed summaries are persisted
//! through the [`history::SummaryHistory`] store.
//!
//! All external capabilities (the model client, the history store) are
//! explicitly constructed at startup and passed into the pipeline; nothing is
//! a module-level singleton.
//!
//! # Example
//!
//! ```no_run
//! use smartdoc::ai::InferenceClient;
//! use smartdoc::core::config::AppConfig;
//! use smartdoc::core::models::SummaryOptions;
//! use smartdoc::summarize::generate_summary;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     smartdoc::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let model = InferenceClient::new(&config);
//!
//!     let summary = generate_summary(
//!         &model,
//!         "Some long document text to summarize...",
//!         &SummaryOptions::default(),
//!     )
//!     .await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod chunker;
pub mod core;
pub mod errors;
pub mod extract;
pub mod history;
pub mod summarize;

/// Configure structured logging for the application binaries.
///
/// Builds a tracing-subscriber registry with an env-filtered fmt layer; the
/// `RUST_LOG` variable overrides the default `info` level. Call once at
/// startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
