//! Summarization orchestrator.
//!
//! Drives the chunk-summarize-concatenate pipeline: input text is split into
//! model-sized chunks, each viable chunk goes to the summarization capability
//! in order, and the partial summaries are stitched back together into one
//! string. Chunks are processed sequentially; the first model failure aborts
//! the run and no partial summary is returned.

use tracing::{debug, info};

use crate::ai::Summarize;
use crate::chunker::{Chunker, DEFAULT_MAX_CHUNK_SIZE};
use crate::core::models::{Document, SummaryOptions, SummaryRecord};
use crate::errors::SummarizeError;
use crate::history::SummaryHistory;

/// Chunks whose trimmed length is at or below this are trailing fragments too
/// short to summarize meaningfully and are skipped without a model call.
pub const MIN_VIABLE_CHUNK_CHARS: usize = 50;

/// Generate one concatenated summary for `text`.
///
/// Empty or whitespace-only input is rejected before any model call. Non-empty
/// input whose every chunk falls below the viability threshold produces an
/// empty summary, also without calling the model.
pub async fn generate_summary<S: Summarize + ?Sized>(
    model: &S,
    text: &str,
    options: &SummaryOptions,
) -> Result<String, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    let chunker = Chunker::new(DEFAULT_MAX_CHUNK_SIZE);
    let mut summary = String::new();
    let mut summarized = 0usize;

    for (index, chunk) in chunker.chunks(text).enumerate() {
        let trimmed_len = chunk.trim().chars().count();
        if trimmed_len <= MIN_VIABLE_CHUNK_CHARS {
            debug!("Skipping chunk {index}: {trimmed_len} chars is below the viable minimum");
            continue;
        }

        let part = model
            .summarize(&chunk, options.min_length, options.max_length)
            .await?;
        summary.push_str(&part);
        summary.push(' ');
        summarized += 1;
    }

    info!("Summarized {summarized} chunk(s)");
    Ok(summary.trim().to_string())
}

/// Summarize a document and persist the result to the owner's history.
///
/// Returns the stored record. The document itself is not persisted beyond the
/// record derived from it.
pub async fn summarize_document<S, H>(
    model: &S,
    history: &H,
    owner_id: &str,
    document: &Document,
    options: &SummaryOptions,
) -> Result<SummaryRecord, SummarizeError>
where
    S: Summarize + ?Sized,
    H: SummaryHistory + ?Sized,
{
    let summary = generate_summary(model, &document.text, options).await?;
    history
        .save(owner_id, &document.title, &document.text, &summary)
        .await
}
