use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a document's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Upload,
    Paste,
    Url,
}

/// One document submitted for summarization. Lives only for the duration of
/// the request; what persists is the [`SummaryRecord`] derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
    pub source: SourceKind,
}

impl Document {
    pub fn new(title: impl Into<String>, text: impl Into<String>, source: SourceKind) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            source,
        }
    }
}

/// Desired output-length bounds passed through to the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_length: 50,
            max_length: 150,
        }
    }
}

/// A completed summarization, persisted for the owner's history. Records are
/// created once and deleted on request, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub title: String,
    pub original_text: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
