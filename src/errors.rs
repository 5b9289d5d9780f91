use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No content to summarize")]
    EmptyInput,

    #[error("Failed to run model inference: {0}")]
    ModelError(String),

    #[error("Summarization model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to extract document text: {0}")]
    ExtractError(String),

    #[error("Failed to access summary history: {0}")]
    HistoryError(String),
}

impl SummarizeError {
    /// Transient failures are worth retrying; everything else fails the call.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SummarizeError::HttpError(_) | SummarizeError::ModelUnavailable(_)
        )
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for SummarizeError {
    fn from(error: std::io::Error) -> Self {
        SummarizeError::ExtractError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizeError {
    fn from(error: anyhow::Error) -> Self {
        SummarizeError::ModelError(error.to_string())
    }
}
