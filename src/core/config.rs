use std::env;

/// Default hosted inference endpoint.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
/// Default summarization model.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inference_api_token: String,
    pub inference_api_base: String,
    pub summarizer_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            inference_api_token: env::var("INFERENCE_API_TOKEN")
                .map_err(|e| format!("INFERENCE_API_TOKEN: {}", e))?,
            inference_api_base: env::var("INFERENCE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            summarizer_model: env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
