pub mod client;

pub use client::{InferenceClient, Summarize};
