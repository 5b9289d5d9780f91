use std::io::Read;
use std::path::Path;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;

use smartdoc::ai::InferenceClient;
use smartdoc::core::config::AppConfig;
use smartdoc::core::models::{Document, SourceKind, SummaryOptions};
use smartdoc::extract;
use smartdoc::history::MemoryHistory;
use smartdoc::summarize::summarize_document;

/// Owner key for summaries created from this machine. Account management is
/// handled by whatever frontend embeds the crate, not here.
const LOCAL_OWNER: &str = "local";

#[derive(Parser, Debug)]
#[command(
    name = "smartdoc",
    about = "Summarize a document, pasted text, or web article with a hosted AI model"
)]
struct Cli {
    /// File to summarize (.pdf, .docx, or plain text), an http(s) URL to
    /// scrape, or "-" to read pasted text from stdin
    input: String,

    /// Minimum summary length per chunk, in tokens
    #[arg(long, default_value_t = 50)]
    min_length: usize,

    /// Maximum summary length per chunk, in tokens
    #[arg(long, default_value_t = 150)]
    max_length: usize,

    /// Title stored with the summary record (defaults to one derived from the
    /// input source)
    #[arg(long)]
    title: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    smartdoc::setup_logging();
    let cli = Cli::parse();

    if cli.min_length >= cli.max_length {
        return Err(anyhow!(
            "--min-length must be smaller than --max-length ({} >= {})",
            cli.min_length,
            cli.max_length
        ));
    }

    let config = AppConfig::from_env().map_err(|e| anyhow!("configuration error: {e}"))?;
    let model = InferenceClient::new(&config);
    let history = MemoryHistory::new();

    let document = load_document(&cli).await?;
    info!(
        "Summarizing \"{}\" ({} chars)",
        document.title,
        document.text.chars().count()
    );

    let options = SummaryOptions {
        min_length: cli.min_length,
        max_length: cli.max_length,
    };
    let record = summarize_document(&model, &history, LOCAL_OWNER, &document, &options)
        .await
        .context("summarization failed")?;

    info!("Saved summary record {}", record.id);
    println!("{}", record.summary);
    Ok(())
}

async fn load_document(cli: &Cli) -> anyhow::Result<Document> {
    if cli.input.starts_with("http://") || cli.input.starts_with("https://") {
        let http = reqwest::Client::new();
        let text = extract::extract_from_url(&http, &cli.input)
            .await
            .context("failed to scrape article")?;
        let title = cli.title.clone().unwrap_or_else(|| "Web Article".to_string());
        return Ok(Document::new(title, text, SourceKind::Url));
    }

    if cli.input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        let title = cli.title.clone().unwrap_or_else(|| {
            format!("Pasted Text {}", chrono::Utc::now().format("%H:%M"))
        });
        return Ok(Document::new(title, text, SourceKind::Paste));
    }

    let path = Path::new(&cli.input);
    let text = extract::extract_from_path(path)
        .with_context(|| format!("failed to extract text from {}", path.display()))?;
    let title = cli.title.clone().unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled Document".to_string())
    });
    Ok(Document::new(title, text, SourceKind::Upload))
}
