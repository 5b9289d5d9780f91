//! Document text extraction.
//!
//! Turns the supported input sources (web pages, PDF, DOCX, plain text) into
//! the plain UTF-8 text the pipeline consumes. Extraction sits in the
//! application layer: the summarization pipeline itself never reads files or
//! fetches URLs.

use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;
use url::Url;

use crate::errors::SummarizeError;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Cap on the decompressed size of the document part inside a DOCX archive.
const MAX_DOCX_XML_BYTES: u64 = 50 * 1024 * 1024;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|_| Regex::new(r" ").expect("fallback regex compiles"))
});

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Fetch a web page and reduce it to readable plain text.
pub async fn extract_from_url(
    http: &reqwest::Client,
    raw_url: &str,
) -> Result<String, SummarizeError> {
    let parsed = Url::parse(raw_url)
        .map_err(|e| SummarizeError::ExtractError(format!("invalid URL {raw_url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SummarizeError::ExtractError(format!(
            "unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    info!("Fetching article from {parsed}");
    let response = http.get(parsed).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SummarizeError::ExtractError(format!(
            "fetch failed with status {status}"
        )));
    }

    let body = response.text().await?;
    let text = html2text::from_read(body.as_bytes(), 200)
        .map_err(|e| SummarizeError::ExtractError(format!("HTML conversion failed: {e}")))?;
    Ok(collapse_whitespace(&text))
}

/// Read a local file and extract its text, dispatching on the content type
/// guessed from the extension.
pub fn extract_from_path(path: &Path) -> Result<String, SummarizeError> {
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    let bytes = std::fs::read(path)?;
    extract_text(&bytes, content_type.essence_str())
}

/// Extract plain text from raw document bytes.
pub fn extract_text(bytes: &[u8], content_type: &str) -> Result<String, SummarizeError> {
    match content_type {
        MIME_PDF => extract_pdf(bytes),
        MIME_DOCX => extract_docx(bytes),
        t if t.starts_with("text/") => String::from_utf8(bytes.to_vec())
            .map_err(|e| SummarizeError::ExtractError(format!("file is not valid UTF-8: {e}"))),
        other => Err(SummarizeError::ExtractError(format!(
            "unsupported content type: {other}"
        ))),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, SummarizeError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| SummarizeError::ExtractError(format!("PDF extraction failed: {e}")))
}

/// Pull the visible text runs (`<w:t>`) out of the main document part of a
/// DOCX archive. Paragraph boundaries become newlines, like the original
/// document's line structure.
fn extract_docx(bytes: &[u8]) -> Result<String, SummarizeError> {
    let docx_err = |e: String| SummarizeError::ExtractError(format!("DOCX extraction failed: {e}"));

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| docx_err(e.to_string()))?;
    let entry = archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(format!("word/document.xml: {e}")))?;

    let mut xml = Vec::new();
    entry
        .take(MAX_DOCX_XML_BYTES)
        .read_to_end(&mut xml)
        .map_err(|e| docx_err(e.to_string()))?;
    if xml.len() as u64 >= MAX_DOCX_XML_BYTES {
        return Err(docx_err("word/document.xml exceeds size limit".to_string()));
    }

    let mut reader = quick_xml::Reader::from_reader(xml.as_slice());
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Ok(quick_xml::events::Event::Text(t)) if in_text_run => {
                out.push_str(t.unescape().unwrap_or_default().as_ref());
            }
            Ok(quick_xml::events::Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => {
                    if !out.ends_with('\n') && !out.is_empty() {
                        out.push('\n');
                    }
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(docx_err(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(
            collapse_whitespace("  one\n\n two\t three  "),
            "one two three"
        );
    }

    #[test]
    fn unsupported_content_type_is_an_error() {
        let err = extract_text(b"bytes", "application/octet-stream").unwrap_err();
        assert!(matches!(err, SummarizeError::ExtractError(_)));
    }
}
