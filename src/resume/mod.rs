// src/resume/mod.rs
//! Resume readers - one plain-text representation out of any supported format

mod flatten;

use crate::utils::file_extension;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Extensions the reader recognizes, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["yaml", "yml", "json", "pdf", "txt"];

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML resume: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON resume: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Parse a resume file into plain text, dispatching on its extension.
///
/// The path must exist before any format logic runs, and an unrecognized
/// extension is rejected without opening the file.
pub fn parse_resume(path: &Path) -> Result<String, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::NotFound(path.to_path_buf()));
    }

    let extension = file_extension(path);
    debug!("Parsing resume {} as {:?}", path.display(), extension);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml(path),
        Some("json") => parse_json(path),
        Some("pdf") => parse_pdf(path),
        Some("txt") => read_to_string(path),
        other => Err(ResumeError::UnsupportedFormat(
            other
                .map(|ext| format!(".{}", ext))
                .unwrap_or_else(|| "(no extension)".to_string()),
        )),
    }
}

fn parse_yaml(path: &Path) -> Result<String, ResumeError> {
    let raw = read_to_string(path)?;
    let value: serde_yaml::Value = serde_yaml::from_str(&raw)?;
    Ok(flatten::flatten(&flatten::Node::from_yaml(&value)))
}

fn parse_json(path: &Path) -> Result<String, ResumeError> {
    let raw = read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(flatten::flatten(&flatten::Node::from_json(&value)))
}

/// Extract text page by page, in page order, one newline between pages.
fn parse_pdf(path: &Path) -> Result<String, ResumeError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;
    Ok(pages.join("\n").trim().to_string())
}

fn read_to_string(path: &Path) -> Result<String, ResumeError> {
    fs::read_to_string(path).map_err(|source| ResumeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
