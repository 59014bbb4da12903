// src/utils.rs
use std::path::Path;

/// Get file extension in lowercase
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
