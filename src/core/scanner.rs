use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Extensions accepted for extraction, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

/// A directory entry whose extension matched the allow-list.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Candidates in the directory's native listing order.
    pub candidates: Vec<Candidate>,
    /// Entry names that did not match the allow-list.
    pub skipped: Vec<String>,
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// List `dir` and split its entries into candidates and skipped names.
///
/// Classification is by extension alone; a candidate that turns out to be
/// unreadable surfaces later as a per-item extraction failure.
pub fn scan(dir: &Path) -> Result<ScanOutcome> {
    if !dir.is_dir() {
        bail!(
            "Directory not found at '{}'. Provide a valid folder path.",
            dir.display()
        );
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut outcome = ScanOutcome::default();
    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();
        if has_supported_extension(&path) {
            outcome.candidates.push(Candidate { file_name, path });
        } else {
            outcome.skipped.push(file_name);
        }
    }

    Ok(outcome)
}
