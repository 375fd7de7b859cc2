use anyhow::{Context, Result};
use docx_rs::{Docx, Paragraph, Run};
use std::path::{Path, PathBuf};

/// Output path for an image's extracted text: same directory, extension
/// stripped, fixed suffix appended.
pub fn document_path_for(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    image_path.with_file_name(format!("{}_extracted_text.docx", stem))
}

/// Write `text` to a docx at `path`, one paragraph per line, replacing
/// any existing file.
pub fn save_text_as_docx(text: &str, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut docx = Docx::new();
    for line in text.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    docx.build()
        .pack(file)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
