//! Text Extractor: plain text of a PDF on disk.
//!
//! Extraction never fails from the caller's point of view. Unreadable files,
//! malformed PDFs and panics inside the PDF library are logged and produce
//! empty content.

use std::path::Path;

use tracing::{debug, warn};

/// Concatenated text of every page of the PDF at `path`; pages without text
/// contribute nothing. Runs on the blocking pool since parsing is CPU-bound.
pub async fn extract_pdf_text(path: &Path) -> String {
    let owned = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned)).await;

    match result {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {}", text.len(), path.display());
            text
        }
        Ok(Err(e)) => {
            warn!("PDF extraction error for {}: {e}", path.display());
            String::new()
        }
        Err(e) => {
            warn!("PDF extraction aborted for {}: {e}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::one_page_pdf;

    #[tokio::test]
    async fn test_missing_file_yields_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_pdf_text(&dir.path().join("absent.pdf")).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_text_pdf_yields_its_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, one_page_pdf("I know python and sql")).unwrap();
        let text = extract_pdf_text(&path).await;
        assert!(text.contains("python"), "extracted {text:?}");
        assert!(text.contains("sql"), "extracted {text:?}");
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        std::fs::write(&path, b"%PDF-1.4\nthis is not really a pdf").unwrap();
        let text = extract_pdf_text(&path).await;
        assert_eq!(text, "");
    }
}
