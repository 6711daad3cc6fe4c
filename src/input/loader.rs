//! Reads resume and interview response files into plain text

use crate::error::{RecruitAssistError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// Format of an existing input file, or an error if it cannot be read as text.
pub fn supported_type(path: &Path) -> Result<FileType> {
    if !path.exists() {
        return Err(RecruitAssistError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match FileType::from_path(path) {
        FileType::Unknown => Err(RecruitAssistError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
        file_type => Ok(file_type),
    }
}

/// Each call reads the file afresh; an assessment reads each input once.
pub async fn load_text(path: &Path) -> Result<String> {
    let file_type = supported_type(path)?;
    info!("Loading {:?} input from {}", file_type, path.display());

    match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Text | FileType::Unknown => PlainTextExtractor.extract(path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_supported_type_checks_existence_first() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.xyz");
        assert!(matches!(supported_type(&missing), Err(RecruitAssistError::InvalidInput(_))));

        let notes = temp_dir.path().join("notes");
        std::fs::write(&notes, "plain").unwrap();
        assert_eq!(supported_type(&notes).unwrap(), FileType::Text);
    }

    #[tokio::test]
    async fn test_load_text_reflects_file_changes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.txt");

        std::fs::write(&path, "first draft").unwrap();
        assert!(load_text(&path).await.unwrap().contains("first draft"));

        std::fs::write(&path, "second draft").unwrap();
        assert!(load_text(&path).await.unwrap().contains("second draft"));
    }
}
