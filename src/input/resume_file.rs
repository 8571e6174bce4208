//! Resume file selected for upload

use crate::error::{Result, SkillGapError};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// Binary resume payload plus the name it is uploaded under.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a PDF resume from disk.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkillGapError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if FileType::from_path(path) != FileType::Pdf {
            return Err(SkillGapError::InvalidInput(format!(
                "Resume must be a PDF file: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume.pdf".to_string());

        info!("Loaded resume {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    pub fn mime_type(&self) -> &'static str {
        FileType::from_path(Path::new(&self.file_name)).mime_type()
    }
}
