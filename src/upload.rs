//! Document selection and validation.
//!
//! Every input source (drag-and-drop, file picker) produces an
//! [`UploadCandidate`] and goes through the same type and size checks.

use std::fmt;
use std::sync::Arc;

use crate::error::UploadError;

/// Largest document the service accepts: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = ".pdf,.docx,.txt";

/// Document formats the analysis service can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [Self::Pdf, Self::Docx, Self::PlainText];

    /// Map a declared MIME type to a supported format.
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.mime().eq_ignore_ascii_case(mime.trim()))
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::PlainText => "text/plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "TXT",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check a file's declared type and size before its bytes are read.
pub fn validate_file(mime: &str, size: u64) -> Result<DocumentType, UploadError> {
    let document_type = DocumentType::from_mime(mime).ok_or_else(|| UploadError::InvalidFileType {
        media_type: mime.to_string(),
    })?;

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge { size });
    }

    Ok(document_type)
}

/// Shortest text the service will analyze, after trimming.
pub const MIN_TEXT_CHARS: usize = 10;

/// Check pasted text before it is sent for analysis.
pub fn validate_text(text: &str) -> Result<&str, UploadError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(UploadError::TextTooShort { min: MIN_TEXT_CHARS });
    }
    Ok(trimmed)
}

/// The single document pending submission.
#[derive(Clone, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        DocumentType::from_mime(&self.media_type)
    }

    pub fn validate(&self) -> Result<DocumentType, UploadError> {
        validate_file(&self.media_type, self.size())
    }

    /// Size for display, e.g. "12.50 KB".
    pub fn size_display(&self) -> String {
        format!("{:.2} KB", self.size() as f64 / 1024.0)
    }
}

// Raw bytes are noise in logs and assertion output.
impl fmt::Debug for UploadCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadCandidate")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size())
            .finish()
    }
}
