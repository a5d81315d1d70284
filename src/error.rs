use std::time::Duration;

use thiserror::Error;

/// Local validation failures. None of these ever reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a PDF, DOCX, or TXT file (got '{media_type}')")]
    InvalidFileType { media_type: String },

    #[error("File size must be less than 10MB ({size} bytes selected)")]
    FileTooLarge { size: u64 },

    #[error("No file selected")]
    NoFileSelected,

    #[error("File selection is locked until the current analysis is dismissed")]
    SelectionLocked,

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("Text is too short to analyze (minimum {min} characters)")]
    TextTooShort { min: usize },
}

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Could not reach the analysis service: {0}")]
    Transport(String),

    #[error("The analysis service did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("The analysis service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    #[error("Unexpected response from the analysis service: {0}")]
    InvalidResponse(String),
}

impl From<UploadError> for String {
    fn from(err: UploadError) -> Self {
        err.to_string()
    }
}

impl From<ClientError> for String {
    fn from(err: ClientError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_reports_whole_seconds() {
        let err = ClientError::Timeout(Duration::from_secs(30));
        assert_eq!(
            err.to_string(),
            "The analysis service did not respond within 30s"
        );
    }

    #[test]
    fn test_service_error_includes_status_and_detail() {
        let err = ClientError::Service {
            status: 400,
            detail: "Document appears to be empty".to_string(),
        };
        let msg: String = err.into();
        assert!(msg.contains("400"));
        assert!(msg.contains("Document appears to be empty"));
    }
}
