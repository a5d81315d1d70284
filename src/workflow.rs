//! Upload controller: the state machine behind the analyzer page.
//!
//! ```text
//! Idle --select--> Ready --submit--> Analyzing --ok--> Results --reset--> Idle
//!                                              \--err--> Idle (+ notification)
//! ```
//!
//! The controller never performs I/O. The page takes the candidate returned by
//! [`UploadController::submit`], runs the request, and feeds the outcome back
//! through [`UploadController::finish`].

use crate::analysis::AnalysisResult;
use crate::error::{ClientError, UploadError};
use crate::upload::UploadCandidate;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    /// Waiting for a document
    #[default]
    Idle,
    /// Document selected, not yet submitted
    Ready(UploadCandidate),
    /// Request in flight for the named file
    Analyzing { filename: String },
    /// Analysis complete
    Results(AnalysisResult),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadController {
    state: UploadState,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn pending(&self) -> Option<&UploadCandidate> {
        match &self.state {
            UploadState::Ready(candidate) => Some(candidate),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            UploadState::Results(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, UploadState::Analyzing { .. })
    }

    /// Validate and stage a document, replacing any pending one.
    ///
    /// On error the current state, including a pending candidate, is kept.
    /// The staged candidate carries the canonical media type.
    pub fn select_file(&mut self, mut candidate: UploadCandidate) -> Result<(), UploadError> {
        match self.state {
            UploadState::Idle | UploadState::Ready(_) => {}
            UploadState::Analyzing { .. } | UploadState::Results(_) => {
                return Err(UploadError::SelectionLocked);
            }
        }

        let document_type = candidate.validate()?;
        candidate.media_type = document_type.mime().to_string();
        log::info!(
            "Selected {} ({}, {} bytes)",
            candidate.name,
            document_type,
            candidate.size()
        );
        self.state = UploadState::Ready(candidate);
        Ok(())
    }

    /// Drop the pending document so another can be picked.
    ///
    /// Returns whether selection was reopened; false while analyzing or
    /// showing results.
    pub fn change_file(&mut self) -> bool {
        match self.state {
            UploadState::Idle => true,
            UploadState::Ready(_) => {
                self.state = UploadState::Idle;
                true
            }
            UploadState::Analyzing { .. } | UploadState::Results(_) => false,
        }
    }

    /// Move to Analyzing and hand back the candidate to send.
    pub fn submit(&mut self) -> Result<UploadCandidate, UploadError> {
        match std::mem::take(&mut self.state) {
            UploadState::Ready(candidate) => {
                self.state = UploadState::Analyzing {
                    filename: candidate.name.clone(),
                };
                Ok(candidate)
            }
            UploadState::Analyzing { filename } => {
                self.state = UploadState::Analyzing { filename };
                Err(UploadError::AnalysisInProgress)
            }
            other => {
                self.state = other;
                Err(UploadError::NoFileSelected)
            }
        }
    }

    /// Apply the outcome of the request started by [`submit`](Self::submit).
    ///
    /// Returns the message for the blocking notification when the request
    /// failed. Outcomes arriving outside Analyzing are ignored.
    pub fn finish(
        &mut self,
        outcome: Result<AnalysisResult, ClientError>,
        service_url: &str,
    ) -> Option<String> {
        let filename = match &self.state {
            UploadState::Analyzing { filename } => filename.clone(),
            _ => {
                log::warn!("Ignoring analysis outcome received outside of Analyzing");
                return None;
            }
        };

        match outcome {
            Ok(result) => {
                log::info!(
                    "Analysis of {} complete: {}% AI, {} sections",
                    filename,
                    result.ai_percentage,
                    result.sections.len()
                );
                self.state = UploadState::Results(result);
                None
            }
            Err(err) => {
                log::error!("Analysis of {} failed: {}", filename, err);
                self.state = UploadState::Idle;
                Some(failure_notice(service_url))
            }
        }
    }

    /// Discard the result and any pending document. Ignored while analyzing.
    pub fn reset(&mut self) {
        if !self.is_analyzing() {
            self.state = UploadState::Idle;
        }
    }
}

/// The single user-facing message for every remote failure.
pub fn failure_notice(service_url: &str) -> String {
    format!(
        "Failed to analyze document. Please make sure the analysis service is reachable at {}",
        service_url
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::fixtures::sample_result;
    use crate::upload::MAX_UPLOAD_BYTES;

    const URL: &str = "http://localhost:8000";

    fn pdf(name: &str) -> UploadCandidate {
        UploadCandidate::new(name, "application/pdf", b"%PDF-1.7 test".to_vec())
    }

    fn analyzing() -> UploadController {
        let mut controller = UploadController::new();
        controller.select_file(pdf("paper.pdf")).unwrap();
        controller.submit().unwrap();
        controller
    }

    #[test]
    fn test_select_moves_to_ready() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("a.pdf")).unwrap();
        assert_eq!(controller.pending().map(|c| c.name.as_str()), Some("a.pdf"));
    }

    #[test]
    fn test_select_stores_canonical_media_type() {
        let mut controller = UploadController::new();
        controller
            .select_file(UploadCandidate::new("a.pdf", " Application/PDF ", b"%PDF".to_vec()))
            .unwrap();
        assert_eq!(
            controller.pending().map(|c| c.media_type.as_str()),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_reselect_replaces_pending_candidate() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("a.pdf")).unwrap();
        controller
            .select_file(UploadCandidate::new("b.txt", "text/plain", b"hello".to_vec()))
            .unwrap();
        assert_eq!(controller.pending().map(|c| c.name.as_str()), Some("b.txt"));
    }

    #[test]
    fn test_invalid_type_keeps_previous_candidate() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("keep.pdf")).unwrap();

        let err = controller
            .select_file(UploadCandidate::new("photo.png", "image/png", vec![1, 2, 3]))
            .unwrap_err();

        assert!(matches!(err, UploadError::InvalidFileType { .. }));
        assert_eq!(controller.pending().map(|c| c.name.as_str()), Some("keep.pdf"));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let mut controller = UploadController::new();
        let big = UploadCandidate::new(
            "huge.txt",
            "text/plain",
            vec![b'x'; (MAX_UPLOAD_BYTES + 1) as usize],
        );
        assert_eq!(
            controller.select_file(big),
            Err(UploadError::FileTooLarge {
                size: MAX_UPLOAD_BYTES + 1
            })
        );
        assert_eq!(controller.state(), &UploadState::Idle);
    }

    #[test]
    fn test_submit_without_file_fails() {
        let mut controller = UploadController::new();
        assert_eq!(controller.submit(), Err(UploadError::NoFileSelected));
        assert_eq!(controller.state(), &UploadState::Idle);
    }

    #[test]
    fn test_submit_hands_over_candidate() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("paper.pdf")).unwrap();
        let candidate = controller.submit().unwrap();
        assert_eq!(candidate.name, "paper.pdf");
        assert_eq!(
            controller.state(),
            &UploadState::Analyzing {
                filename: "paper.pdf".to_string()
            }
        );
        assert!(controller.pending().is_none());
    }

    #[test]
    fn test_analyzing_blocks_resubmit_and_reselect() {
        let mut controller = analyzing();
        assert_eq!(controller.submit(), Err(UploadError::AnalysisInProgress));
        assert_eq!(
            controller.select_file(pdf("other.pdf")),
            Err(UploadError::SelectionLocked)
        );
        assert!(!controller.change_file());
        controller.reset();
        assert!(controller.is_analyzing());
    }

    #[test]
    fn test_success_moves_to_results() {
        let mut controller = analyzing();
        let notice = controller.finish(Ok(sample_result()), URL);
        assert_eq!(notice, None);
        assert_eq!(controller.result(), Some(&sample_result()));
    }

    #[test]
    fn test_timeout_returns_to_idle_with_one_notice() {
        let mut controller = analyzing();
        let notice = controller.finish(Err(ClientError::Timeout(Duration::from_secs(30))), URL);

        let notice = notice.expect("failure should produce a notification");
        assert!(notice.contains(URL));
        assert_eq!(controller.state(), &UploadState::Idle);
        assert!(controller.select_file(pdf("retry.pdf")).is_ok());
    }

    #[test]
    fn test_every_remote_failure_gives_same_notice() {
        let failures = [
            ClientError::Transport("connection refused".to_string()),
            ClientError::Timeout(Duration::from_secs(30)),
            ClientError::Service {
                status: 500,
                detail: "boom".to_string(),
            },
            ClientError::InvalidResponse("missing field".to_string()),
        ];
        for failure in failures {
            let mut controller = analyzing();
            assert_eq!(controller.finish(Err(failure), URL), Some(failure_notice(URL)));
            assert_eq!(controller.result(), None);
        }
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("a.pdf")).unwrap();
        let before = controller.clone();
        assert_eq!(controller.finish(Ok(sample_result()), URL), None);
        assert_eq!(controller, before);
    }

    #[test]
    fn test_results_lock_selection_until_reset() {
        let mut controller = analyzing();
        controller.finish(Ok(sample_result()), URL);
        assert_eq!(
            controller.select_file(pdf("next.pdf")),
            Err(UploadError::SelectionLocked)
        );
        assert!(!controller.change_file());

        controller.reset();
        assert_eq!(controller.state(), &UploadState::Idle);
        assert!(controller.result().is_none());
        assert!(controller.select_file(pdf("next.pdf")).is_ok());
    }

    #[test]
    fn test_change_file_discards_pending() {
        let mut controller = UploadController::new();
        controller.select_file(pdf("a.pdf")).unwrap();
        assert!(controller.change_file());
        assert_eq!(controller.state(), &UploadState::Idle);
        assert_eq!(controller.submit(), Err(UploadError::NoFileSelected));
    }
}
