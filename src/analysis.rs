//! Result types returned by the analysis service.
//!
//! The payload is decoded into strict types and then checked with
//! [`AnalysisResult::validate`] before anything is rendered.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Classification of one section of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Ai,
    Human,
}

impl SectionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI-Generated",
            Self::Human => "Human-Written",
        }
    }

    /// Uppercase tag used in exported reports.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Human => "HUMAN",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Ai => "section-ai",
            Self::Human => "section-human",
        }
    }
}

/// A contiguous span of the analyzed document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub confidence: f64,
    pub start_index: u64,
    pub end_index: u64,
}

/// Full output of one document analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub filename: String,
    pub total_words: u64,
    pub ai_percentage: f64,
    pub human_percentage: f64,
    pub confidence: f64,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

/// Readiness probe response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(rename = "ai_model_loaded")]
    pub model_loaded: bool,
}

impl AnalysisResult {
    /// Check the invariants the presenter relies on.
    ///
    /// `ai_percentage + human_percentage == 100` is deliberately not checked;
    /// the service owns that rounding.
    pub fn validate(&self) -> Result<(), String> {
        check_score("aiPercentage", self.ai_percentage)?;
        check_score("humanPercentage", self.human_percentage)?;
        check_score("confidence", self.confidence)?;

        let mut seen = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !seen.insert(section.id) {
                return Err(format!("duplicate section id {}", section.id));
            }
            check_score(&format!("sections[{}].confidence", section.id), section.confidence)?;
            if section.start_index >= section.end_index {
                return Err(format!(
                    "section {} has empty or inverted range {}..{}",
                    section.id, section.start_index, section.end_index
                ));
            }
        }

        Ok(())
    }

    pub fn recommendations(&self) -> &[String] {
        self.recommendations.as_deref().unwrap_or_default()
    }

    pub fn count_of(&self, kind: SectionKind) -> usize {
        self.sections.iter().filter(|s| s.kind == kind).count()
    }
}

fn check_score(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be within 0-100, got {}", field, value))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    const SERVICE_PAYLOAD: &str = r#"{
        "filename": "report.pdf",
        "totalWords": 120,
        "aiPercentage": 72.5,
        "humanPercentage": 27.5,
        "confidence": 91,
        "sections": [
            {"id": 0, "text": "First part.", "type": "ai", "confidence": 93.2, "startIndex": 0, "endIndex": 11},
            {"id": 1, "text": "Second part.", "type": "human", "confidence": 70, "startIndex": 12, "endIndex": 24}
        ],
        "detectedModel": "Claude",
        "recommendations": ["Review flagged paragraphs"]
    }"#;

    #[test]
    fn test_decodes_service_payload() {
        let result: AnalysisResult = serde_json::from_str(SERVICE_PAYLOAD).unwrap();
        assert_eq!(result.filename, "report.pdf");
        assert_eq!(result.total_words, 120);
        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].kind, SectionKind::Ai);
        assert_eq!(result.sections[1].kind, SectionKind::Human);
        assert_eq!(result.sections[1].end_index, 24);
        assert_eq!(result.detected_model.as_deref(), Some("Claude"));
        assert_eq!(result.recommendations(), ["Review flagged paragraphs"]);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent_or_null() {
        let json = r#"{
            "filename": "notes.txt",
            "totalWords": 3,
            "aiPercentage": 0,
            "humanPercentage": 100,
            "confidence": 50,
            "sections": [],
            "detectedModel": null
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.detected_model, None);
        assert_eq!(result.recommendations, None);
        assert!(result.recommendations().is_empty());
    }

    #[test]
    fn test_unknown_section_type_is_rejected() {
        let json = SERVICE_PAYLOAD.replace(r#""type": "human""#, r#""type": "mixed""#);
        assert!(serde_json::from_str::<AnalysisResult>(&json).is_err());
    }

    #[test]
    fn test_negative_word_count_is_rejected() {
        let json = SERVICE_PAYLOAD.replace(r#""totalWords": 120"#, r#""totalWords": -1"#);
        assert!(serde_json::from_str::<AnalysisResult>(&json).is_err());
    }

    #[test]
    fn test_percentages_need_not_sum_to_100() {
        let mut result = sample_result();
        result.ai_percentage = 60.0;
        result.human_percentage = 30.0;
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_percentage_fails_validation() {
        let mut result = sample_result();
        result.ai_percentage = 120.0;
        let err = result.validate().unwrap_err();
        assert!(err.contains("aiPercentage"), "unexpected message: {}", err);

        let mut result = sample_result();
        result.confidence = f64::NAN;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_inverted_section_range_fails_validation() {
        let mut result = sample_result();
        result.sections[1].end_index = result.sections[1].start_index;
        let err = result.validate().unwrap_err();
        assert!(err.contains("section 2"), "unexpected message: {}", err);
    }

    #[test]
    fn test_duplicate_section_ids_fail_validation() {
        let mut result = sample_result();
        result.sections[2].id = 1;
        assert_eq!(result.validate(), Err("duplicate section id 1".to_string()));
    }

    #[test]
    fn test_health_status_field_names() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "ai_model_loaded": true}"#).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.model_loaded);
    }

    #[test]
    fn test_count_of_kind() {
        let result = sample_result();
        assert_eq!(result.count_of(SectionKind::Ai), 2);
        assert_eq!(result.count_of(SectionKind::Human), 1);
    }
}
