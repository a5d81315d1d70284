//! Plain-text export of an analysis.

use std::fmt::Write;

use crate::analysis::AnalysisResult;
use crate::presenter::format_percent;

/// Render the downloadable report. Sections appear in document order.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "AI Content Analysis Report");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(out);
    let _ = writeln!(out, "File: {}", result.filename);
    let _ = writeln!(out, "Total Words: {}", result.total_words);
    let _ = writeln!(out, "AI-Generated Content: {}", format_percent(result.ai_percentage));
    let _ = writeln!(out, "Human-Written Content: {}", format_percent(result.human_percentage));
    let _ = writeln!(out, "Overall Confidence: {}", format_percent(result.confidence));
    if let Some(model) = &result.detected_model {
        let _ = writeln!(out, "Detected Model: {}", model);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Section Analysis:");
    for (i, section) in result.sections.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Section {} ({})", i + 1, section.kind.tag());
        let _ = writeln!(out, "Confidence: {}", format_percent(section.confidence));
        let _ = writeln!(out, "Text: {}", section.text);
    }

    let recommendations = result.recommendations();
    if !recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommendations:");
        for (i, rec) in recommendations.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, rec);
        }
    }

    out
}

/// Hands out `analysis-report-<millis>.txt` names that never repeat within
/// a session, even when two exports land in the same millisecond.
#[derive(Debug, Default, Clone)]
pub struct ReportNamer {
    last_stamp: Option<i64>,
}

impl ReportNamer {
    pub fn next_name(&mut self, now_millis: i64) -> String {
        let stamp = match self.last_stamp {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_stamp = Some(stamp);
        report_filename(stamp)
    }
}

pub fn report_filename(millis: i64) -> String {
    format!("analysis-report-{}.txt", millis)
}
