//! Pure projections of an [`AnalysisResult`] into what the results view shows.

use crate::analysis::{AnalysisResult, Section, SectionKind};

/// Which sections the content list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionFilter {
    #[default]
    All,
    AiOnly,
    HumanOnly,
}

impl SectionFilter {
    pub const ALL: [SectionFilter; 3] = [Self::All, Self::AiOnly, Self::HumanOnly];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Content",
            Self::AiOnly => "AI Only",
            Self::HumanOnly => "Human Only",
        }
    }

    pub fn matches(self, section: &Section) -> bool {
        match self {
            Self::All => true,
            Self::AiOnly => section.kind == SectionKind::Ai,
            Self::HumanOnly => section.kind == SectionKind::Human,
        }
    }

    /// Order-preserving selection; the result itself is left untouched.
    pub fn apply(self, sections: &[Section]) -> Vec<&Section> {
        sections.iter().filter(|s| self.matches(s)).collect()
    }
}

/// One of the four headline statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub class: &'static str,
}

/// Segment widths (percent of the bar) for the AI/human distribution bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionBar {
    pub ai_width: f64,
    pub human_width: f64,
}

impl ProportionBar {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            ai_width: result.ai_percentage,
            human_width: result.human_percentage,
        }
    }

    pub fn ai_style(&self) -> String {
        format!("width: {}%", self.ai_width)
    }

    pub fn human_style(&self) -> String {
        format!("width: {}%", self.human_width)
    }
}

pub fn stat_cards(result: &AnalysisResult) -> [StatCard; 4] {
    [
        StatCard {
            label: "AI Generated",
            value: format_percent(result.ai_percentage),
            class: "stat-ai",
        },
        StatCard {
            label: "Human Written",
            value: format_percent(result.human_percentage),
            class: "stat-human",
        },
        StatCard {
            label: "Confidence",
            value: format_percent(result.confidence),
            class: "stat-confidence",
        },
        StatCard {
            label: "Total Words",
            value: result.total_words.to_string(),
            class: "stat-words",
        },
    ]
}

/// "65%" for whole numbers, "72.5%" otherwise.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{sample_result, section};

    #[test]
    fn test_bar_widths_equal_percentages() {
        let result = sample_result();
        let bar = ProportionBar::from_result(&result);
        assert_eq!(bar.ai_width, 65.0);
        assert_eq!(bar.human_width, 35.0);
        assert_eq!(bar.ai_style(), "width: 65%");
        assert_eq!(bar.human_style(), "width: 35%");
    }

    #[test]
    fn test_ai_filter_keeps_document_order() {
        let result = sample_result();
        let ids: Vec<i64> = SectionFilter::AiOnly
            .apply(&result.sections)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_human_filter_and_all() {
        let result = sample_result();
        let human: Vec<i64> = SectionFilter::HumanOnly
            .apply(&result.sections)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(human, vec![2]);
        assert_eq!(SectionFilter::All.apply(&result.sections).len(), 3);
    }

    #[test]
    fn test_filter_does_not_mutate_result() {
        let result = sample_result();
        let before = result.clone();
        let _ = SectionFilter::HumanOnly.apply(&result.sections);
        assert_eq!(result, before);
    }

    #[test]
    fn test_filter_on_interleaved_sections() {
        let sections = vec![
            section(10, SectionKind::Human, "a"),
            section(4, SectionKind::Ai, "b"),
            section(7, SectionKind::Human, "c"),
            section(1, SectionKind::Ai, "d"),
        ];
        let ai: Vec<&str> = SectionFilter::AiOnly
            .apply(&sections)
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(ai, vec!["b", "d"]);
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards(&sample_result());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["65%", "35%", "88.5%", "412"]);
    }
}
