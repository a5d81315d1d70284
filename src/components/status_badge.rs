use leptos::prelude::*;

/// Outcome of one health check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Unknown,
}

impl CheckStatus {
    pub fn from_flag(ok: bool) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Pass => "\u{2713}",
            Self::Fail => "\u{2717}",
            Self::Unknown => "?",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Pass => "status-badge status-pass",
            Self::Fail => "status-badge status-fail",
            Self::Unknown => "status-badge status-unknown",
        }
    }
}

#[component]
pub fn StatusBadge(
    /// What was checked, e.g. "Service reachable"
    #[prop(into)]
    label: String,
    status: CheckStatus,
    /// Extra context such as the service URL
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="health-item">
            <span class=status.class()>{status.icon()}</span>
            <span class="health-name">{label}</span>
            <span class="health-detail">{detail.unwrap_or_default()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(CheckStatus::from_flag(true), CheckStatus::Pass);
        assert_eq!(CheckStatus::from_flag(false), CheckStatus::Fail);
        assert!(CheckStatus::Unknown.class().ends_with("status-unknown"));
    }
}
