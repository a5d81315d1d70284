use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::analysis::AnalysisResult;
use crate::api::AnalysisClient;
use crate::components::sidebar::Sidebar;
use crate::config::{ApiConfig, API_URL_PREFERENCE};
use crate::error::{ClientError, UploadError};
use crate::pages::analyzer::AnalyzerPage;
use crate::pages::health::HealthPage;
use crate::pages::settings::SettingsPage;
use crate::pages::text_analysis::TextAnalysisPage;
use crate::preferences;
use crate::theme::{apply_theme, Theme, ThemeContext, THEME_PREFERENCE};
use crate::upload::{validate_text, UploadCandidate};
use crate::workflow::{failure_notice, UploadController};

/// Where requests go; updated from the Settings page.
#[derive(Clone, Copy)]
pub struct ApiContext {
    pub config: RwSignal<ApiConfig>,
}

impl ApiContext {
    /// Client for a single request, bound to the current configuration.
    pub fn client(&self) -> AnalysisClient {
        AnalysisClient::new(self.config.get_untracked())
    }
}

/// Document workflow, owned by the app so it outlives page navigation.
#[derive(Clone, Copy)]
pub struct UploadContext {
    pub controller: RwSignal<UploadController>,
}

impl UploadContext {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(UploadController::new()),
        }
    }

    pub fn select_file(&self, candidate: UploadCandidate) -> Result<(), UploadError> {
        let mut outcome = Ok(());
        self.controller.update(|c| outcome = c.select_file(candidate));
        outcome
    }

    pub fn submit(&self) -> Result<UploadCandidate, UploadError> {
        let mut submitted = Err(UploadError::NoFileSelected);
        self.controller.update(|c| submitted = c.submit());
        submitted
    }

    /// Returns the failure notice, if any.
    pub fn finish(
        &self,
        outcome: Result<AnalysisResult, ClientError>,
        service_url: &str,
    ) -> Option<String> {
        let mut notice = None;
        self.controller.update(|c| notice = c.finish(outcome, service_url));
        notice
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextState {
    Editing,
    Analyzing,
    Complete(AnalysisResult),
}

/// Pasted text and its analysis, kept across navigation like [`UploadContext`].
#[derive(Clone, Copy)]
pub struct TextContext {
    pub text: RwSignal<String>,
    pub state: RwSignal<TextState>,
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            state: RwSignal::new(TextState::Editing),
        }
    }

    /// Check the text and move to Analyzing, returning the text as typed.
    pub fn begin(&self) -> Result<String, UploadError> {
        if self.state.get_untracked() != TextState::Editing {
            return Err(UploadError::AnalysisInProgress);
        }
        let text = self.text.get_untracked();
        validate_text(&text)?;
        self.state.set(TextState::Analyzing);
        Ok(text)
    }

    /// Returns the failure notice, if any. Ignored outside Analyzing.
    pub fn finish(
        &self,
        outcome: Result<AnalysisResult, ClientError>,
        service_url: &str,
    ) -> Option<String> {
        if self.state.get_untracked() != TextState::Analyzing {
            log::warn!("Ignoring text analysis outcome received outside of Analyzing");
            return None;
        }
        match outcome {
            Ok(result) => {
                self.state.set(TextState::Complete(result));
                None
            }
            Err(e) => {
                log::error!("Text analysis failed: {}", e);
                self.state.set(TextState::Editing);
                Some(failure_notice(service_url))
            }
        }
    }

    /// Back to editing; the text is kept so it can be tweaked and re-submitted.
    pub fn reset(&self) {
        if self.state.get_untracked() != TextState::Analyzing {
            self.state.set(TextState::Editing);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let saved_theme = preferences::load_or_none(THEME_PREFERENCE)
        .map(|t| Theme::parse(&t))
        .unwrap_or_default();
    let (theme, set_theme) = signal(saved_theme);
    provide_context(ThemeContext { theme, set_theme });

    let saved_url = preferences::load_or_none(API_URL_PREFERENCE);
    let config = ApiConfig::from_environment(saved_url.as_deref());
    log::info!("Analysis service: {}", config.base_url);
    provide_context(ApiContext {
        config: RwSignal::new(config),
    });

    provide_context(UploadContext::new());
    provide_context(TextContext::new());

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=AnalyzerPage />
                        <Route path=path!("/text") view=TextAnalysisPage />
                        <Route path=path!("/health") view=HealthPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::sample_result;

    const URL: &str = "http://localhost:8000";

    fn in_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_pending_submission_blocks_other_holders() {
        in_owner(|| {
            let page = UploadContext::new();
            page.select_file(UploadCandidate::new("a.txt", "text/plain", b"abc".to_vec()))
                .unwrap();
            page.submit().unwrap();

            // A remounted page sees the same session.
            let remounted = page;
            assert_eq!(remounted.submit(), Err(UploadError::AnalysisInProgress));
            assert!(remounted.controller.with_untracked(|c| c.is_analyzing()));

            assert_eq!(page.finish(Ok(sample_result()), URL), None);
            assert_eq!(
                remounted.controller.with_untracked(|c| c.result().cloned()),
                Some(sample_result())
            );
        });
    }

    #[test]
    fn test_text_is_sent_as_typed() {
        in_owner(|| {
            let session = TextContext::new();
            session.text.set("  Padded paragraph text.  ".to_string());

            assert_eq!(session.begin().unwrap(), "  Padded paragraph text.  ");
            assert_eq!(session.state.get_untracked(), TextState::Analyzing);
            assert_eq!(session.begin(), Err(UploadError::AnalysisInProgress));
        });
    }

    #[test]
    fn test_short_text_stays_editing() {
        in_owner(|| {
            let session = TextContext::new();
            session.text.set("   tiny   ".to_string());

            assert!(matches!(session.begin(), Err(UploadError::TextTooShort { .. })));
            assert_eq!(session.state.get_untracked(), TextState::Editing);
        });
    }

    #[test]
    fn test_text_failure_returns_to_editing_with_notice() {
        in_owner(|| {
            let session = TextContext::new();
            session.text.set("Long enough to analyze.".to_string());
            session.begin().unwrap();

            let notice = session.finish(Err(ClientError::Transport("refused".into())), URL);

            assert_eq!(notice, Some(failure_notice(URL)));
            assert_eq!(session.state.get_untracked(), TextState::Editing);
            assert_eq!(session.text.get_untracked(), "Long enough to analyze.");
            assert_eq!(session.finish(Ok(sample_result()), URL), None);
        });
    }
}
