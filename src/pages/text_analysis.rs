use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{ApiContext, TextContext, TextState};
use crate::browser;
use crate::components::analysis_report::AnalysisReport;
use crate::upload::MIN_TEXT_CHARS;

#[component]
pub fn TextAnalysisPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<TextContext>();
    let TextContext { text, state } = session;

    let on_analyze = move |_| {
        let body = match session.begin() {
            Ok(body) => body,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };

        let client = api.client();
        spawn_local(async move {
            let outcome = client.analyze_text(&body).await;
            if let Some(message) = session.finish(outcome, &client.config().base_url) {
                browser::alert(&message);
            }
        });
    };

    let on_reset = Callback::new(move |_: ()| session.reset());

    let char_count = move || text.with(|t| t.trim().chars().count());

    view! {
        <div class="page text-analysis-page">
            <h2>"Analyze Text"</h2>
            <p class="page-description">
                "Paste text directly instead of uploading a file."
            </p>

            {move || match state.get() {
                TextState::Complete(result) => view! {
                    <AnalysisReport result=result on_reset=on_reset />
                }.into_any(),

                current => {
                    let analyzing = current == TextState::Analyzing;
                    view! {
                        <div class="card text-input-card">
                            <textarea
                                class="input text-input"
                                rows="14"
                                placeholder="Paste the text you want to check..."
                                prop:value=move || text.get()
                                disabled=analyzing
                                on:input=move |ev| text.set(event_target_value(&ev))
                            ></textarea>
                            <div class="text-input-footer">
                                <span class="hint">
                                    {move || format!("{} characters (minimum {})", char_count(), MIN_TEXT_CHARS)}
                                </span>
                                <button
                                    class="btn btn-primary"
                                    on:click=on_analyze
                                    disabled=move || analyzing || char_count() < MIN_TEXT_CHARS
                                >
                                    {if analyzing { "Analyzing..." } else { "Analyze Text" }}
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
