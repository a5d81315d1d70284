//! Document analysis page.
//!
//! Users drop or browse for a PDF, DOCX or TXT file, submit it to the
//! analysis service and review the breakdown.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{ApiContext, UploadContext};
use crate::browser;
use crate::components::analysis_report::AnalysisReport;
use crate::components::drop_zone::DocumentDropZone;
use crate::upload::UploadCandidate;
use crate::workflow::UploadState;

#[component]
pub fn AnalyzerPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<UploadContext>();
    let controller = session.controller;
    // Set by "Change File" so the next drop zone opens the picker.
    let open_picker = StoredValue::new(false);

    let on_select = Callback::new(move |candidate: UploadCandidate| {
        if let Err(e) = session.select_file(candidate) {
            browser::alert(&e.to_string());
        }
    });

    let on_change_file = move |_| {
        // Armed before the update so the remounted drop zone sees it.
        open_picker.set_value(controller.with_untracked(|c| c.pending().is_some()));
        controller.update(|c| {
            c.change_file();
        });
    };

    let on_analyze = move |_| {
        let candidate = match session.submit() {
            Ok(candidate) => candidate,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };

        let client = api.client();
        spawn_local(async move {
            let outcome = client.analyze_document(&candidate).await;
            if let Some(message) = session.finish(outcome, &client.config().base_url) {
                browser::alert(&message);
            }
        });
    };

    let on_reset = Callback::new(move |_: ()| controller.update(|c| c.reset()));

    view! {
        <div class="page analyzer-page">
            <style>{include_str!("analyzer.css")}</style>

            {move || controller.with(|c| match c.state() {
                UploadState::Results(result) => view! {
                    <AnalysisReport result=result.clone() on_reset=on_reset />
                }.into_any(),

                UploadState::Idle => {
                    let mut pick = false;
                    open_picker.update_value(|v| pick = std::mem::take(v));
                    view! {
                        <Hero />
                        <DocumentDropZone on_select=on_select open_picker=pick />
                    }.into_any()
                }

                UploadState::Ready(candidate) => {
                    let name = candidate.name.clone();
                    let details = format!(
                        "{} \u{2022} {} \u{2022} Ready to analyze",
                        candidate.document_type().map(|t| t.label()).unwrap_or("Unknown"),
                        candidate.size_display()
                    );
                    view! {
                        <Hero />
                        <div class="card selected-file">
                            <h3 class="selected-name">{name}</h3>
                            <p class="selected-details">{details}</p>
                            <div class="action-buttons">
                                <button class="btn btn-secondary" on:click=on_change_file>
                                    "Change File"
                                </button>
                                <button class="btn btn-primary" on:click=on_analyze>
                                    "Analyze Document"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }

                UploadState::Analyzing { filename } => {
                    let filename = filename.clone();
                    view! {
                        <Hero />
                        <div class="card selected-file analyzing-state">
                            <h3 class="selected-name">{filename}</h3>
                            <div class="loading-indicator">
                                <div class="spinner"></div>
                                <p>"Analyzing..."</p>
                                <p class="hint">"This can take up to 30 seconds"</p>
                            </div>
                            <div class="action-buttons">
                                <button class="btn btn-secondary" disabled=true>"Change File"</button>
                                <button class="btn btn-primary" disabled=true>"Analyzing..."</button>
                            </div>
                        </div>
                    }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Is it AI or human?"</h2>
            <p class="page-description">
                "Upload a document to see how much of it reads as AI-generated, which model likely wrote it, and which passages were flagged."
            </p>
        </div>
    }
}
