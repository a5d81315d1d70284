use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::analysis::HealthStatus;
use crate::app::ApiContext;
use crate::components::status_badge::{CheckStatus, StatusBadge};

/// Diagnostics only: nothing here feeds back into the upload workflow.
#[component]
pub fn HealthPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthStatus>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        let client = api.client();
        spawn_local(async move {
            match client.check_health().await {
                Ok(status) => {
                    log::info!("Service health: {:?}", status);
                    set_report.set(Some(status));
                }
                Err(e) => {
                    log::warn!("Health check failed: {}", e);
                    set_report.set(None);
                    set_error.set(Some(format!("Health check failed: {}", e)));
                }
            }
            set_checking.set(false);
        });
    };

    // Auto-run health check on mount
    Effect::new(move |_| {
        do_health_check();
    });

    let service_url = move || api.config.with(|c| c.base_url.clone());

    view! {
        <div class="page health-page">
            <h2>"Service Health"</h2>
            <p class="page-description">
                "Check that the analysis service is reachable and its detection model is loaded."
            </p>

            <button
                class="btn btn-primary"
                on:click=move |_| do_health_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Run Health Check" }}
            </button>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="health-results">
                            <StatusBadge label="Service reachable" status=CheckStatus::Fail detail=service_url() />
                            <StatusBadge label="Detection model loaded" status=CheckStatus::Unknown />
                            <div class="health-error">
                                <span class="status-text status-error">{e}</span>
                            </div>
                        </div>
                    }
                })
            }}

            {move || {
                report.get().map(|r| {
                    let model_status = CheckStatus::from_flag(r.model_loaded);
                    let model_detail = if r.model_loaded { "Ready" } else { "Not loaded" };
                    let summary_class = if r.model_loaded { "summary-all-pass" } else { "summary-partial" };

                    view! {
                        <div class="health-results">
                            <StatusBadge label="Service reachable" status=CheckStatus::Pass detail=service_url() />
                            <StatusBadge label="Detection model loaded" status=model_status detail=model_detail />

                            <div class={format!("health-summary {}", summary_class)}>
                                {format!("Service status: {}", r.status)}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
