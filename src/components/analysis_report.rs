//! Results view for one analysis.
//!
//! Shows the headline statistics, the AI/human distribution bar, the detected
//! model, a filterable list of sections and any recommendations.

use leptos::prelude::*;

use crate::analysis::{AnalysisResult, Section, SectionKind};
use crate::browser;
use crate::presenter::{format_percent, stat_cards, ProportionBar, SectionFilter};
use crate::report::{format_report, ReportNamer};

#[component]
pub fn AnalysisReport(
    result: AnalysisResult,
    /// Called by the "New Analysis" button.
    on_reset: Callback<()>,
) -> impl IntoView {
    let (filter, set_filter) = signal(SectionFilter::default());
    let namer = StoredValue::new(ReportNamer::default());

    let result = StoredValue::new(result);
    let snapshot = result.get_value();
    let bar = ProportionBar::from_result(&snapshot);
    let cards = stat_cards(&snapshot);

    let on_export = move |_| {
        let mut filename = String::new();
        namer.update_value(|n| filename = n.next_name(browser::now_millis()));
        let contents = result.with_value(format_report);
        match browser::download_text(&filename, &contents) {
            Ok(()) => log::info!("Exported {}", filename),
            Err(e) => {
                log::error!("Export failed: {}", e);
                browser::alert(&format!("Export failed: {}", e));
            }
        }
    };

    let visible_sections = move || {
        let mode = filter.get();
        result.with_value(|r| {
            mode.apply(&r.sections)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="analysis-report">
            <style>{include_str!("analysis_report.css")}</style>

            <div class="report-header">
                <div>
                    <h2>"Analysis Results"</h2>
                    <p class="report-filename">{snapshot.filename.clone()}</p>
                </div>
                <div class="action-buttons">
                    <button class="btn btn-secondary" on:click=on_export>
                        "Export Report"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| on_reset.run(())>
                        "New Analysis"
                    </button>
                </div>
            </div>

            <div class="stats-grid">
                {cards.into_iter().map(|card| view! {
                    <div class=format!("stats-card {}", card.class)>
                        <div class="stats-number">{card.value}</div>
                        <div class="stats-label">{card.label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="card distribution">
                <h3>"Content Distribution"</h3>
                <div class="distribution-row">
                    <span class="distribution-label label-ai">"AI-Generated"</span>
                    <span class="distribution-value">{format_percent(bar.ai_width)}</span>
                </div>
                <div class="bar-track">
                    <div class="bar-fill fill-ai" style=bar.ai_style()></div>
                </div>
                <div class="distribution-row">
                    <span class="distribution-label label-human">"Human-Written"</span>
                    <span class="distribution-value">{format_percent(bar.human_width)}</span>
                </div>
                <div class="bar-track">
                    <div class="bar-fill fill-human" style=bar.human_style()></div>
                </div>
            </div>

            {snapshot.detected_model.clone().map(|model| view! {
                <div class="card model-callout">
                    <h4>"Detected AI Model"</h4>
                    <p>{model}</p>
                </div>
            })}

            <div class="card sections">
                <div class="sections-header">
                    <h3>"Content Analysis"</h3>
                    <div class="filter-buttons">
                        {SectionFilter::ALL.into_iter().map(|mode| {
                            let count = match mode {
                                SectionFilter::All => snapshot.sections.len(),
                                SectionFilter::AiOnly => snapshot.count_of(SectionKind::Ai),
                                SectionFilter::HumanOnly => snapshot.count_of(SectionKind::Human),
                            };
                            view! {
                                <button
                                    class="btn btn-filter"
                                    class:active=move || filter.get() == mode
                                    on:click=move |_| set_filter.set(mode)
                                >
                                    {format!("{} ({})", mode.label(), count)}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                {move || {
                    let sections = visible_sections();
                    if sections.is_empty() {
                        view! { <p class="sections-empty">"No sections match this filter."</p> }.into_any()
                    } else {
                        view! {
                            <div class="sections-list">
                                {sections.into_iter().map(|s| view! { <SectionCard section=s /> }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            {(!snapshot.recommendations().is_empty()).then(|| {
                let recs = snapshot.recommendations().to_vec();
                view! {
                    <div class="card recommendations">
                        <h3>"Recommendations"</h3>
                        <ul>
                            {recs.into_iter().map(|rec| view! { <li>{rec}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn SectionCard(section: Section) -> impl IntoView {
    let kind = section.kind;
    view! {
        <div class=format!("section-card {}", kind.css_class())>
            <div class="section-meta">
                <span class="section-kind">{kind.label()}</span>
                <span class="section-confidence">
                    "Confidence: " {format_percent(section.confidence)}
                </span>
            </div>
            <p class="section-text">{section.text}</p>
        </div>
    }
}
