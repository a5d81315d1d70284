use leptos::prelude::*;

use crate::app::ApiContext;
use crate::config::{ApiConfig, API_URL_PREFERENCE};
use crate::preferences;
use crate::theme::{Theme, ThemeContext, THEME_PREFERENCE};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    let (api_url, set_api_url) = signal(preferences::load_or_none(API_URL_PREFERENCE).unwrap_or_default());
    let (url_status, set_url_status) = signal::<Option<String>>(None);
    let (theme_status, set_theme_status) = signal::<Option<String>>(None);

    let save_api_url = move |_| {
        let url = api_url.get_untracked();
        let url = url.trim();
        let saved = if url.is_empty() {
            preferences::remove_preference(API_URL_PREFERENCE)
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            Err("URL must start with http:// or https://".to_string())
        } else {
            preferences::set_preference(API_URL_PREFERENCE, url)
        };

        match saved {
            Ok(()) => {
                let config = ApiConfig::from_environment(Some(url));
                log::info!("Analysis service set to {}", config.base_url);
                set_url_status.set(Some(format!("Using {}", config.base_url)));
                api.config.set(config);
            }
            Err(e) => set_url_status.set(Some(format!("Failed to save: {}", e))),
        }
    };

    let on_theme_change = move |ev: web_sys::Event| {
        let selected = Theme::parse(&event_target_value(&ev));
        set_theme.set(selected);
        if let Err(e) = preferences::set_preference(THEME_PREFERENCE, selected.as_str()) {
            set_theme_status.set(Some(format!("Failed to save theme: {}", e)));
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Analysis Service"</h3>
                <p class="section-description">
                    "Leave blank to use the address this app was built with, or the current site."
                </p>

                <div class="form-group">
                    <label for="api-url">"Service URL"</label>
                    <div class="input-row">
                        <input
                            id="api-url"
                            type="text"
                            placeholder="http://localhost:8000"
                            class="input"
                            prop:value=move || api_url.get()
                            on:input=move |ev| {
                                set_api_url.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-save" on:click=save_api_url>"Save"</button>
                    </div>
                    <span class="status-text">
                        {move || url_status.get().unwrap_or_else(|| {
                            format!("Currently using {}", api.config.with(|c| c.base_url.clone()))
                        })}
                    </span>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="form-group">
                    <label for="theme-select">"Theme"</label>
                    <select id="theme-select" class="input" on:change=on_theme_change>
                        {Theme::ALL.into_iter().map(|t| view! {
                            <option value=t.as_str() selected=move || theme.get() == t>
                                {t.label()}
                            </option>
                        }).collect::<Vec<_>>()}
                    </select>
                    <Show when=move || theme_status.get().is_some()>
                        <span class="status-text">{move || theme_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
