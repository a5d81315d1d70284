//! Document drop zone with drag-and-drop and a browse button.
//!
//! Both input paths funnel into one handler, which pre-checks type and size
//! from the file metadata before any bytes are read.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser;
use crate::upload::{self, DocumentType, UploadCandidate, ACCEPT_ATTR};

#[component]
pub fn DocumentDropZone(
    /// Receives the loaded document; the controller does the final validation.
    on_select: Callback<UploadCandidate>,
    /// Open the file picker as soon as the zone is mounted.
    #[prop(optional)]
    open_picker: bool,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    // One-shot: the input remounts after each read.
    let pick_pending = StoredValue::new(open_picker);
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let mut pick = false;
            pick_pending.update_value(|p| pick = std::mem::take(p));
            if pick {
                input.click();
            }
        }
    });

    let (is_over, set_is_over) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let file_input_id = "document-file-input";

    let accept_file = move |file: web_sys::File| {
        let name = file.name();
        let mime = file.type_();
        if let Err(e) = upload::validate_file(&mime, file.size() as u64) {
            log::info!("Rejected {}: {}", name, e);
            browser::alert(&e.to_string());
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            let loaded = browser::read_file_bytes(&file).await;
            set_is_loading.set(false);
            match loaded {
                Ok(bytes) => on_select.run(UploadCandidate::new(name, mime, bytes)),
                Err(e) => {
                    log::error!("Failed to read {}: {}", name, e);
                    browser::alert(&e);
                }
            }
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            accept_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
        // Allow picking the same file again after a rejection.
        input.set_value("");
    };

    let formats = DocumentType::ALL
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            class:drop-zone-loading=move || is_loading.get()
            on:dragenter=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <style>{include_str!("drop_zone.css")}</style>
            <Show
                when=move || is_loading.get()
                fallback=move || {
                    let formats = formats.clone();
                    view! {
                        <div class="drop-zone-content">
                            <div class="drop-icon">"[upload]"</div>
                            <p class="drop-main">"Upload Your Document"</p>
                            <p class="drop-hint">"Drag and drop your file here, or"</p>
                            <label for=file_input_id class="btn btn-primary">
                                "Choose File"
                            </label>
                            <input
                                type="file"
                                id=file_input_id
                                node_ref=input_ref
                                accept=ACCEPT_ATTR
                                style="display: none"
                                on:change=on_input_change
                            />
                            <p class="drop-formats">
                                {format!("Supported formats: {} (Max 10MB)", formats)}
                            </p>
                        </div>
                    }
                }
            >
                <div class="drop-zone-loading-content">
                    <div class="spinner"></div>
                    <p>"Reading document..."</p>
                </div>
            </Show>
        </div>
    }
}
