//! Upload surface: drop zone, file picker, sample dataset, preview and analyze.

use exodetect_core::format::format_file_size;
use exodetect_core::{AnalysisResult, Dataset, Upload};
use leptos::prelude::*;
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::use_config;
use crate::components::data_preview_modal::DataPreviewModal;

#[component]
pub fn DataUploader(
    /// Receives the view model once the service has classified the file
    on_upload: Callback<AnalysisResult>,
    is_analyzing: ReadSignal<bool>,
    set_analyzing: WriteSignal<bool>,
) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let accept = config.with_value(|c| c.accept_attr());
    let page_size = config.with_value(|c| c.preview.page_size);

    let (upload, set_upload) = signal::<Option<Upload>>(None);
    let (drag_active, set_drag_active) = signal(false);
    let (is_reading, set_is_reading) = signal(false);
    let (dataset, set_dataset) = signal::<Option<Dataset>>(None);
    let (show_preview, set_show_preview) = signal(false);
    let file_input_id = "file-upload";

    let load_file = move |file: web_sys::File| {
        set_is_reading.set(true);
        spawn_local(async move {
            match api::read_upload(file).await {
                Ok(u) => {
                    set_upload.try_set(Some(u));
                }
                Err(e) => error!("Error processing file: {}", e),
            }
            set_is_reading.try_set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            load_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        if let Some(file) = selected_file(&ev) {
            load_file(file);
        }
    };

    let on_preview = move |_: leptos::ev::MouseEvent| {
        let Some(u) = upload.get_untracked() else {
            return;
        };
        if let Some(ds) = api::preview(&u) {
            set_dataset.set(Some(ds));
            set_show_preview.set(true);
        }
    };

    let run_analysis = move || {
        let Some(u) = upload.get_untracked() else {
            return;
        };
        let config = config.get_value();
        set_analyzing.set(true);
        spawn_local(async move {
            api::analyze(&config, &u, |result| on_upload.run(result)).await;
            set_analyzing.try_set(false);
            set_show_preview.try_set(false);
        });
    };

    view! {
        <div class="card uploader">
            <div class="card-heading">
                <h3>"Upload Data"</h3>
                <p class="muted">"CSV, JSON, or FITS format"</p>
            </div>

            <div
                class="drop-zone"
                class:drop-zone-active=move || drag_active.get()
                class:drop-zone-loading=move || is_reading.get()
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=on_drop
            >
                <input
                    type="file"
                    id=file_input_id
                    accept=accept
                    style="display: none"
                    on:change=on_input_change
                />
                {move || match upload.get() {
                    None => view! {
                        <label for=file_input_id class="drop-zone-content">
                            <div class="drop-icon">"\u{2191}"</div>
                            <p class="drop-main">"Drop your data file here"</p>
                            <p class="drop-hint">"or click to browse"</p>
                            <span class="btn btn-secondary btn-small">"Select File"</span>
                        </label>
                    }.into_any(),
                    Some(u) => view! {
                        <div class="file-info">
                            <div>
                                <p class="file-name">{u.file_name.clone()}</p>
                                <p class="file-size">{format_file_size(u.size())}</p>
                            </div>
                            <button
                                class="btn-icon"
                                title="Remove file"
                                on:click=move |_| set_upload.set(None)
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>

            <div class="divider-label">
                <span>"or use sample data"</span>
            </div>
            <button
                class="btn btn-secondary btn-block"
                on:click=move |_| set_upload.set(Some(api::sample_upload()))
            >
                "Load Kepler Sample Dataset"
            </button>

            <div class="uploader-actions">
                <Show when=move || upload.with(Option::is_some)>
                    <button class="btn btn-secondary btn-block" on:click=on_preview>
                        "Preview Data"
                    </button>
                </Show>
                <button
                    class="btn btn-primary btn-block btn-large"
                    on:click=move |_| run_analysis()
                    disabled=move || upload.with(Option::is_none) || is_analyzing.get()
                >
                    {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze with AI" }}
                </button>
            </div>

            {move || {
                if !show_preview.get() {
                    return None;
                }
                let ds = dataset.get()?;
                let file_name = upload.with(|u| u.as_ref().map(|u| u.file_name.clone()).unwrap_or_default());
                Some(view! {
                    <DataPreviewModal
                        dataset=ds
                        file_name=file_name
                        page_size=page_size
                        confirming=is_analyzing
                        on_close=Callback::new(move |_| set_show_preview.set(false))
                        on_confirm=Callback::new(move |_| run_analysis())
                    />
                })
            }}
        </div>
    }
}

fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
