use exodetect_core::format::format_cell;
use exodetect_core::{columns, Dataset, Pagination};
use leptos::prelude::*;

/// Paginated view of the decoded file, shown before it is sent for analysis.
#[component]
pub fn DataPreviewModal(
    dataset: Dataset,
    #[prop(into)] file_name: String,
    page_size: usize,
    #[prop(into)] confirming: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let total = dataset.len();
    let header = columns(&dataset).to_vec();
    let column_count = header.len();
    let dataset = StoredValue::new(dataset);
    let (cursor, set_cursor) = signal(Pagination::new(total, page_size));

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal preview-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{format!("Normalized Data - {}", file_name)}</h3>
                    <p class="modal-description">
                        {format!("Preview and confirm data before processing. Total records: {}", total)}
                    </p>
                </div>

                <div class="preview-badges">
                    <span class="pill pill-blue">{format!("{} records", total)}</span>
                    <span class="pill pill-green">{format!("{} columns", column_count)}</span>
                    <span class="pill pill-yellow">
                        {move || {
                            let c = cursor.get();
                            format!("Page {} of {}", c.page(), c.total_pages())
                        }}
                    </span>
                    <span class="pill pill-purple">"\u{2190} \u{2192} Scroll horizontally"</span>
                </div>

                <div class="preview-table-wrap">
                    <table class="data-table preview-table">
                        <thead>
                            <tr>
                                {header.iter().map(|c| view! { <th>{c.clone()}</th> }).collect::<Vec<_>>()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let page = cursor.get();
                                dataset.with_value(|ds| {
                                    page.slice(&ds.records).iter().map(|record| {
                                        view! {
                                            <tr>
                                                {columns(ds).iter().map(|col| {
                                                    view! { <td>{format_cell(record.get(col))}</td> }
                                                }).collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>()
                                })
                            }}
                        </tbody>
                    </table>
                </div>

                <Show when=move || cursor.with(|c| c.total_pages() > 1)>
                    <div class="pagination">
                        <button
                            class="btn btn-secondary btn-small"
                            on:click=move |_| set_cursor.update(|c| *c = c.prev())
                            disabled=move || !cursor.with(Pagination::has_prev)
                        >
                            "Previous"
                        </button>
                        <span class="page-indicator">
                            {move || cursor.with(|c| format!("{} of {}", c.page(), c.total_pages()))}
                        </span>
                        <button
                            class="btn btn-secondary btn-small"
                            on:click=move |_| set_cursor.update(|c| *c = c.next())
                            disabled=move || !cursor.with(Pagination::has_next)
                        >
                            "Next"
                        </button>
                    </div>
                </Show>

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || confirming.get()
                    >
                        {move || if confirming.get() { "Processing..." } else { "Confirm & Process" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
