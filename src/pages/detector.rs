use exodetect_core::AnalysisResult;
use leptos::prelude::*;

use crate::components::csv_results_display::CsvResultsDisplay;
use crate::components::data_uploader::DataUploader;
use crate::components::results_display::ResultsDisplay;

#[component]
pub fn DetectorPage() -> impl IntoView {
    let (analysis, set_analysis) = signal::<Option<AnalysisResult>>(None);
    let (is_analyzing, set_analyzing) = signal(false);

    // The full table takes over the page once the batch is attached.
    let has_full_results = Memo::new(move |_| {
        analysis.with(|a| a.as_ref().is_some_and(AnalysisResult::has_full_results))
    });

    let on_upload = Callback::new(move |result: AnalysisResult| {
        set_analysis.set(Some(result));
    });
    let on_reset = Callback::new(move |_| set_analysis.set(None));

    view! {
        <div class="page detector-page">
            <section class="hero">
                <div class="hero-pill">
                    <span class="pulse-dot"></span>
                    <span class="mono">"NASA Space Apps Challenge 2025"</span>
                </div>
                <h1>
                    <span class="gradient-text">"Exoplanet Detection"</span>
                    <br />
                    <span class="hero-sub">"AI System"</span>
                </h1>
                <p class="page-description">
                    "Advanced machine learning model trained on NASA's open-source datasets to automatically identify exoplanets from space telescope data"
                </p>
            </section>

            <Show
                when=move || has_full_results.get()
                fallback=move || {
                    view! {
                        <div class="detector-grid">
                            <DataUploader
                                on_upload=on_upload
                                is_analyzing=is_analyzing
                                set_analyzing=set_analyzing
                            />
                            {move || {
                                view! {
                                    <ResultsDisplay
                                        result=analysis.get()
                                        is_analyzing=is_analyzing.get()
                                    />
                                }
                            }}
                        </div>
                    }
                }
            >
                {move || {
                    analysis
                        .get()
                        .and_then(|a| a.full_results)
                        .map(|results| view! { <CsvResultsDisplay results=results on_reset=on_reset/> })
                }}
            </Show>

            <style>{include_str!("detector.css")}</style>
        </div>
    }
}
