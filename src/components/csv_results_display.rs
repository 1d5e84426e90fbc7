//! Full-width table of every classified row, replacing the upload surface.

use exodetect_core::format::{display_name, format_confidence};
use exodetect_core::{BatchResponse, Classification, RowPrediction};
use leptos::prelude::*;

use crate::components::status_badge::{CheckStatus, StatusBadge};

#[component]
pub fn CsvResultsDisplay(
    results: BatchResponse,
    /// Returns to the upload surface
    #[prop(into)]
    on_reset: Callback<()>,
) -> impl IntoView {
    let reset_button = move || {
        view! {
            <button class="btn btn-secondary" on:click=move |_| on_reset.run(())>
                "New Analysis"
            </button>
        }
    };

    if !results.is_success() {
        return view! {
            <div class="card empty-results">
                <h3>"No Results Available"</h3>
                <p class="muted">"Upload and process a CSV file to see results"</p>
                {reset_button()}
            </div>
        }
        .into_any();
    }

    let summary = results.summary.clone();
    let count = results.results.len();
    let rows = results.results.into_iter().map(result_row).collect::<Vec<_>>();

    view! {
        <div class="csv-results">
            <div class="csv-results-header">
                <h2>"Exoplanet Detection Results"</h2>
                <p class="muted">"Complete analysis of your CSV dataset"</p>
                {reset_button()}
            </div>

            <div class="summary-grid">
                <div class="stat-card">
                    <div class="stat-value">{summary.total_rows}</div>
                    <div class="stat-label">"Total Rows"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{summary.success_rate.clone()}</div>
                    <div class="stat-label">"Success Rate"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{summary.exoplanets_detected}</div>
                    <div class="stat-label">"Exoplanets"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{summary.false_positives}</div>
                    <div class="stat-label">"False Positives"</div>
                </div>
            </div>

            <div class="card">
                <div class="table-header">
                    <div>
                        <h3>"Detailed Classification Results"</h3>
                        <p class="muted">{format!("Complete analysis of all {} candidates", count)}</p>
                    </div>
                    <div class="table-header-meta">
                        <div>"Processing Complete"</div>
                        <div class="hint">"XGBoost Model"</div>
                    </div>
                </div>

                <div class="table-scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Row"</th>
                                <th>"KEPID"</th>
                                <th>"Candidate Name"</th>
                                <th>"Kepler Name"</th>
                                <th>"Classification"</th>
                                <th>"Confidence"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>

                <div class="table-footer">
                    <span>
                        <strong>"Analysis Complete"</strong>
                        {format!(" \u{2022} {} candidates processed", count)}
                    </span>
                    <span class="hint">"XGBoost Classification Model"</span>
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn result_row(row: RowPrediction) -> impl IntoView {
    let classification = row.classification();
    let class_text = match classification {
        Classification::Exoplanet => "classification positive",
        Classification::FalsePositive => "classification negative",
        Classification::Error => "classification error",
    };

    view! {
        <tr>
            <td>{row.row_index + 1}</td>
            <td class="mono">{row.kepid}</td>
            <td>{display_name(row.kepoi_name.as_deref())}</td>
            <td>{display_name(row.kepler_name.as_deref())}</td>
            <td class=class_text>{classification.label()}</td>
            <td>{format_confidence(row.confidence)}</td>
            <td>
                <StatusBadge label=classification.badge() status=CheckStatus::from(classification)/>
            </td>
        </tr>
    }
}
