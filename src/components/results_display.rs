use exodetect_core::format::format_percent;
use exodetect_core::AnalysisResult;
use leptos::prelude::*;

/// Compact verdict panel shown next to the uploader.
#[component]
pub fn ResultsDisplay(result: Option<AnalysisResult>, is_analyzing: bool) -> impl IntoView {
    if is_analyzing {
        return view! {
            <div class="card results-card results-placeholder">
                <div class="orbit-spinner">
                    <div class="orbit-ring outer"></div>
                    <div class="orbit-ring inner"></div>
                </div>
                <h3>"Analyzing Data"</h3>
                <p class="muted">"Running neural network classification on transit photometry data..."</p>
            </div>
        }
        .into_any();
    }

    let Some(result) = result else {
        return view! {
            <div class="card results-card results-placeholder">
                <div class="idle-icon">"\u{223F}"</div>
                <h3>"Ready for Analysis"</h3>
                <p class="muted">"Upload exoplanet data to begin AI-powered classification"</p>
            </div>
        }
        .into_any();
    };

    let summary = result.summary.clone();
    let found = summary.exoplanet_count > 0;
    let headline_class = if result.is_exoplanet { "verdict-icon positive" } else { "verdict-icon negative" };
    let detected = result.detected_row.clone();
    let full = result.full_results.clone();

    view! {
        <div class="card results-card">
            <div class="verdict">
                <div class=headline_class>
                    {if result.is_exoplanet { "\u{2713}" } else { "\u{2717}" }}
                </div>
                <div class="verdict-text">
                    <h3>
                        {format!("Analysis Complete - {} Exoplanets Detected", summary.exoplanet_count)}
                    </h3>
                    <p class="muted">
                        {format!(
                            "Processed {} candidates: {} exoplanets confirmed, {} false positives",
                            summary.total_analyzed,
                            summary.exoplanet_count,
                            summary.false_positive_count,
                        )}
                    </p>
                    {if found {
                        view! {
                            <div class="callout callout-green">
                                <span class="callout-title">"Exoplanets Found"</span>
                                <p>
                                    {format!(
                                        "{} candidates classified as confirmed exoplanets. See detailed results below for specific row information and confidence scores.",
                                        summary.exoplanet_count,
                                    )}
                                </p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="callout callout-yellow">
                                <span class="callout-title">"No Exoplanets Detected"</span>
                                <p>
                                    {format!(
                                        "All {} candidates were classified as false positives. This dataset may require further analysis or different classification criteria.",
                                        summary.total_analyzed,
                                    )}
                                </p>
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            </div>

            <div class="summary-grid">
                <SummaryCard
                    tone="green"
                    value={summary.exoplanet_count.to_string()}
                    label="Exoplanets Found"
                    note={if found { "Confirmed planets" } else { "No exoplanets detected" }}
                />
                <SummaryCard
                    tone="red"
                    value={summary.false_positive_count.to_string()}
                    label="False Positives"
                    note={if summary.false_positive_count > 0 { "Not exoplanets" } else { "All candidates valid" }}
                />
                <SummaryCard
                    tone="blue"
                    value={summary.total_analyzed.to_string()}
                    label="Total Analyzed"
                    note="CSV rows processed"
                />
                <SummaryCard tone="yellow" value={summary.success_rate.clone()} label="Success Rate" note="Model accuracy"/>
            </div>

            <div class="confidence">
                <div class="confidence-row">
                    <span>"Confidence Score"</span>
                    <span class="confidence-value">{format_percent(result.confidence)}</span>
                </div>
                <div class="progress">
                    <div class="progress-fill" style:width={format!("{}%", result.confidence * 100.0)}></div>
                </div>
                <p class="hint">{format!("Based on XGBoost analysis of {}", result.planet_data.file_name)}</p>
            </div>

            <div class="divider"></div>

            <div class="detected">
                <h5>"Detected Exoplanet Details"</h5>
                <div class="detected-grid">
                    <div class="detail-card detail-green">
                        <div class="detail-caption">{format!("Row #{}", detected.row_index + 1)}</div>
                        <div class="detail-value">
                            {detected.kepoi_name.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "Unknown".to_string())}
                        </div>
                        <div class="hint">
                            {detected.kepler_name.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "No Kepler name".to_string())}
                        </div>
                    </div>
                    <div class="detail-card detail-blue">
                        <div class="detail-caption">"KEPID"</div>
                        <div class="detail-value mono">{detected.kepid}</div>
                        <div class="hint">"Kepler ID"</div>
                    </div>
                </div>
            </div>

            <div class="model-info">
                <h5>"Model Information"</h5>
                <dl>
                    <dt>"Architecture:"</dt><dd>"XGBoost"</dd>
                    <dt>"Dataset:"</dt><dd>"Kepler KOI"</dd>
                    <dt>"Training Acc:"</dt><dd>"98.74%"</dd>
                    <dt>"Features:"</dt><dd>"15"</dd>
                </dl>
            </div>

            {full.map(|batch| view! {
                <div class="callout callout-blue detailed-note">
                    <div>
                        <h6>"Detailed Analysis Available"</h6>
                        <p>{format!("View complete classification results for all {} candidates", batch.results.len())}</p>
                    </div>
                    <div class="detailed-counts">
                        <div>{format!("{} Exoplanets", batch.summary.exoplanets_detected)}</div>
                        <div class="hint">{format!("{} False Positives", batch.summary.false_positives)}</div>
                    </div>
                </div>
            })}
        </div>
    }
    .into_any()
}

#[component]
pub fn SummaryCard(
    tone: &'static str,
    #[prop(into)] value: String,
    label: &'static str,
    note: &'static str,
) -> impl IntoView {
    view! {
        <div class={format!("summary-card summary-{}", tone)}>
            <div class="summary-value">{value}</div>
            <div class="summary-label">{label}</div>
            <div class="summary-note">{note}</div>
        </div>
    }
}
