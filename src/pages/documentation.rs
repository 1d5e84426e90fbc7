use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Dataset,
    Model,
    Api,
    Architecture,
    Performance,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Dataset,
        Section::Model,
        Section::Api,
        Section::Architecture,
        Section::Performance,
    ];

    /// Value of the `?section=` query parameter.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Dataset => "dataset",
            Section::Model => "model",
            Section::Api => "api",
            Section::Architecture => "architecture",
            Section::Performance => "performance",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Dataset => "Dataset",
            Section::Model => "Model",
            Section::Api => "API",
            Section::Architecture => "Architecture",
            Section::Performance => "Performance",
        }
    }
}

const PHYSICAL_FEATURES: &[(&str, &str)] = &[
    ("koi_period", "Orbital period (days)"),
    ("koi_time0bk", "Transit epoch (BKJD)"),
    ("koi_duration", "Transit duration (hours)"),
    ("koi_depth", "Transit depth (ppm)"),
    ("koi_prad", "Planet radius (Earth radii)"),
    ("koi_srad", "Stellar radius (Solar radii)"),
    ("koi_steff", "Stellar effective temperature (K)"),
    ("koi_slogg", "Stellar surface gravity (log10 cm/s\u{b2})"),
    ("koi_kepmag", "Kepler-band magnitude"),
];

const QUALITY_FEATURES: &[(&str, &str)] = &[
    ("koi_score", "Disposition score (0-1)"),
    ("koi_fpflag_nt", "Not transit-like flag"),
    ("koi_fpflag_ss", "Stellar eclipse flag"),
    ("koi_fpflag_co", "Centroid offset flag"),
    ("koi_fpflag_ec", "Ephemeris match contamination flag"),
    ("koi_model_snr", "Transit signal-to-noise ratio"),
];

const MODEL_METRICS: &[(&str, &str)] = &[
    ("Accuracy", "98.74%"),
    ("Precision", "98.17%"),
    ("Recall", "99.24%"),
    ("F1-Score", "98.70%"),
];

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("POST", "/predict", "Single candidate classification"),
    ("POST", "/predict-csv", "Batch classification of an uploaded file"),
    ("GET", "/health", "System status check"),
    ("GET", "/model-info", "Model metadata and statistics"),
];

const REQUEST_EXAMPLE: &str = r#"{
  "candidate_data": {
    "koi_period": 365.25,
    "koi_duration": 12.0,
    "koi_depth": 0.01,
    "koi_prad": 1.2,
    "koi_srad": 1.0,
    "koi_steff": 5778
  }
}"#;

const RESPONSE_EXAMPLE: &str = r#"{
  "status": "success",
  "data": {
    "prediction": 1,
    "confidence": 95.2,
    "probabilities": {
      "exoplanet": 0.952,
      "false_positive": 0.048
    },
    "explanation": "Candidate classified as exoplanet with 95.2% confidence"
  }
}"#;

const SYSTEM_REQUIREMENTS: &[(&str, &str)] = &[
    ("Python Version", "3.8+"),
    ("Minimum RAM", "4GB"),
    ("Recommended RAM", "8GB"),
    ("Storage", "1GB"),
];

const RUNTIME_METRICS: &[(&str, &str)] = &[
    ("Processing Speed", "<2 seconds"),
    ("Model Loading", "<1 second"),
    ("Memory Usage", "<500MB"),
    ("Concurrent Users", "100+"),
];

fn key_value_list(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <dl class="kv-list">
            {items
                .iter()
                .map(|(k, v)| view! { <div class="kv-row"><dt>{*k}</dt><dd>{*v}</dd></div> })
                .collect::<Vec<_>>()}
        </dl>
    }
}

fn feature_list(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="feature-list">
            {items
                .iter()
                .map(|(name, desc)| view! { <li><code>{*name}</code>" "<span class="muted">{*desc}</span></li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn DocumentationPage() -> impl IntoView {
    let query = use_query_map();
    let (active, set_active) = signal(Section::Overview);

    // Header links deep-link into a section.
    Effect::new(move |_| {
        let requested = query.with(|q| q.get("section"));
        if let Some(section) = requested.as_deref().and_then(Section::from_slug) {
            set_active.set(section);
        }
    });

    view! {
        <div class="page documentation-page">
            <div class="doc-header">
                <a href="/" class="btn btn-secondary btn-small">"\u{2190} Back to App"</a>
                <div>
                    <h2>"Documentation"</h2>
                    <p class="muted">"Exoplanet Detection System - NASA Space Apps 2025"</p>
                </div>
                <span class="pill pill-blue">"v2.0.1"</span>
            </div>

            <div class="doc-layout">
                <aside class="card doc-nav">
                    <h3>"Sections"</h3>
                    <nav>
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="doc-nav-item"
                                        class:active=move || active.get() == section
                                        on:click=move |_| set_active.set(section)
                                    >
                                        {section.title()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                </aside>

                <article class="card doc-content">
                    {move || match active.get() {
                        Section::Overview => overview().into_any(),
                        Section::Dataset => dataset().into_any(),
                        Section::Model => model().into_any(),
                        Section::Api => api().into_any(),
                        Section::Architecture => architecture().into_any(),
                        Section::Performance => performance().into_any(),
                    }}
                </article>
            </div>

            <style>{include_str!("documentation.css")}</style>
        </div>
    }
}

fn overview() -> impl IntoView {
    view! {
        <h2>"System Overview"</h2>
        <p class="lead">
            "The Exoplanet Detection System is a machine learning application that identifies exoplanet candidates from space telescope data. It was built for NASA's Space Apps Challenge 2025."
        </p>
        <div class="doc-columns">
            <div>
                <h3>"Key Features"</h3>
                <ul>
                    <li>"98.74% Classification Accuracy"</li>
                    <li>"Kepler Objects of Interest Dataset"</li>
                    <li>"XGBoost Machine Learning Model"</li>
                    <li>"Real-time Processing"</li>
                </ul>
            </div>
            <div>
                <h3>"Scientific Impact"</h3>
                <ul>
                    <li>"Automated exoplanet candidate screening"</li>
                    <li>"Large-scale survey data analysis"</li>
                    <li>"False positive reduction"</li>
                    <li>"Discovery efficiency improvement"</li>
                </ul>
            </div>
        </div>
    }
}

fn dataset() -> impl IntoView {
    view! {
        <h2>"Kepler Objects of Interest (KOI) Dataset"</h2>
        <p class="lead">
            "The model is trained on NASA's Kepler Objects of Interest table, built from photometric observations of the Kepler Space Telescope."
        </p>
        <div class="stat-row">
            <div class="stat-card"><div class="stat-value">"9,564"</div><div class="stat-label">"Total Observations"</div></div>
            <div class="stat-card"><div class="stat-value">"15"</div><div class="stat-label">"Features per Observation"</div></div>
            <div class="stat-card"><div class="stat-value">"4"</div><div class="stat-label">"Years of Data"</div></div>
        </div>
        <h3>"Required Features for Classification"</h3>
        <p>"All 15 features must be present in the uploaded rows."</p>
        <div class="doc-columns">
            <div>
                <h4>"Physical Parameters"</h4>
                {feature_list(PHYSICAL_FEATURES)}
            </div>
            <div>
                <h4>"Quality Flags & Metrics"</h4>
                {feature_list(QUALITY_FEATURES)}
            </div>
        </div>
        <div class="callout callout-blue">
            <span class="callout-title">"Data Requirements"</span>
            <p>"Missing values are filled with the training median and every feature is normalized before classification."</p>
        </div>
    }
}

fn model() -> impl IntoView {
    view! {
        <h2>"Machine Learning Model"</h2>
        <p class="lead">
            "Classification uses an XGBoost (eXtreme Gradient Boosting) model, which performs well on tabular data and tolerates missing values."
        </p>
        <div class="doc-columns">
            <div>
                <h3>"Performance Metrics"</h3>
                {key_value_list(MODEL_METRICS)}
            </div>
            <div>
                <h3>"Training Methodology"</h3>
                <ul>
                    <li>"GroupShuffleSplit to prevent data leakage"</li>
                    <li>"All observations from same star in same set"</li>
                    <li>"Missing value imputation using median"</li>
                    <li>"StandardScaler normalization"</li>
                </ul>
            </div>
        </div>
    }
}

fn api() -> impl IntoView {
    view! {
        <h2>"REST API Integration"</h2>
        <p class="lead">"The classification service exposes a REST API that this dashboard talks to."</p>
        <h3>"Endpoints"</h3>
        <ul class="endpoint-list">
            {ENDPOINTS
                .iter()
                .map(|(method, path, desc)| {
                    view! {
                        <li>
                            <span class="pill pill-green">{*method}</span>
                            <code>{*path}</code>
                            <span class="muted">{*desc}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
        <h3>"Request Format"</h3>
        <pre class="code-block">{REQUEST_EXAMPLE}</pre>
        <h3>"Response Format"</h3>
        <pre class="code-block">{RESPONSE_EXAMPLE}</pre>
    }
}

fn architecture() -> impl IntoView {
    view! {
        <h2>"System Architecture"</h2>
        <p class="lead">
            "Data processing, model inference and the HTTP API are separate components of the backend."
        </p>
        <div class="stat-row">
            <div class="card">
                <h3>"ExoplanetDetector"</h3>
                <p>"Data validation, preprocessing and prediction."</p>
            </div>
            <div class="card">
                <h3>"ExoplanetAPI"</h3>
                <p>"REST endpoints for external integration and HTTP request handling."</p>
            </div>
            <div class="card">
                <h3>"Utility Functions"</h3>
                <p>"System initialization and configuration management."</p>
            </div>
        </div>
        <h3>"Data Processing Pipeline"</h3>
        <ol class="pipeline">
            <li><strong>"Validation"</strong>" Required feature check on every row"</li>
            <li><strong>"Preprocessing"</strong>" Missing value imputation and data normalization"</li>
            <li><strong>"Classification"</strong>" XGBoost model prediction with confidence scoring"</li>
        </ol>
    }
}

fn performance() -> impl IntoView {
    view! {
        <h2>"Performance & Scalability"</h2>
        <div class="doc-columns">
            <div>
                <h3>"System Requirements"</h3>
                {key_value_list(SYSTEM_REQUIREMENTS)}
            </div>
            <div>
                <h3>"Performance Metrics"</h3>
                {key_value_list(RUNTIME_METRICS)}
            </div>
        </div>
        <h3>"Future Development"</h3>
        <div class="doc-columns">
            <div>
                <h4>"Short-term Goals"</h4>
                <ul>
                    <li>"TESS mission integration"</li>
                    <li>"Performance optimization"</li>
                    <li>"Enhanced visualization tools"</li>
                    <li>"Extended documentation"</li>
                </ul>
            </div>
            <div>
                <h4>"Long-term Vision"</h4>
                <ul>
                    <li>"Multi-mission support"</li>
                    <li>"Real-time data processing"</li>
                    <li>"Advanced ensemble methods"</li>
                    <li>"Community-driven development"</li>
                </ul>
            </div>
        </div>
    }
}
