use exodetect_core::{ApiStatus, Classification};
use leptos::prelude::*;

/// Tone of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Pending,
    Unknown,
}

impl From<ApiStatus> for CheckStatus {
    fn from(status: ApiStatus) -> Self {
        match status {
            ApiStatus::Checking => CheckStatus::Pending,
            ApiStatus::Connected => CheckStatus::Pass,
            ApiStatus::Disconnected => CheckStatus::Fail,
        }
    }
}

impl From<Classification> for CheckStatus {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Exoplanet => CheckStatus::Pass,
            Classification::FalsePositive => CheckStatus::Fail,
            Classification::Error => CheckStatus::Unknown,
        }
    }
}

#[component]
pub fn StatusBadge(
    /// The label text, e.g. "API Connected"
    #[prop(into)]
    label: String,
    status: CheckStatus,
    /// Optional trailing detail, e.g. the last check time
    #[prop(default = None)]
    detail: Option<String>,
) -> impl IntoView {
    let (icon, class) = match status {
        CheckStatus::Pass => ("\u{2713}", "status-badge status-pass"),
        CheckStatus::Fail => ("\u{2717}", "status-badge status-fail"),
        CheckStatus::Pending => ("\u{25cc}", "status-badge status-pending"),
        CheckStatus::Unknown => ("?", "status-badge status-unknown"),
    };

    view! {
        <span class=class>
            <span class="status-icon" class:spin={status == CheckStatus::Pending}>{icon}</span>
            <span class="status-label">{label}</span>
            {detail.map(|d| view! { <span class="status-detail">{d}</span> })}
        </span>
    }
}
