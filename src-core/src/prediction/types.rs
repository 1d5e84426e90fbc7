use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate counts computed by the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_rows: u64,
    pub successful_predictions: u64,
    #[serde(default)]
    pub failed_predictions: u64,
    pub exoplanets_detected: u64,
    pub false_positives: u64,
    /// Preformatted by the service, e.g. "98.5%"
    pub success_rate: String,
}

/// Classification outcome for one uploaded row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowPrediction {
    pub row_index: u64,
    #[serde(default)]
    pub kepid: i64,
    #[serde(default)]
    pub kepoi_name: Option<String>,
    #[serde(default)]
    pub kepler_name: Option<String>,
    #[serde(default)]
    pub success: bool,

    // === Present only when `success` ===
    /// 1 = exoplanet, 0 = false positive
    #[serde(default)]
    pub prediction: Option<u8>,
    #[serde(default)]
    pub prediction_text: Option<String>,
    /// Percentage, 0-100
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub probability_exoplanet: Option<f64>,
    #[serde(default)]
    pub probability_false_positive: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
    /// Input columns echoed back by the service (koi_period, koi_prad, ...)
    #[serde(default)]
    pub original_data: Option<Map<String, Value>>,
}

impl RowPrediction {
    pub fn is_exoplanet(&self) -> bool {
        self.prediction == Some(1)
    }

    pub fn classification(&self) -> Classification {
        if !self.success {
            Classification::Error
        } else if self.is_exoplanet() {
            Classification::Exoplanet
        } else {
            Classification::FalsePositive
        }
    }

    /// Numeric field from `original_data`, 0 when absent or not a number.
    pub fn original_f64(&self, key: &str) -> f64 {
        self.original_data
            .as_ref()
            .and_then(|data| data.get(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// Full payload of `POST /predict-csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub summary: BatchSummary,
    #[serde(default)]
    pub results: Vec<RowPrediction>,
}

impl BatchResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Exoplanet,
    FalsePositive,
    Error,
}

impl Classification {
    /// Text for the classification column.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Exoplanet => "Exoplanet",
            Classification::FalsePositive => "False Positive",
            Classification::Error => "Processing Error",
        }
    }

    /// Text for the status badge column.
    pub fn badge(&self) -> &'static str {
        match self {
            Classification::Exoplanet => "Confirmed",
            Classification::FalsePositive => "Rejected",
            Classification::Error => "Error",
        }
    }
}
