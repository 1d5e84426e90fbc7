//! Flattening of a batch response into what the compact results panel shows.

use serde::{Deserialize, Serialize};

use super::types::{BatchResponse, RowPrediction};
use crate::error::DashboardError;

/// Headline confidence when the batch contains at least one exoplanet.
pub const HIGH_CONFIDENCE: f64 = 0.95;
/// Headline confidence when it contains none.
pub const LOW_CONFIDENCE: f64 = 0.1;

/// Physical parameters of the representative row, as uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetData {
    pub file_name: String,
    /// Days
    pub orbital_period: f64,
    /// Earth radii
    pub planet_radius: f64,
    /// Solar radii
    pub stellar_radius: f64,
    /// Stellar effective temperature, Kelvin
    pub temperature: f64,
    /// Parts per million
    pub transit_depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub exoplanet_count: u64,
    pub false_positive_count: u64,
    pub total_analyzed: u64,
    pub success_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRow {
    pub row_index: u64,
    pub kepid: i64,
    pub kepoi_name: Option<String>,
    pub kepler_name: Option<String>,
    pub prediction: Option<u8>,
    pub confidence: Option<f64>,
}

/// Everything the results views need from one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file_name: String,
    pub is_exoplanet: bool,
    /// Fraction, 0-1
    pub confidence: f64,
    pub planet_data: PlanetData,
    pub summary: SummaryCounts,
    pub detected_row: DetectedRow,
    /// When present the dashboard switches to the full-width results table.
    pub full_results: Option<BatchResponse>,
}

/// First row predicted as an exoplanet, falling back to the first row.
pub fn representative_row(results: &[RowPrediction]) -> Option<&RowPrediction> {
    results
        .iter()
        .find(|r| r.is_exoplanet())
        .or_else(|| results.first())
}

impl AnalysisResult {
    /// Build the view model for `batch`. Fails with [`DashboardError::NoResults`]
    /// when the service returned no rows.
    pub fn from_batch(file_name: &str, batch: BatchResponse) -> Result<Self, DashboardError> {
        let row = representative_row(&batch.results).ok_or(DashboardError::NoResults)?;

        let summary = SummaryCounts {
            exoplanet_count: batch.summary.exoplanets_detected,
            false_positive_count: batch.summary.false_positives,
            total_analyzed: batch.summary.total_rows,
            success_rate: batch.summary.success_rate.clone(),
        };
        let is_exoplanet = summary.exoplanet_count > 0;

        let planet_data = PlanetData {
            file_name: file_name.to_string(),
            orbital_period: row.original_f64("koi_period"),
            planet_radius: row.original_f64("koi_prad"),
            stellar_radius: row.original_f64("koi_srad"),
            temperature: row.original_f64("koi_steff"),
            transit_depth: row.original_f64("koi_depth"),
        };

        let detected_row = DetectedRow {
            row_index: row.row_index,
            kepid: row.kepid,
            kepoi_name: row.kepoi_name.clone(),
            kepler_name: row.kepler_name.clone(),
            prediction: row.prediction,
            confidence: row.confidence,
        };

        Ok(Self {
            file_name: file_name.to_string(),
            is_exoplanet,
            confidence: if is_exoplanet { HIGH_CONFIDENCE } else { LOW_CONFIDENCE },
            planet_data,
            summary,
            detected_row,
            full_results: Some(batch),
        })
    }

    pub fn has_full_results(&self) -> bool {
        self.full_results.is_some()
    }
}
