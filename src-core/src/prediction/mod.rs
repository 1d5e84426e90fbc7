//! Batch classification: wire types, the upload client, and the view model
//! the dashboard renders from a batch response.

pub mod client;
pub mod types;
pub mod view_model;

pub use client::{analyze, PredictionClient};
pub use types::{BatchResponse, BatchSummary, Classification, RowPrediction};
pub use view_model::{
    representative_row, AnalysisResult, DetectedRow, PlanetData, SummaryCounts, HIGH_CONFIDENCE,
    LOW_CONFIDENCE,
};
