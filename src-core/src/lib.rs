//! Core logic of the ExoDetect dashboard, kept free of DOM types so it can be
//! tested natively and reused by the wasm frontend.

pub mod config;
pub mod decoder;
pub mod error;
pub mod format;
pub mod health;
pub mod prediction;
pub mod preview;
pub mod transport;

pub use config::{default_config, parse_config, DashboardConfig};
pub use decoder::{decode, decode_bytes, CellValue, Dataset, Record};
pub use error::DashboardError;
pub use health::{ApiStatus, Clock, HealthMonitor, HealthSnapshot, IntervalTimer, Poller, SystemClock};
pub use prediction::{AnalysisResult, BatchResponse, BatchSummary, Classification, PredictionClient, RowPrediction};
pub use preview::{columns, Pagination, DEFAULT_PAGE_SIZE};
pub use transport::{HttpResponse, ReqwestTransport, Transport, Upload};
