//! Browser-side glue between the components and `exodetect_core`.

use exodetect_core::{
    decode_bytes, prediction, AnalysisResult, DashboardConfig, DashboardError, Dataset,
    HealthMonitor, ReqwestTransport, Upload,
};
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const SAMPLE_FILE_NAME: &str = "kepler-sample.csv";
const SAMPLE_CSV: &[u8] = include_bytes!("../assets/kepler-sample.csv");

/// Read a picked or dropped file fully into memory.
pub async fn read_upload(file: web_sys::File) -> Result<Upload, DashboardError> {
    use js_sys::{ArrayBuffer, Uint8Array};

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| DashboardError::FileRead(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| DashboardError::FileRead("Failed to convert to ArrayBuffer".to_string()))?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    Ok(Upload::new(file.name(), bytes))
}

/// The bundled KOI excerpt behind "Load Kepler Sample Dataset".
pub fn sample_upload() -> Upload {
    Upload::new(SAMPLE_FILE_NAME, SAMPLE_CSV.to_vec())
}

/// Decode an upload for the preview table. Failures are logged only.
pub fn preview(upload: &Upload) -> Option<Dataset> {
    match decode_bytes(&upload.bytes) {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            error!("Error processing file {}: {}", upload.file_name, e);
            None
        }
    }
}

/// Send `upload` for classification. `on_upload` only runs on success; any
/// failure is reported through a blocking alert.
pub async fn analyze<F>(config: &DashboardConfig, upload: &Upload, on_upload: F)
where
    F: FnOnce(AnalysisResult),
{
    prediction::analyze(ReqwestTransport::new(), config, upload, on_upload, |msg| {
        alert(&msg)
    })
    .await
}

pub fn health_monitor(config: &DashboardConfig) -> Result<HealthMonitor<ReqwestTransport>, String> {
    HealthMonitor::from_config(ReqwestTransport::new(), config).map_err(String::from)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
