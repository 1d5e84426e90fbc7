use tracing::{error, info};

use super::types::BatchResponse;
use super::view_model::AnalysisResult;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::transport::{Transport, Upload};

/// Uploads a file to the classification service and shapes the reply.
///
/// One request per call, no retry and no timeout.
pub struct PredictionClient<T: Transport> {
    transport: T,
    url: String,
    field: String,
}

impl<T: Transport> PredictionClient<T> {
    pub fn new(transport: T, url: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            field: field.into(),
        }
    }

    pub fn from_config(transport: T, config: &DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self::new(
            transport,
            config.predict_url()?,
            config.api.upload_field.clone(),
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn predict(&self, upload: &Upload) -> Result<AnalysisResult, DashboardError> {
        info!("Sending {} ({} bytes) to {}", upload.file_name, upload.size(), self.url);

        let response = self
            .transport
            .post_multipart(&self.url, &self.field, upload)
            .await?;

        if !response.is_success() {
            return Err(DashboardError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        let batch: BatchResponse = serde_json::from_str(&response.body)
            .map_err(|e| DashboardError::Decode(e.to_string()))?;
        info!(
            "Prediction response: {} rows, {} exoplanets, {} false positives",
            batch.results.len(),
            batch.summary.exoplanets_detected,
            batch.summary.false_positives
        );

        AnalysisResult::from_batch(&upload.file_name, batch)
    }

    /// Run [`predict`](Self::predict) and hand the result to `on_upload`.
    /// The callback is not called when the analysis fails.
    pub async fn submit<F>(&self, upload: &Upload, on_upload: F) -> Result<(), DashboardError>
    where
        F: FnOnce(AnalysisResult),
    {
        match self.predict(upload).await {
            Ok(result) => {
                on_upload(result);
                Ok(())
            }
            Err(e) => {
                error!("Error processing file {}: {}", upload.file_name, e);
                Err(e)
            }
        }
    }
}

/// One analysis run as the dashboard performs it: build the client from
/// `config`, submit `upload`, and report any failure, including a bad
/// endpoint configuration, through `on_error` with the user-facing message.
pub async fn analyze<T, F, E>(
    transport: T,
    config: &DashboardConfig,
    upload: &Upload,
    on_upload: F,
    on_error: E,
) where
    T: Transport,
    F: FnOnce(AnalysisResult),
    E: FnOnce(String),
{
    let outcome = match PredictionClient::from_config(transport, config) {
        Ok(client) => client.submit(upload, on_upload).await,
        Err(e) => {
            error!("Prediction client unavailable: {}", e);
            Err(e)
        }
    };
    if let Err(e) = outcome {
        on_error(e.alert_message(&config.api.base_url));
    }
}
