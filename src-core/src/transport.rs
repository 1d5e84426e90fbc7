//! HTTP seam between the dashboard and the classification service.
//!
//! Everything above this layer talks to a [`Transport`] so tests can swap in
//! canned responses. [`ReqwestTransport`] is the real implementation; reqwest
//! runs on the browser's `fetch` when built for wasm32.

use std::rc::Rc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::DashboardError;

/// A user-selected file, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Status code and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Futures are `?Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError>;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        upload: &Upload,
    ) -> Result<HttpResponse, DashboardError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        (**self).get(url).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        upload: &Upload,
    ) -> Result<HttpResponse, DashboardError> {
        (**self).post_multipart(url, field, upload).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(response: reqwest::Response) -> Result<HttpResponse, DashboardError> {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|e| {
            warn!("Failed to read response body: {}", e);
            String::new()
        });
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;
        Self::finish(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        upload: &Upload,
    ) -> Result<HttpResponse, DashboardError> {
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;
        Self::finish(response).await
    }
}
