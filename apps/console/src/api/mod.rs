use std::sync::Arc;

use anyhow::Context;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{HealthStatus, WorkflowRunResult};

pub type ClientResult<T> = Result<T, ClientError>;

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Clone)]
pub struct WorkflowClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl WorkflowClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let base_url = normalize_base_url(&config.api_base_url);

        let builder = reqwest::Client::builder();
        // reqwest's wasm client carries no timeout support
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        let client = builder.build().context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Triggers the full pipeline run. One request per call, no retries and no
    /// cancellation; it resolves or rejects exactly once.
    pub async fn run_full_workflow(&self) -> ClientResult<WorkflowRunResult> {
        self.get_json("rfp/full-run").await
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.get_json("health").await
    }

    async fn get_json<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.join_path(path);
        let response = self.inner.get(url).send().await.map_err(ClientError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from)?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.detail);
            return Err(ClientError::Service(ServiceError { status, detail }));
        }

        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse(status));
        }

        let payload = serde_json::from_slice(&bytes).map_err(ClientError::from)?;
        Ok(payload)
    }

    fn join_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(input: &str) -> String {
    input.trim_end_matches('/').to_string()
}

/// FastAPI-style failure body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServiceError {
    pub status: StatusCode,
    pub detail: Option<String>,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail.as_deref() {
            Some(detail) => write!(f, "{} ({})", detail, self.status),
            None => write!(f, "status {}", self.status),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("service error: {0}")]
    Service(ServiceError),
    #[error("empty response body: {0}")]
    EmptyResponse(StatusCode),
    #[error("setup error: {0}")]
    Setup(#[from] anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Service(err) => Some(err.status),
            Self::EmptyResponse(status) => Some(*status),
            _ => None,
        }
    }

    /// What the error banner shows: the service-provided detail verbatim when
    /// one exists, a generic fallback for everything else.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(ServiceError {
                detail: Some(detail),
                ..
            }) => detail.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_detail_surfaces_verbatim() {
        let err = ClientError::Service(ServiceError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("Error in TechnicalAgent: missing sku.csv".into()),
        });
        assert_eq!(err.user_message(), "Error in TechnicalAgent: missing sku.csv");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn missing_detail_maps_to_generic_message() {
        let err = ClientError::Service(ServiceError {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        });
        assert_eq!(err.user_message(), "Request failed");
    }

    #[test]
    fn decode_errors_map_to_generic_message() {
        let decode_err = serde_json::from_str::<ErrorBody>("not json").unwrap_err();
        let err = ClientError::from(decode_err);
        assert_eq!(err.user_message(), "Request failed");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn error_body_parses_fastapi_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "No RFP files found in data/rfps"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("No RFP files found in data/rfps"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.detail.is_none());
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(normalize_base_url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
        assert_eq!(normalize_base_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000");
    }
}
