//! HTTP client for the external annotation services
//!
//! One `reqwest::Client` serves both services; each lookup is a single
//! blocking-from-the-caller's-view GET with the configured timeout. There
//! are no retries and no backoff: a call is attempted exactly once and its
//! first failure is final.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::AnnotationConfig;

use super::models::{GeneAnnotation, GeneSupplement};

/// User agent sent on outbound annotation calls.
const USER_AGENT: &str = concat!("annofuse/", env!("CARGO_PKG_VERSION"));

/// Errors from a single annotation service call
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{service} service returned status {status}")]
    UpstreamStatus {
        service: &'static str,
        status: StatusCode,
    },

    #[error("Failed to decode {service} service response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for both external annotation services
#[derive(Debug, Clone)]
pub struct AnnotationClient {
    client: Client,
    annotation_base_url: String,
    supplement_base_url: String,
}

impl AnnotationClient {
    /// Create a new client with the configured timeout applied to every call
    pub fn new(config: &AnnotationConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            annotation_base_url: config.annotation_base_url.clone(),
            supplement_base_url: config.supplement_base_url.clone(),
        })
    }

    /// Fetch the annotation record for one gene identifier
    pub async fn fetch_annotation(&self, gene_id: &str) -> Result<GeneAnnotation, ClientError> {
        self.get_record(&self.annotation_base_url, gene_id, "annotation")
            .await
    }

    /// Fetch the supplement record for one gene identifier
    pub async fn fetch_supplement(&self, gene_id: &str) -> Result<GeneSupplement, ClientError> {
        self.get_record(&self.supplement_base_url, gene_id, "supplement")
            .await
    }

    async fn get_record<T: DeserializeOwned>(
        &self,
        base_url: &str,
        gene_id: &str,
        service: &'static str,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), gene_id);

        debug!(%url, service, "Fetching gene record");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamStatus { service, status });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { service, source })
    }
}
