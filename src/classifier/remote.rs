use super::Classifier;
use crate::{config::ClassifierConfig, ticket::ClassificationResult, Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    description: &'a str,
}

/// Wire shape of the model API's /predict endpoint.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ClassificationResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Adapter that forwards descriptions to the hosted classifier model.
pub struct RemoteClassifier {
    base_url: Option<String>,
    client: reqwest::Client,
}

impl RemoteClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        // The timeout covers the whole call; reqwest aborts the outbound
        // request when it fires.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, description: &str) -> Result<ClassificationResult> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("ML_API_URL is not set"))?;
        let url = format!("{}/predict", base_url.trim_end_matches('/'));

        debug!("Calling classifier at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { description })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::UpstreamTimeout
                } else if e.is_connect() {
                    Error::upstream("Could not connect to the classifier service")
                } else {
                    Error::upstream(format!("Request to the classifier service failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the upstream's own error string when its body parses
            let message = response
                .json::<PredictResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| {
                    format!(
                        "Classifier service responded with status {}",
                        status.as_u16()
                    )
                });
            warn!("Classifier call failed: {}", message);
            return Err(Error::upstream(message));
        }

        let body: PredictResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Error::UpstreamTimeout
            } else {
                Error::upstream(format!(
                    "Malformed response from the classifier service: {}",
                    e
                ))
            }
        })?;

        match body {
            PredictResponse {
                success: true,
                data: Some(result),
                ..
            } => {
                if !(0.0..=1.0).contains(&result.confidence) {
                    return Err(Error::upstream(format!(
                        "Classifier returned confidence {} outside [0, 1]",
                        result.confidence
                    )));
                }
                Ok(result)
            }
            PredictResponse { error, .. } => Err(Error::upstream(
                error.unwrap_or_else(|| "Classifier service returned no result".to_string()),
            )),
        }
    }
}
