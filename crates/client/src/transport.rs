use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::ContactPayload;

pub const SEND_PATH: &str = "/api/send";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// One network request per submission.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<StatusCode, TransportError>;
}

/// Posts the form as JSON to a relay endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{SEND_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<StatusCode, TransportError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        Ok(response.status())
    }
}
