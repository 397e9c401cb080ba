use std::time::Duration;

use anyhow::{Context as _, Result};

use crate::remo::{Device, decode_devices};

const DEVICES_ENDPOINT: &str = "https://api.nature.global/1/devices";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct RemoClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl RemoClient {
    pub fn new(token: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            token,
            endpoint: DEVICES_ENDPOINT.to_string(),
        })
    }

    pub async fn fetch_devices(&self) -> Result<Vec<Device>> {
        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("failed to request device list")?
            .error_for_status()
            .context("device list request rejected")?;

        let body = response
            .bytes()
            .await
            .context("failed to read device list response")?;

        decode_devices(&body)
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
