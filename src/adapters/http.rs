use crate::core::payload::parse_doctors;
use crate::domain::model::DoctorRecord;
use crate::domain::ports::{ConfigProvider, DoctorSource};
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the doctor list with a single GET against a fixed endpoint.
pub struct HttpDoctorSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
    placeholder_image: String,
}

impl HttpDoctorSource {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        placeholder_image: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds()),
            config.placeholder_image(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_body(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FinderError::HttpStatusError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn fetch(&self) -> Result<Vec<DoctorRecord>> {
        let body = tokio::time::timeout(self.timeout, self.fetch_body())
            .await
            .map_err(|_| FinderError::Timeout {
                seconds: self.timeout.as_secs(),
            })??;

        let doctors = parse_doctors(&body, &self.placeholder_image)?;
        tracing::debug!("Decoded {} doctors from {} bytes", doctors.len(), body.len());
        Ok(doctors)
    }
}
