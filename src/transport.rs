use crate::error::SupplierError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches a supplier's raw hotel list
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the records of the JSON array it serves
    async fn fetch(&self, supplier: &str, url: &str) -> Result<Vec<Value>, SupplierError>;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport with a request timeout and user agent
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, supplier: &str, url: &str) -> Result<Vec<Value>, SupplierError> {
        info!("Fetching {} hotels", supplier);
        debug!("Fetching URL: {}", url);

        let http_error = |source| SupplierError::Http {
            supplier: supplier.to_string(),
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", supplier, status);
            return Err(SupplierError::UnexpectedStatus {
                supplier: supplier.to_string(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        debug!("Downloaded {} bytes from {}", body.len(), supplier);

        let value: Value =
            serde_json::from_slice(&body).map_err(|source| SupplierError::Decode {
                supplier: supplier.to_string(),
                url: url.to_string(),
                source,
            })?;

        match value {
            Value::Array(records) => {
                info!("{} returned {} hotels", supplier, records.len());
                Ok(records)
            }
            _ => Err(SupplierError::NotAnArray {
                supplier: supplier.to_string(),
                url: url.to_string(),
            }),
        }
    }
}
