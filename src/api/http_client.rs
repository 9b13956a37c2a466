use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::sleep;

use super::request::{ApiRequest, HttpMethod};
use crate::error::TransportError;

/// Raw HTTP result handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network capability the client core is written against.
///
/// Implementations own everything below "send these bytes and give me the
/// status and body back": connection pooling, timeouts and retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError>;
}

/// Transport settings
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout in seconds
    pub timeout: u64,
    /// Maximum number of attempts
    pub max_retries: u32,
    /// Base delay for exponential backoff (milliseconds)
    pub retry_base_delay: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            max_retries: 3,
            retry_base_delay: 100,
            user_agent: format!("wgapi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Default transport over a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            // Connection pool settings
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(config.timeout))
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            .user_agent(config.user_agent.clone())
            .use_rustls_tls()
            .build()?;

        Ok(Self { client, config })
    }

    /// Wrap an existing client, e.g. one shared with the rest of an application
    pub fn with_client(client: Client, config: TransportConfig) -> Self {
        Self { client, config }
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(request.url.clone()),
            HttpMethod::Post => self
                .client
                .post(request.url.clone())
                .header("content-type", "application/x-www-form-urlencoded")
                .body(request.body.clone().unwrap_or_default()),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        if status == 429 || (500..600).contains(&status) {
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&body[..body.len().min(200)]).into_owned(),
            });
        }

        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    /// Execute request with retry logic
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        if !matches!(request.url.scheme(), "http" | "https") || request.url.host_str().is_none() {
            return Err(TransportError::InvalidUrl(request.redacted_url()));
        }

        let attempts = self.config.max_retries.max(1);
        let mut retry_delay = Duration::from_millis(self.config.retry_base_delay);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(
                "{} {} (attempt {}/{})",
                request.method.as_str(),
                request.redacted_url(),
                attempt,
                attempts
            );

            match self.send_once(request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    warn!("Request failed: {}, retrying in {:?}", e, retry_delay);
                    sleep(retry_delay).await;
                    retry_delay *= 2; // Exponential backoff
                }
                Err(e) => return Err(e),
            }
        }
    }
}
