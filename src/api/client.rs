use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use super::envelope::ResponseEnvelope;
use super::http_client::{ReqwestTransport, Transport, TransportConfig};
use super::params::Parameter;
use super::region::Region;
use super::registry::{MethodBlock, MethodBlockRegistry};
use super::request::{HttpMethod, RequestUriBuilder};
use super::BlockKind;
use crate::config::ClientSettings;
use crate::error::{Result, TransportError, WgApiError};

/// Shared state every method block is built with: the builder template
/// (region, application id, access token) and the transport.
///
/// The template is never written after construction; each request derives
/// its own copy and applies the block's cluster and method to it.
pub struct BlockContext {
    template: RequestUriBuilder,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for BlockContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockContext")
            .field("region", &self.template.region())
            .finish_non_exhaustive()
    }
}

impl BlockContext {
    pub fn new(template: RequestUriBuilder, transport: Arc<dyn Transport>) -> Self {
        Self {
            template,
            transport,
        }
    }

    /// Fresh builder for `kind`/`action`, derived from the shared template
    pub fn request(&self, kind: BlockKind, action: &str) -> RequestUriBuilder {
        self.template
            .clone()
            .with_cluster(kind.cluster())
            .with_method(kind.path(), action)
    }

    /// Send a built request and decode the envelope.
    ///
    /// API-reported errors come back inside the envelope; only transport,
    /// configuration and decode failures are returned as `Err`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        builder: &RequestUriBuilder,
    ) -> Result<ResponseEnvelope<T>> {
        if builder
            .application_id()
            .map_or(true, |id| id.trim().is_empty())
        {
            return Err(WgApiError::NotInitialized);
        }

        let request = builder.build_request(method)?;
        debug!("{} {}", method.as_str(), request.redacted_url());

        let response = self.transport.send(&request).await?;

        let envelope = match ResponseEnvelope::<T>::decode(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(TransportError::Status {
                    status: response.status,
                    body: String::from_utf8_lossy(&response.body[..response.body.len().min(200)])
                        .into_owned(),
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        if !envelope.is_ok() {
            warn!(
                "API error {} on {}: {} (field: '{}', value: '{}')",
                envelope.error.code,
                request.url.path(),
                envelope.error.message,
                envelope.error.field,
                envelope.error.value
            );
        }

        Ok(envelope)
    }

    /// Build, send, decode and unwrap a call in one go
    pub async fn invoke<T, I, P>(
        &self,
        kind: BlockKind,
        action: &str,
        method: HttpMethod,
        parameters: I,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = P>,
        P: Into<Parameter>,
    {
        let builder = self.request(kind, action).with_parameters(parameters);
        self.execute(method, &builder).await?.into_data()
    }
}

/// Entry point of the SDK.
///
/// Holds the immutable region, application id and transport, and one
/// registry of lazily built method blocks.
///
/// ```no_run
/// # async fn demo() -> wgapi::error::Result<()> {
/// use wgapi::api::{ApiClient, blocks::Accounts, region::Region};
///
/// let client = ApiClient::builder()
///     .region(Region::Eu)
///     .application_id("demo")
///     .build()?;
/// let accounts = client.method_block::<Accounts>()?;
/// let found = accounts.list("Ivan", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    region: Region,
    application_id: Option<String>,
    registry: MethodBlockRegistry,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build a client with the default transport configured from settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let mut builder = Self::builder()
            .region(settings.region)
            .transport_config(settings.transport_config());
        if let Some(id) = &settings.application_id {
            builder = builder.application_id(id.clone());
        }
        if let Some(token) = &settings.access_token {
            builder = builder.access_token(token.clone());
        }
        builder.build()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.application_id.is_some()
    }

    /// Typed method block, built on first use and cached for the life of the client
    pub fn method_block<B: MethodBlock>(&self) -> Result<Arc<B>> {
        self.ensure_initialized()?;
        self.registry.get::<B>()
    }

    /// Method block by descriptor, type-erased
    pub fn method_block_by_kind(
        &self,
        kind: BlockKind,
    ) -> Result<Arc<dyn std::any::Any + Send + Sync>> {
        self.ensure_initialized()?;
        self.registry.get_by_kind(kind)
    }

    /// Shared request context, for calls without a typed wrapper
    pub fn context(&self) -> Result<Arc<BlockContext>> {
        self.ensure_initialized()?;
        Ok(self.registry.context())
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(WgApiError::NotInitialized)
        }
    }
}

#[derive(Default)]
pub struct ApiClientBuilder {
    region: Option<Region>,
    application_id: Option<String>,
    access_token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    transport_config: Option<TransportConfig>,
}

impl ApiClientBuilder {
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Use a custom transport instead of the reqwest default
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = Some(config);
        self
    }

    /// Build the client. A missing application id is allowed here and
    /// reported as [`WgApiError::NotInitialized`] on first use.
    pub fn build(self) -> Result<ApiClient> {
        let region = self.region.unwrap_or_default();
        let application_id = self.application_id.filter(|id| !id.trim().is_empty());

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                self.transport_config.unwrap_or_default(),
            )?),
        };

        let mut template = RequestUriBuilder::new().with_region(region);
        if let Some(id) = &application_id {
            template = template.with_application_id(id.clone());
        }
        if let Some(token) = self.access_token {
            template = template.with_access_token(token);
        }

        info!(
            "Created API client for region {} ({})",
            region,
            if application_id.is_some() {
                "configured"
            } else {
                "no application id"
            }
        );

        let context = Arc::new(BlockContext::new(template, transport));
        Ok(ApiClient {
            region,
            application_id,
            registry: MethodBlockRegistry::new(context),
        })
    }
}
