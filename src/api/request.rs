//! Request URI construction.
//!
//! `RequestUriBuilder` accumulates everything a request needs and only
//! validates on [`RequestUriBuilder::build`], so partially configured
//! builders can be shared as templates and derived from freely.

use log::warn;
use reqwest::Url;

use super::params::{Parameter, ParameterSet};
use super::region::{resolve_host, Cluster, Region};
use crate::error::{Result, WgApiError};

const APPLICATION_ID: &str = "application_id";
const ACCESS_TOKEN: &str = "access_token";

/// Keys the builder fills from its own credentials; parameters never override them
pub fn is_credential_key(key: &str) -> bool {
    key == APPLICATION_ID || key == ACCESS_TOKEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully built request, ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// Form-encoded body, POST only
    pub body: Option<String>,
}

impl ApiRequest {
    /// URL with credentials masked, for logs
    pub fn redacted_url(&self) -> String {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if is_credential_key(&k) {
                    mask(&v)
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        url.to_string()
    }
}

fn mask(value: &str) -> String {
    if value.chars().count() > 4 {
        format!("{}***", value.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestUriBuilder {
    region: Option<Region>,
    cluster: Option<Cluster>,
    application_id: Option<String>,
    access_token: Option<String>,
    method: Option<(String, String)>,
    parameters: ParameterSet,
}

impl RequestUriBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = Some(cluster);
        self
    }

    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Method path: block name and action name, e.g. `("account", "list")`
    pub fn with_method(mut self, block: impl Into<String>, action: impl Into<String>) -> Self {
        self.method = Some((block.into(), action.into()));
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<Parameter>) -> Self {
        self.parameters.set(parameter.into());
        self
    }

    pub fn with_parameters<I, P>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Parameter>,
    {
        self.parameters.extend(parameters);
        self
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn cluster(&self) -> Option<Cluster> {
        self.cluster
    }

    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Host and path, without the query string
    fn endpoint(&self) -> Result<Url> {
        let region = self
            .region
            .ok_or_else(|| WgApiError::configuration("Region is not set"))?;
        let cluster = self
            .cluster
            .ok_or_else(|| WgApiError::configuration("Cluster is not set"))?;
        let (block, action) = self
            .method
            .as_ref()
            .ok_or_else(|| WgApiError::configuration("Method is not set"))?;
        if block.is_empty() || action.is_empty() {
            return Err(WgApiError::configuration(format!(
                "Method path is incomplete: '{block}/{action}'"
            )));
        }

        let host = resolve_host(region, cluster)?;
        let raw = format!(
            "https://{host}/{}/{}/{}/",
            cluster.game_prefix(),
            block.trim_matches('/'),
            action.trim_matches('/')
        );
        Url::parse(&raw).map_err(|e| WgApiError::configuration(format!("Invalid URI {raw}: {e}")))
    }

    /// Ordered query pairs: `application_id`, optional `access_token`, then parameters.
    /// Parameters may not shadow the two credential keys.
    fn query_pairs(&self) -> Result<Vec<(String, String)>> {
        let application_id = self
            .application_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| WgApiError::configuration("Application id is not set"))?;

        let mut pairs = vec![(APPLICATION_ID.to_string(), application_id.to_string())];
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            pairs.push((ACCESS_TOKEN.to_string(), token.to_string()));
        }
        for (key, value) in self.parameters.pairs() {
            if is_credential_key(&key) {
                warn!("Ignoring parameter '{}'; set it on the client instead", key);
                continue;
            }
            pairs.push((key, value));
        }
        Ok(pairs)
    }

    /// Final absolute URI. Identical output for identical builder state.
    pub fn build(&self) -> Result<Url> {
        let mut url = self.endpoint()?;
        let pairs = self.query_pairs()?;
        url.query_pairs_mut().extend_pairs(pairs);
        Ok(url)
    }

    /// Build a request for the given verb. POST moves the query into a form body.
    pub fn build_request(&self, method: HttpMethod) -> Result<ApiRequest> {
        match method {
            HttpMethod::Get => Ok(ApiRequest {
                method,
                url: self.build()?,
                body: None,
            }),
            HttpMethod::Post => {
                let url = self.endpoint()?;
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(self.query_pairs()?)
                    .finish();
                Ok(ApiRequest {
                    method,
                    url,
                    body: Some(body),
                })
            }
        }
    }
}
