//! The `{status, meta, error, data}` wrapper every API response uses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserializers::{lenient_i64, lenient_string, lenient_u64};
use crate::error::{Result, WgApiError};

const STATUS_OK: &str = "ok";

/// Paging and count information attached to a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: u64,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page_total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Raw error object reported by the API. Zero-valued when the call succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub code: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl ApiErrorBody {
    pub fn new(code: i64, message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: field.into(),
            value: String::new(),
        }
    }
}

// `data` stays untyped until the status is known to be ok
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    status: Option<String>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    data: Option<Value>,
}

/// Decoded response. `data` is only populated when `status == "ok"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T> {
    pub status: String,
    pub meta: Meta,
    pub error: ApiErrorBody,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ResponseEnvelope<T> {
    /// Decode a response body into an envelope carrying `T` as its data shape.
    ///
    /// Fails with [`WgApiError::Decode`] on malformed JSON, a missing `status`,
    /// or `data` of a successful response that does not fit `T`. An
    /// API-reported error is not a decode failure whatever its `data` holds;
    /// check [`ResponseEnvelope::is_ok`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_slice(bytes).map_err(|e| {
            WgApiError::decode(format!(
                "Failed to parse response envelope: {}. Response starts with: {}",
                e,
                String::from_utf8_lossy(&bytes[..bytes.len().min(100)])
            ))
        })?;

        let status = raw
            .status
            .ok_or_else(|| WgApiError::decode("Response has no 'status' field"))?;
        if status != STATUS_OK {
            return Ok(Self {
                meta: raw.meta.unwrap_or_default(),
                error: raw.error.unwrap_or_default(),
                data: None,
                status,
            });
        }

        let data = raw
            .data
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(|e| WgApiError::decode(format!("Failed to parse response data: {}", e)))?;

        Ok(Self {
            meta: raw.meta.unwrap_or_default(),
            error: ApiErrorBody::default(),
            data,
            status,
        })
    }
}

impl<T> ResponseEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Data of a successful response, possibly absent (`"data": null`),
    /// or the classified API error.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.is_ok() {
            Ok(self.data)
        } else {
            Err(WgApiError::api(self.error))
        }
    }

    /// Like [`ResponseEnvelope::into_result`] but treats missing data as a decode failure.
    pub fn into_data(self) -> Result<T> {
        self.into_result()?
            .ok_or_else(|| WgApiError::decode("Successful response carries no 'data'"))
    }
}
