use thiserror::Error;

use crate::api::envelope::ApiErrorBody;
use crate::api::error_code::ExceptionCode;

/// Failures raised by the transport collaborator, surfaced unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// Check if the transport failure is worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidUrl(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum WgApiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Client not initialized: application id is not configured")]
    NotInitialized,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("API error {} ({}): {}", .error.code, .code.name(), .error.message)]
    Api {
        code: ExceptionCode,
        error: ApiErrorBody,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WgApiError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Classify a raw API error body and wrap it
    pub fn api(error: ApiErrorBody) -> Self {
        Self::Api {
            code: ExceptionCode::classify(&error),
            error,
        }
    }

    /// Get user-friendly hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => Some(
                "Register an application at https://developers.wargaming.net and run: \
                 wgapi config set application_id YOUR_ID"
                    .to_string(),
            ),
            Self::Transport(TransportError::Network(_)) => {
                Some("Check your internet connection and try again.".to_string())
            }
            Self::Api { code, .. } => code.hint().map(str::to_string),
            Self::Decode(_) => Some("Run with --verbose to inspect the raw request.".to_string()),
            _ => None,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_retryable(),
            Self::Api { code, .. } => matches!(
                code,
                ExceptionCode::RequestLimitExceeded | ExceptionCode::SourceNotAvailable
            ),
            _ => false,
        }
    }

    /// Classified API code, if this is an API-reported failure
    pub fn exception_code(&self) -> Option<ExceptionCode> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WgApiError>;
