//! Typed classification of API-reported errors.
//!
//! The API embeds the offending field name inside the error message
//! (`INVALID_ACCOUNT_ID`, `SEARCH_NOT_SPECIFIED`), so classification first
//! replaces the uppercased field with the token `FIELD` and then looks the
//! templated message up in a fixed table.
//!
//! ## Lookup table
//!
//! Scanned top to bottom, first match wins. An entry matches when its code
//! equals the reported code and its canonical name contains the templated
//! message.
//!
//! | # | Code | Canonical name              |
//! |---|------|-----------------------------|
//! | 1 | 402  | `FIELD_NOT_SPECIFIED`       |
//! | 2 | 402  | `INVALID_FIELD`             |
//! | 3 | 404  | `METHOD_NOT_FOUND`          |
//! | 4 | 404  | `FIELD_NOT_FOUND`           |
//! | 5 | 405  | `METHOD_DISABLED`           |
//! | 6 | 407  | `INVALID_FIELD`             |
//! | 7 | 407  | `FIELD_LIST_LIMIT_EXCEEDED` |
//! | 8 | 407  | `APPLICATION_IS_BLOCKED`    |
//! | 9 | 407  | `INVALID_IP_ADDRESS`        |
//! | 10| 407  | `REQUEST_LIMIT_EXCEEDED`    |
//! | 11| 401  | `AUTH_CANCEL`               |
//! | 12| 403  | `AUTH_EXPIRED`              |
//! | 13| 410  | `AUTH_ERROR`                |
//! | 14| 504  | `SOURCE_NOT_AVAILABLE`      |
//!
//! Anything else is [`ExceptionCode::ClientResponseErrorFailed`].
//!
//! ```rust
//! use wgapi::api::envelope::ApiErrorBody;
//! use wgapi::api::error_code::ExceptionCode;
//!
//! let error = ApiErrorBody::new(402, "INVALID_APPLICATION_ID", "application_id");
//! assert_eq!(ExceptionCode::classify(&error), ExceptionCode::InvalidField);
//! ```

use std::fmt;

use super::envelope::ApiErrorBody;

/// Token standing in for the field name inside a templated message
pub const FIELD_TOKEN: &str = "FIELD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionCode {
    /// 402: a required parameter was not passed
    FieldNotSpecified,
    /// 402: a parameter has an invalid value
    InvalidField,
    /// 404: unknown method
    MethodNotFound,
    /// 404: the entity referenced by a parameter does not exist
    FieldNotFound,
    /// 405: method is switched off
    MethodDisabled,
    /// 407: a parameter has an invalid value
    InvalidFieldValue,
    /// 407: too many values in a list parameter
    FieldListLimitExceeded,
    /// 407: the application was blocked
    ApplicationIsBlocked,
    /// 407: request came from an IP not bound to the application
    InvalidIpAddress,
    /// 407: request quota spent
    RequestLimitExceeded,
    /// 401: user cancelled authentication
    AuthCancel,
    /// 403: authentication timed out
    AuthExpired,
    /// 410: authentication failed
    AuthError,
    /// 504: upstream data source is down
    SourceNotAvailable,
    /// Unrecognized error
    ClientResponseErrorFailed,
}

impl ExceptionCode {
    /// Lookup table in scan order. The fallback is not part of it.
    pub const TABLE: [ExceptionCode; 14] = [
        Self::FieldNotSpecified,
        Self::InvalidField,
        Self::MethodNotFound,
        Self::FieldNotFound,
        Self::MethodDisabled,
        Self::InvalidFieldValue,
        Self::FieldListLimitExceeded,
        Self::ApplicationIsBlocked,
        Self::InvalidIpAddress,
        Self::RequestLimitExceeded,
        Self::AuthCancel,
        Self::AuthExpired,
        Self::AuthError,
        Self::SourceNotAvailable,
    ];

    /// Declared numeric API code
    pub fn code(&self) -> i64 {
        match self {
            Self::FieldNotSpecified | Self::InvalidField => 402,
            Self::MethodNotFound | Self::FieldNotFound => 404,
            Self::MethodDisabled => 405,
            Self::InvalidFieldValue
            | Self::FieldListLimitExceeded
            | Self::ApplicationIsBlocked
            | Self::InvalidIpAddress
            | Self::RequestLimitExceeded => 407,
            Self::AuthCancel => 401,
            Self::AuthExpired => 403,
            Self::AuthError => 410,
            Self::SourceNotAvailable => 504,
            Self::ClientResponseErrorFailed => 0,
        }
    }

    /// Canonical message, with `FIELD` in place of a field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldNotSpecified => "FIELD_NOT_SPECIFIED",
            Self::InvalidField | Self::InvalidFieldValue => "INVALID_FIELD",
            Self::MethodNotFound => "METHOD_NOT_FOUND",
            Self::FieldNotFound => "FIELD_NOT_FOUND",
            Self::MethodDisabled => "METHOD_DISABLED",
            Self::FieldListLimitExceeded => "FIELD_LIST_LIMIT_EXCEEDED",
            Self::ApplicationIsBlocked => "APPLICATION_IS_BLOCKED",
            Self::InvalidIpAddress => "INVALID_IP_ADDRESS",
            Self::RequestLimitExceeded => "REQUEST_LIMIT_EXCEEDED",
            Self::AuthCancel => "AUTH_CANCEL",
            Self::AuthExpired => "AUTH_EXPIRED",
            Self::AuthError => "AUTH_ERROR",
            Self::SourceNotAvailable => "SOURCE_NOT_AVAILABLE",
            Self::ClientResponseErrorFailed => "CLIENT_RESPONSE_ERROR_FAILED",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::FieldNotSpecified => Some("A required parameter is missing."),
            Self::InvalidField | Self::InvalidFieldValue => {
                Some("Check the value of the parameter named in the error.")
            }
            Self::ApplicationIsBlocked | Self::InvalidIpAddress => {
                Some("Check your application settings at https://developers.wargaming.net.")
            }
            Self::RequestLimitExceeded => {
                Some("You've made too many requests. Please wait a moment.")
            }
            Self::AuthExpired | Self::AuthError | Self::AuthCancel => {
                Some("Log in again to obtain a fresh access token.")
            }
            Self::SourceNotAvailable => Some("The data source is temporarily unavailable."),
            _ => None,
        }
    }

    /// Classify a raw error body. Never fails; unknown errors map to the fallback.
    pub fn classify(error: &ApiErrorBody) -> Self {
        let templated = template_message(&error.message, &error.field);
        if templated.is_empty() {
            return Self::ClientResponseErrorFailed;
        }

        Self::TABLE
            .into_iter()
            .find(|entry| entry.code() == error.code && entry.name().contains(templated.as_str()))
            .unwrap_or(Self::ClientResponseErrorFailed)
    }
}

impl fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace the first occurrence of the uppercased field name with `FIELD`.
/// An empty field leaves the message unchanged.
pub fn template_message(message: &str, field: &str) -> String {
    let field = field.trim();
    if field.is_empty() {
        return message.to_string();
    }
    message.replacen(&field.to_uppercase(), FIELD_TOKEN, 1)
}
