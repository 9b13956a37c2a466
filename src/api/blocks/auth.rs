use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::AccessToken;
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// Access token management (`wot/auth/*`)
    ///
    /// Both calls carry the token being managed rather than the one the
    /// client may have been configured with.
    Authentication,
    BlockKind::Authentication
);

impl Authentication {
    /// Extend the life of `access_token` until `expires_at`
    pub async fn prolongate(
        &self,
        access_token: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<AccessToken> {
        let mut builder = self
            .context
            .request(Self::KIND, "prolongate")
            .with_access_token(access_token);
        if let Some(expires_at) = expires_at {
            builder = builder.with_parameter(Parameter::new("expires_at", expires_at.timestamp()));
        }
        self.context
            .execute(HttpMethod::Post, &builder)
            .await?
            .into_data()
    }

    /// Invalidate `access_token`
    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let builder = self
            .context
            .request(Self::KIND, "logout")
            .with_access_token(access_token);
        self.context
            .execute::<Value>(HttpMethod::Post, &builder)
            .await?
            .into_result()
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::blocks::test_context;
    use crate::api::error_code::ExceptionCode;
    use crate::error::WgApiError;

    #[tokio::test]
    async fn test_prolongate_sends_token_in_body() {
        let (transport, context) = test_context(
            r#"{"status":"ok","data":{"access_token":"new","account_id":5,"expires_at":1700000000}}"#,
        );
        let auth = Authentication::new(context);

        let expires = DateTime::from_timestamp(1700000000, 0).unwrap();
        let token = auth.prolongate("old", Some(expires)).await.unwrap();
        assert_eq!(token.access_token, "new");
        assert_eq!(token.expires_at, expires);

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.as_str(), "https://api.worldoftanks.eu/wot/auth/prolongate/");
        assert_eq!(
            request.body.as_deref(),
            Some("application_id=demo&access_token=old&expires_at=1700000000")
        );
    }

    #[tokio::test]
    async fn test_logout_null_data() {
        let (_, context) = test_context(r#"{"status":"ok","data":null}"#);
        let auth = Authentication::new(context);
        assert!(auth.logout("token").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_token() {
        let (_, context) = test_context(
            r#"{"status":"error","error":{"code":403,"message":"AUTH_EXPIRED","field":null,"value":null}}"#,
        );
        let auth = Authentication::new(context);

        let err = auth.logout("token").await.unwrap_err();
        assert!(matches!(
            err,
            WgApiError::Api {
                code: ExceptionCode::AuthExpired,
                ..
            }
        ));
    }
}
