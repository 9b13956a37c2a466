use serde::de::DeserializeOwned;

use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::RequestOptions;
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// World of Tanks strongholds (`wot/stronghold/*`)
    Stronghold,
    BlockKind::Stronghold
);

impl Stronghold {
    pub async fn clan_info<T: DeserializeOwned>(
        &self,
        clan_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<T> {
        let mut params = vec![Parameter::new("clan_id", clan_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "claninfo", HttpMethod::Get, params)
            .await
    }

    /// Reserves of the token owner's clan
    pub async fn clan_reserves<T: DeserializeOwned>(
        &self,
        access_token: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let builder = self
            .context
            .request(Self::KIND, "clanreserves")
            .with_access_token(access_token)
            .with_parameters(options.to_parameters());
        self.context
            .execute(HttpMethod::Post, &builder)
            .await?
            .into_data()
    }

    pub async fn activate_clan_reserve<T: DeserializeOwned>(
        &self,
        access_token: &str,
        reserve_type: &str,
        reserve_level: u8,
    ) -> Result<T> {
        let builder = self
            .context
            .request(Self::KIND, "activateclanreserve")
            .with_access_token(access_token)
            .with_parameters([
                Parameter::new("reserve_type", reserve_type),
                Parameter::new("reserve_level", reserve_level),
            ]);
        self.context
            .execute(HttpMethod::Post, &builder)
            .await?
            .into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::blocks::test_context;
    use serde_json::Value;

    #[tokio::test]
    async fn test_clan_reserves_is_post_with_token() {
        let (transport, context) = test_context(r#"{"status":"ok","data":[]}"#);
        let stronghold = Stronghold::new(context);

        let reserves: Value = stronghold
            .clan_reserves("token", &RequestOptions::new().language("en"))
            .await
            .unwrap();
        assert_eq!(reserves, Value::Array(vec![]));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/wot/stronghold/clanreserves/");
        assert_eq!(
            request.body.as_deref(),
            Some("application_id=demo&access_token=token&language=en")
        );
    }

    #[tokio::test]
    async fn test_clan_info_is_get() {
        let (transport, context) = test_context(r#"{"status":"ok","data":{"7":null}}"#);
        let stronghold = Stronghold::new(context);

        let info: Value = stronghold
            .clan_info(&[7], &RequestOptions::default())
            .await
            .unwrap();
        assert!(info["7"].is_null());
        assert_eq!(
            transport.last_request().unwrap().url.query(),
            Some("application_id=demo&clan_id=7")
        );
    }
}
