use serde::de::DeserializeOwned;

use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::{ById, ClanInfo, ClanListItem, ClanMemberInfo, RequestOptions};
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// Cross-game clans (`wgn/clans/*`)
    Clans,
    BlockKind::Clans
);

impl Clans {
    /// Search clans by tag or name
    pub async fn list(
        &self,
        search: &str,
        limit: Option<u32>,
        options: &RequestOptions,
    ) -> Result<Vec<ClanListItem>> {
        let mut params = vec![Parameter::new("search", search)];
        if let Some(limit) = limit {
            params.push(Parameter::new("limit", limit));
        }
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "list", HttpMethod::Get, params)
            .await
    }

    pub async fn info(&self, clan_ids: &[u64], options: &RequestOptions) -> Result<ById<ClanInfo>> {
        let mut params = vec![Parameter::new("clan_id", clan_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "info", HttpMethod::Post, params)
            .await
    }

    /// Clan membership of the given players
    pub async fn members_info(
        &self,
        account_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<ById<ClanMemberInfo>> {
        let mut params = vec![Parameter::new("account_id", account_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "membersinfo", HttpMethod::Post, params)
            .await
    }

    /// Clan roles and other reference data
    pub async fn glossary<T: DeserializeOwned>(&self, options: &RequestOptions) -> Result<T> {
        self.context
            .invoke(Self::KIND, "glossary", HttpMethod::Get, options.to_parameters())
            .await
    }
}

method_block!(
    /// World of Tanks clan ratings (`wot/clanratings/*`)
    ClanRatings,
    BlockKind::ClanRatings
);

impl ClanRatings {
    /// Rating periods and their rank fields
    pub async fn types<T: DeserializeOwned>(&self, options: &RequestOptions) -> Result<T> {
        self.context
            .invoke(Self::KIND, "types", HttpMethod::Get, options.to_parameters())
            .await
    }

    /// Dates with rating data available
    pub async fn dates<T: DeserializeOwned>(
        &self,
        rating_type: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let mut params = vec![Parameter::new("type", rating_type)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "dates", HttpMethod::Get, params)
            .await
    }

    /// Ratings of specific clans
    pub async fn clans<T: DeserializeOwned>(
        &self,
        clan_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<T> {
        let mut params = vec![Parameter::new("clan_id", clan_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "clans", HttpMethod::Get, params)
            .await
    }

    /// Top clans by a rank field
    pub async fn top<T: DeserializeOwned>(
        &self,
        rank_field: &str,
        rating_type: &str,
        limit: Option<u32>,
        options: &RequestOptions,
    ) -> Result<T> {
        let mut params = vec![
            Parameter::new("rank_field", rank_field),
            Parameter::new("type", rating_type),
        ];
        if let Some(limit) = limit {
            params.push(Parameter::new("limit", limit));
        }
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "top", HttpMethod::Get, params)
            .await
    }
}
