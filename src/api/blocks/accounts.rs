
use super::account_search_params;
use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::{AccountListItem, ById, PlayerInfo, RequestOptions, SearchType};
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// Cross-game player accounts (`wgn/account/*`)
    Accounts,
    BlockKind::Accounts
);

impl Accounts {
    /// Search players by nickname prefix
    pub async fn list(&self, search: &str, limit: Option<u32>) -> Result<Vec<AccountListItem>> {
        self.list_with(search, None, limit, &RequestOptions::default())
            .await
    }

    pub async fn list_with(
        &self,
        search: &str,
        search_type: Option<SearchType>,
        limit: Option<u32>,
        options: &RequestOptions,
    ) -> Result<Vec<AccountListItem>> {
        let mut params = account_search_params(search, search_type, limit);
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "list", HttpMethod::Get, params)
            .await
    }

    /// Player records by id; unknown ids map to `None`
    pub async fn info(
        &self,
        account_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<ById<PlayerInfo>> {
        let mut params = vec![Parameter::new("account_id", account_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "info", HttpMethod::Post, params)
            .await
    }
}
