use std::collections::HashMap;

use super::account_search_params;
use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::{
    AccountListItem, ById, EncyclopediaInfo, PlayerVehicle, RequestOptions, SearchType,
    TankPlayerInfo, Vehicle,
};
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// World of Tanks player accounts (`wot/account/*`)
    TankAccounts,
    BlockKind::TankAccounts
);

impl TankAccounts {
    pub async fn list(
        &self,
        search: &str,
        search_type: Option<SearchType>,
        limit: Option<u32>,
    ) -> Result<Vec<AccountListItem>> {
        self.context
            .invoke(
                Self::KIND,
                "list",
                HttpMethod::Get,
                account_search_params(search, search_type, limit),
            )
            .await
    }

    pub async fn info(
        &self,
        account_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<ById<TankPlayerInfo>> {
        let mut params = vec![Parameter::new("account_id", account_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "info", HttpMethod::Post, params)
            .await
    }

    /// Vehicles each player has battled in
    pub async fn tanks(
        &self,
        account_ids: &[u64],
        options: &RequestOptions,
    ) -> Result<ById<Vec<PlayerVehicle>>> {
        let mut params = vec![Parameter::new("account_id", account_ids)];
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "tanks", HttpMethod::Post, params)
            .await
    }
}

method_block!(
    /// World of Tanks encyclopedia (`wot/encyclopedia/*`)
    Encyclopedia,
    BlockKind::Encyclopedia
);

impl Encyclopedia {
    pub async fn info(&self, options: &RequestOptions) -> Result<EncyclopediaInfo> {
        self.context
            .invoke(Self::KIND, "info", HttpMethod::Get, options.to_parameters())
            .await
    }

    /// Vehicles keyed by tank id, optionally filtered by tier and nation
    pub async fn vehicles(
        &self,
        tier: Option<u8>,
        nation: Option<&str>,
        options: &RequestOptions,
    ) -> Result<HashMap<String, Vehicle>> {
        let mut params = Vec::new();
        if let Some(tier) = tier {
            params.push(Parameter::new("tier", tier));
        }
        if let Some(nation) = nation {
            params.push(Parameter::new("nation", nation));
        }
        params.extend(options.to_parameters());
        self.context
            .invoke(Self::KIND, "vehicles", HttpMethod::Get, params)
            .await
    }
}
