//! Player accounts of the other titles. They share one method surface and
//! differ only in the cluster their requests go to.

use super::account_search_params;
use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::{AccountListItem, ById, GamePlayerInfo, RequestOptions, SearchType};
use crate::api::BlockKind;
use crate::error::Result;

macro_rules! game_accounts_block {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        method_block!($(#[$doc])* $name, $kind);

        impl $name {
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
            ) -> Result<ById<GamePlayerInfo>> {
                let mut params = vec![Parameter::new("account_id", account_ids)];
                params.extend(options.to_parameters());
                self.context
                    .invoke(Self::KIND, "info", HttpMethod::Post, params)
                    .await
            }
        }
    };
}

game_accounts_block!(
    /// World of Warships player accounts (`wows/account/*`)
    ShipAccounts,
    BlockKind::ShipAccounts
);

game_accounts_block!(
    /// WoT Blitz player accounts (`wotb/account/*`)
    BlitzAccounts,
    BlockKind::BlitzAccounts
);

game_accounts_block!(
    /// WoT console player accounts (`wotx/account/*`), NA only
    ConsoleAccounts,
    BlockKind::ConsoleAccounts
);
