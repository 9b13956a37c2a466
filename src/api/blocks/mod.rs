//! Concrete method blocks. Each block targets a single cluster, taken from
//! its [`BlockKind`](super::BlockKind), and builds every request from a
//! fresh copy of the client's template.

/// Declare a method block: the struct holding the shared context, its
/// [`MethodBlock`](crate::api::registry::MethodBlock) impl, and a generic
/// `call` for actions without a typed wrapper.
macro_rules! method_block {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            context: std::sync::Arc<$crate::api::client::BlockContext>,
        }

        impl $crate::api::registry::MethodBlock for $name {
            const KIND: $crate::api::BlockKind = $kind;

            fn new(context: std::sync::Arc<$crate::api::client::BlockContext>) -> Self {
                Self { context }
            }
        }

        impl $name {
            /// Invoke `action` on this block and decode its `data` as `T`
            pub async fn call<T, I, P>(
                &self,
                action: &str,
                method: $crate::api::request::HttpMethod,
                parameters: I,
            ) -> $crate::error::Result<T>
            where
                T: serde::de::DeserializeOwned,
                I: IntoIterator<Item = P>,
                P: Into<$crate::api::params::Parameter>,
            {
                self.context
                    .invoke(
                        <Self as $crate::api::registry::MethodBlock>::KIND,
                        action,
                        method,
                        parameters,
                    )
                    .await
            }
        }
    };
}

pub mod accounts;
pub mod auth;
pub mod clans;
pub mod game_accounts;
pub mod servers;
pub mod stronghold;
pub mod tanks;

pub use accounts::Accounts;
pub use auth::Authentication;
pub use clans::{ClanRatings, Clans};
pub use game_accounts::{BlitzAccounts, ConsoleAccounts, ShipAccounts};
pub use servers::Servers;
pub use stronghold::Stronghold;
pub use tanks::{Encyclopedia, TankAccounts};

use super::params::Parameter;
use super::types::SearchType;

/// Parameters of an `account/list` search
pub(crate) fn account_search_params(
    search: &str,
    search_type: Option<SearchType>,
    limit: Option<u32>,
) -> Vec<Parameter> {
    let mut params = vec![Parameter::new("search", search)];
    if let Some(search_type) = search_type {
        params.push(Parameter::new("type", search_type.as_str()));
    }
    if let Some(limit) = limit {
        params.push(Parameter::new("limit", limit));
    }
    params
}

#[cfg(test)]
pub(crate) fn test_context(
    body: &str,
) -> (
    std::sync::Arc<super::testing::RecordingTransport>,
    std::sync::Arc<super::BlockContext>,
) {
    use super::region::Region;
    use super::request::RequestUriBuilder;
    use std::sync::Arc;

    let transport = Arc::new(super::testing::RecordingTransport::replying(body));
    let template = RequestUriBuilder::new()
        .with_region(Region::Eu)
        .with_application_id("demo");
    let context = Arc::new(super::BlockContext::new(template, transport.clone()));
    (transport, context)
}
