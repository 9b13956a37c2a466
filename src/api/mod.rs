pub mod blocks;
pub mod client;
pub mod deserializers;
pub mod envelope;
pub mod error_code;
pub mod http_client;
pub mod params;
pub mod region;
pub mod registry;
pub mod request;
pub mod testing;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, BlockContext};
pub use registry::{MethodBlock, MethodBlockRegistry};

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WgApiError};
use region::Cluster;

/// Method blocks the client knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Cross-game account search and info
    Accounts,
    /// Online counters per game server
    Servers,
    /// Cross-game clans
    Clans,
    /// Access token prolongation and logout
    Authentication,
    /// World of Tanks clan ratings
    ClanRatings,
    /// World of Tanks strongholds
    Stronghold,
    /// World of Tanks player accounts
    TankAccounts,
    /// World of Tanks vehicle encyclopedia
    Encyclopedia,
    /// World of Warships player accounts
    ShipAccounts,
    /// WoT Blitz player accounts
    BlitzAccounts,
    /// WoT console player accounts
    ConsoleAccounts,
}

impl BlockKind {
    pub const ALL: [BlockKind; 11] = [
        Self::Accounts,
        Self::Servers,
        Self::Clans,
        Self::Authentication,
        Self::ClanRatings,
        Self::Stronghold,
        Self::TankAccounts,
        Self::Encyclopedia,
        Self::ShipAccounts,
        Self::BlitzAccounts,
        Self::ConsoleAccounts,
    ];

    /// Cluster every request of this block targets
    pub fn cluster(&self) -> Cluster {
        match self {
            Self::Accounts | Self::Servers | Self::Clans => Cluster::Wargaming,
            Self::Authentication
            | Self::ClanRatings
            | Self::Stronghold
            | Self::TankAccounts
            | Self::Encyclopedia => Cluster::WorldOfTanks,
            Self::ShipAccounts => Cluster::WorldOfWarships,
            Self::BlitzAccounts => Cluster::WotBlitz,
            Self::ConsoleAccounts => Cluster::WotConsole,
        }
    }

    /// Method-block segment of the request path
    pub fn path(&self) -> &'static str {
        match self {
            Self::Accounts
            | Self::TankAccounts
            | Self::ShipAccounts
            | Self::BlitzAccounts
            | Self::ConsoleAccounts => "account",
            Self::Servers => "servers",
            Self::Clans => "clans",
            Self::Authentication => "auth",
            Self::ClanRatings => "clanratings",
            Self::Stronghold => "stronghold",
            Self::Encyclopedia => "encyclopedia",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Servers => "servers",
            Self::Clans => "clans",
            Self::Authentication => "auth",
            Self::ClanRatings => "clanratings",
            Self::Stronghold => "stronghold",
            Self::TankAccounts => "tank-accounts",
            Self::Encyclopedia => "encyclopedia",
            Self::ShipAccounts => "ship-accounts",
            Self::BlitzAccounts => "blitz-accounts",
            Self::ConsoleAccounts => "console-accounts",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = WgApiError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| WgApiError::configuration(format!("Unknown method block: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_from_str() {
        assert_eq!("accounts".parse::<BlockKind>().unwrap(), BlockKind::Accounts);
        assert_eq!(
            "Tank_Accounts".parse::<BlockKind>().unwrap(),
            BlockKind::TankAccounts
        );
        assert!(matches!(
            "garage".parse::<BlockKind>(),
            Err(WgApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_blocks_target_different_clusters() {
        assert_eq!(BlockKind::Accounts.cluster(), Cluster::Wargaming);
        assert_eq!(BlockKind::ClanRatings.cluster(), Cluster::WorldOfTanks);
        assert_eq!(BlockKind::ShipAccounts.cluster(), Cluster::WorldOfWarships);
        assert_eq!(BlockKind::Accounts.path(), BlockKind::ShipAccounts.path());
    }
}
