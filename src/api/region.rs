//! Region and cluster constants, and resolution of the pair to an API host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WgApiError};

/// Geographic API deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Ru,
    Eu,
    Na,
    Asia,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Ru, Region::Eu, Region::Na, Region::Asia];

    /// Top-level domain of the regional deployment
    pub fn tld(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Eu => "eu",
            Self::Na => "com",
            Self::Asia => "asia",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Eu => "eu",
            Self::Na => "na",
            Self::Asia => "asia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = WgApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "eu" => Ok(Self::Eu),
            "na" | "com" => Ok(Self::Na),
            "asia" => Ok(Self::Asia),
            other => Err(WgApiError::configuration(format!("Unknown region: {other}"))),
        }
    }
}

/// Game or product family a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    /// Cross-game platform methods (accounts, clans, servers)
    Wargaming,
    WorldOfTanks,
    WorldOfWarships,
    WorldOfWarplanes,
    WotBlitz,
    WotConsole,
}

impl Cluster {
    pub const ALL: [Cluster; 6] = [
        Cluster::Wargaming,
        Cluster::WorldOfTanks,
        Cluster::WorldOfWarships,
        Cluster::WorldOfWarplanes,
        Cluster::WotBlitz,
        Cluster::WotConsole,
    ];

    /// Second-level domain serving this cluster
    pub fn subdomain(&self) -> &'static str {
        match self {
            Self::Wargaming | Self::WorldOfTanks | Self::WotConsole => "worldoftanks",
            Self::WorldOfWarships => "worldofwarships",
            Self::WorldOfWarplanes => "worldofwarplanes",
            Self::WotBlitz => "wotblitz",
        }
    }

    /// First path segment of every method in this cluster
    pub fn game_prefix(&self) -> &'static str {
        match self {
            Self::Wargaming => "wgn",
            Self::WorldOfTanks => "wot",
            Self::WorldOfWarships => "wows",
            Self::WorldOfWarplanes => "wowp",
            Self::WotBlitz => "wotb",
            Self::WotConsole => "wotx",
        }
    }

    /// Regions this cluster is deployed in
    pub fn regions(&self) -> &'static [Region] {
        match self {
            Self::WotConsole => &[Region::Na],
            _ => &Region::ALL,
        }
    }

    pub fn supports(&self, region: Region) -> bool {
        self.regions().contains(&region)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wargaming => "wargaming",
            Self::WorldOfTanks => "world_of_tanks",
            Self::WorldOfWarships => "world_of_warships",
            Self::WorldOfWarplanes => "world_of_warplanes",
            Self::WotBlitz => "wot_blitz",
            Self::WotConsole => "wot_console",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = WgApiError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized || c.game_prefix() == normalized)
            .ok_or_else(|| WgApiError::configuration(format!("Unknown cluster: {s}")))
    }
}

/// Resolve the API host for a region/cluster pair.
///
/// Console titles are served from a single dedicated host; everything else
/// follows `api.<subdomain>.<tld>`.
pub fn resolve_host(region: Region, cluster: Cluster) -> Result<String> {
    if !cluster.supports(region) {
        return Err(WgApiError::configuration(format!(
            "Cluster {cluster} is not available in region {region}"
        )));
    }

    Ok(match cluster {
        Cluster::WotConsole => "api-console.worldoftanks.com".to_string(),
        _ => format!("api.{}.{}", cluster.subdomain(), region.tld()),
    })
}
