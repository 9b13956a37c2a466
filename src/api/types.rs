use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::params::{Parameter, ParameterSet};

/// Options shared by most methods
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Response fields to return (`fields`); empty means all
    pub fields: Vec<String>,
    /// Localization language (`language`)
    pub language: Option<String>,
    /// Method-specific extra parameters
    pub extra: ParameterSet,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn param(mut self, parameter: impl Into<Parameter>) -> Self {
        self.extra.set(parameter.into());
        self
    }

    pub fn to_parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        if !self.fields.is_empty() {
            params.push(Parameter::new("fields", self.fields.clone()));
        }
        if let Some(language) = &self.language {
            params.push(Parameter::new("language", language.as_str()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }
}

/// Per-id responses: the API answers `null` for ids it does not know
pub type ById<T> = HashMap<String, Option<T>>;

/// Account search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Nicknames starting with the query (default)
    StartsWith,
    /// Exact nickname match, comma-separated list allowed
    Exact,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartsWith => "startswith",
            Self::Exact => "exact",
        }
    }
}

/// Account search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListItem {
    pub account_id: u64,
    pub nickname: String,
}

/// Cross-game player record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub account_id: u64,
    pub nickname: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Games the player has played
    #[serde(default)]
    pub games: Vec<String>,
    #[serde(default)]
    pub private: Option<serde_json::Value>,
}

/// Online counter of one game server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub server: String,
    pub players_online: u64,
}

/// Servers keyed by game prefix (`wot`, `wows`, ...)
pub type ServersByGame = HashMap<String, Vec<ServerInfo>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanListItem {
    pub clan_id: u64,
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanMember {
    pub account_id: u64,
    pub account_name: String,
    pub role: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanInfo {
    pub clan_id: u64,
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub motto: Option<String>,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub leader_id: Option<u64>,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default)]
    pub is_clan_disbanded: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub members: Vec<ClanMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanSummary {
    pub clan_id: u64,
    pub tag: String,
    pub name: String,
}

/// A player's clan membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanMemberInfo {
    pub account_id: u64,
    pub account_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clan: Option<ClanSummary>,
}

/// Prolonged access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub account_id: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

/// Counters every statistics tier carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStatistics {
    #[serde(default)]
    pub battles: u64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub draws: u64,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub frags: u64,
    #[serde(default)]
    pub spotted: u64,
    #[serde(default)]
    pub damage_dealt: u64,
    #[serde(default)]
    pub survived_battles: u64,
}

impl BaseStatistics {
    /// Win ratio in percent, `None` without battles
    pub fn win_rate(&self) -> Option<f64> {
        (self.battles > 0).then(|| self.wins as f64 * 100.0 / self.battles as f64)
    }
}

/// Overall statistics: base counters plus records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllStatistics {
    #[serde(flatten)]
    pub base: BaseStatistics,
    #[serde(default)]
    pub max_xp: u64,
    #[serde(default)]
    pub max_frags: u64,
    #[serde(default)]
    pub max_damage: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankStatistics {
    #[serde(default)]
    pub all: AllStatistics,
    #[serde(default)]
    pub clan: BaseStatistics,
    #[serde(default)]
    pub company: BaseStatistics,
    #[serde(default)]
    pub stronghold_skirmish: AllStatistics,
    #[serde(default)]
    pub trees_cut: u64,
}

/// World of Tanks player record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankPlayerInfo {
    pub account_id: u64,
    pub nickname: String,
    #[serde(default)]
    pub clan_id: Option<u64>,
    #[serde(default)]
    pub global_rating: u64,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_battle_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub statistics: TankStatistics,
}

/// One vehicle in a player's garage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVehicle {
    pub tank_id: u64,
    #[serde(default)]
    pub mark_of_mastery: u8,
    #[serde(default)]
    pub statistics: BaseStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub tank_id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub nation: String,
    pub tier: u8,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    #[serde(default)]
    pub is_premium: bool,
}

/// Encyclopedia metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncyclopediaInfo {
    pub game_version: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub tanks_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub vehicle_types: HashMap<String, String>,
    #[serde(default)]
    pub vehicle_nations: HashMap<String, String>,
    #[serde(default)]
    pub languages: HashMap<String, String>,
}

/// Player record shared by the other titles; statistics stay untyped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayerInfo {
    pub account_id: u64,
    pub nickname: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_battle_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub statistics: Option<serde_json::Value>,
}
