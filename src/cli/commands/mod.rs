pub mod accounts;
pub mod call;
pub mod clans;
pub mod config;
pub mod servers;

use serde::Serialize;

use crate::api::ApiClient;
use crate::cli::GlobalOptions;
use crate::config::ClientSettings;
use crate::error::{Result, WgApiError};

/// Load settings and apply command-line overrides
pub fn load_settings(global: &GlobalOptions) -> Result<ClientSettings> {
    let mut settings = ClientSettings::load()?;
    if let Some(region) = global.region {
        settings.region = region;
    }
    if let Some(id) = &global.application_id {
        settings.application_id = Some(id.clone());
    }
    Ok(settings)
}

/// Build a client from the configuration file and overrides
pub fn create_client(global: &GlobalOptions) -> Result<ApiClient> {
    ApiClient::from_settings(&load_settings(global)?)
}

/// Print `data` as pretty JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(data)
        .map_err(|e| WgApiError::decode(format!("Failed to format output: {}", e)))?;
    println!("{}", output);
    Ok(())
}
