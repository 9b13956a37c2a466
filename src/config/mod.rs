use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::http_client::TransportConfig;
use crate::api::region::Region;
use crate::error::{Result, WgApiError};

const CONFIG_DIR_NAME: &str = ".wgapi";
const CONFIG_FILE_NAME: &str = "config.yaml";

pub const ENV_APPLICATION_ID: &str = "WGAPI_APPLICATION_ID";
pub const ENV_REGION: &str = "WGAPI_REGION";
pub const ENV_ACCESS_TOKEN: &str = "WGAPI_ACCESS_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Application id issued by the developer portal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    pub region: Region,
    /// Access token of a logged-in player
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Maximum number of attempts per request
    pub max_retries: u32,
    /// Base delay for exponential backoff (milliseconds)
    pub retry_base_delay: u64,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            application_id: None,
            region: Region::default(),
            access_token: None,
            timeout: transport.timeout,
            max_retries: transport.max_retries,
            retry_base_delay: transport.retry_base_delay,
            user_agent: transport.user_agent,
        }
    }
}

impl ClientSettings {
    /// Get the configuration directory
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| WgApiError::configuration("Could not determine home directory"))?;

        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file full path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_path()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from(&Self::config_file_path()?)?;
        settings.apply_env()?;
        Ok(settings)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| WgApiError::configuration(format!("Failed to parse config file: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| WgApiError::configuration(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, yaml)?;

        // Set file permissions to 0600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Override fields from `WGAPI_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(id) = env_value(ENV_APPLICATION_ID) {
            self.application_id = Some(id);
        }
        if let Some(region) = env_value(ENV_REGION) {
            self.region = region.parse()?;
        }
        if let Some(token) = env_value(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        Ok(())
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            max_retries: self.max_retries,
            retry_base_delay: self.retry_base_delay,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "application_id" => self.application_id = Some(value.to_string()),
            "region" => self.region = value.parse()?,
            "access_token" => self.access_token = Some(value.to_string()),
            "timeout" => self.timeout = parse_number(key, value)?,
            "max_retries" => self.max_retries = parse_number(key, value)?,
            "retry_base_delay" => self.retry_base_delay = parse_number(key, value)?,
            "user_agent" => self.user_agent = value.to_string(),
            _ => {
                return Err(WgApiError::configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "application_id" => self.application_id.clone(),
            "region" => Some(self.region.to_string()),
            "access_token" => self.access_token.clone(),
            "timeout" => Some(self.timeout.to_string()),
            "max_retries" => Some(self.max_retries.to_string()),
            "retry_base_delay" => Some(self.retry_base_delay.to_string()),
            "user_agent" => Some(self.user_agent.clone()),
            _ => None,
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            WgApiError::configuration(format!("'{}' expects a number, got '{}'", key, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert!(settings.application_id.is_none());
        assert_eq!(settings.region, Region::Ru);
        assert_eq!(settings.timeout, 30);
        assert_eq!(settings.max_retries, 3);
    }

    #[test]
    fn test_set_and_get() {
        let mut settings = ClientSettings::default();
        settings.set("application_id", "abc").unwrap();
        settings.set("region", "EU").unwrap();
        settings.set("timeout", "10").unwrap();

        assert_eq!(settings.get("application_id").as_deref(), Some("abc"));
        assert_eq!(settings.get("region").as_deref(), Some("eu"));
        assert_eq!(settings.transport_config().timeout, 10);
        assert!(settings.get("unknown").is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = ClientSettings::default();
        assert!(matches!(
            settings.set("timeout", "soon"),
            Err(WgApiError::Configuration(_))
        ));
        assert!(settings.set("region", "mars").is_err());
        assert!(settings.set("proxy", "x").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut settings = ClientSettings::default();
        settings.set("application_id", "abc").unwrap();
        settings.set("region", "asia").unwrap();
        settings.save_to(&path).unwrap();

        let loaded = ClientSettings::load_from(&path).unwrap();
        assert_eq!(loaded.application_id.as_deref(), Some("abc"));
        assert_eq!(loaded.region, Region::Asia);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ClientSettings::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert!(loaded.application_id.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "application_id: xyz\nregion: na\n").unwrap();

        let loaded = ClientSettings::load_from(&path).unwrap();
        assert_eq!(loaded.region, Region::Na);
        assert_eq!(loaded.max_retries, 3);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var(ENV_APPLICATION_ID, "from-env");
        std::env::set_var(ENV_REGION, "eu");

        let mut settings = ClientSettings::default();
        settings.apply_env().unwrap();

        std::env::remove_var(ENV_APPLICATION_ID);
        std::env::remove_var(ENV_REGION);

        assert_eq!(settings.application_id.as_deref(), Some("from-env"));
        assert_eq!(settings.region, Region::Eu);
    }

    #[test]
    #[serial]
    fn test_env_bad_region() {
        std::env::set_var(ENV_REGION, "moon");
        let result = ClientSettings::default().apply_env();
        std::env::remove_var(ENV_REGION);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let path = ClientSettings::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains(".wgapi"));
    }
}
