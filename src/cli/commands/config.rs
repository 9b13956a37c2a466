use crate::cli::args::{ConfigArgs, ConfigCommand};
use crate::config::ClientSettings;
use crate::error::Result;

const SECRET_KEYS: [&str; 2] = ["application_id", "access_token"];

/// Execute config command
pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Set { key, value } => {
            let path = ClientSettings::config_file_path()?;
            let mut settings = ClientSettings::load_from(&path)?;
            settings.set(&key, &value)?;
            settings.save_to(&path)?;
            println!("Configuration updated: {} = {}", key, display_value(&key, &value));
            Ok(())
        }
        ConfigCommand::Get { key } => {
            let settings = ClientSettings::load()?;
            match settings.get(&key) {
                Some(value) => println!("{}: {}", key, display_value(&key, &value)),
                None => println!("Configuration key '{}' not set", key),
            }
            Ok(())
        }
        ConfigCommand::Path => {
            let path = ClientSettings::config_file_path()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
    }
}

/// Mask credentials for display
fn display_value(key: &str, value: &str) -> String {
    if !SECRET_KEYS.contains(&key) {
        return value.to_string();
    }
    let count = value.chars().count();
    if count > 6 {
        let head: String = value.chars().take(6).collect();
        format!("{}...({} characters)", head, count)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_masks_secrets() {
        assert_eq!(
            display_value("application_id", "0123456789abcdef"),
            "012345...(16 characters)"
        );
        assert_eq!(display_value("application_id", "demo"), "demo");
        assert_eq!(display_value("user_agent", "wgapi/0.4.0 custom"), "wgapi/0.4.0 custom");
    }
}
