use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GreetingsConfig {
    pub default_name: Option<String>,
}

/// Get the name to greet when none was given, with priority:
/// ENV > local > global > default
pub fn get_default_name() -> String {
    // 1. Check environment variable
    if let Ok(env_name) = std::env::var("GREETINGS_NAME") {
        return env_name;
    }

    // 2. Check local config
    if let Ok(local_config) = load_local_config() {
        if let Some(name) = local_config.default_name {
            return name;
        }
    }

    // 3. Check global config
    if let Ok(global_config) = load_global_config() {
        if let Some(name) = global_config.default_name {
            return name;
        }
    }

    // 4. Use default
    "World".to_string()
}

/// Load local config from .greetings/config.json
pub fn load_local_config() -> Result<GreetingsConfig> {
    let config_path = PathBuf::from(".greetings").join("config.json");
    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read local config")?;
    let config: GreetingsConfig =
        serde_json::from_str(&contents).context("Failed to parse local config")?;
    Ok(config)
}

/// Load global config from ~/.config/greetings/config.json
pub fn load_global_config() -> Result<GreetingsConfig> {
    let config_dir = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("greetings");
    let config_path = config_dir.join("config.json");
    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read global config")?;
    let config: GreetingsConfig =
        serde_json::from_str(&contents).context("Failed to parse global config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_env_var_takes_priority() {
        // Save current env
        let saved = env::var("GREETINGS_NAME").ok();
        env::set_var("GREETINGS_NAME", "Walter");
        let name = get_default_name();
        assert_eq!(name, "Walter");
        // Restore env
        match saved {
            Some(val) => env::set_var("GREETINGS_NAME", val),
            None => env::remove_var("GREETINGS_NAME"),
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let config = GreetingsConfig {
            default_name: Some("Heisenberg".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GreetingsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_name.as_deref(), Some("Heisenberg"));
    }
}
