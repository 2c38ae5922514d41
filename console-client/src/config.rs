use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

fn default_computer_delay_ms() -> u64 {
    600
}

fn default_show_position_reference() -> bool {
    true
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    // Pause before the computer announces its move.
    #[serde(default = "default_computer_delay_ms")]
    pub computer_delay_ms: u64,
    #[serde(default = "default_show_position_reference")]
    pub show_position_reference: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            show_position_reference: default_show_position_reference(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must be at most {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, YamlConfigSerializer> {
    let path = match path_override {
        Some(path) => path.to_string(),
        None => get_config_path(),
    };
    ConfigManager::from_yaml_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_console_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = Config {
            computer_delay_ms: MAX_COMPUTER_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("computer_delay_ms: 0\n").unwrap();

        assert_eq!(config.computer_delay_ms, 0);
        assert!(config.show_position_reference);
    }

    #[test]
    fn test_missing_file_loads_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        let config: Config = manager.load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_saved_config_can_be_loaded_back() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path);
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());

        let config = Config {
            computer_delay_ms: 50,
            show_position_reference: false,
        };
        manager.save(&config).unwrap();

        let loaded: Config = manager.load().unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path);
        provider
            .set_config_content("computer_delay_ms: 999999\n")
            .unwrap();

        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let result: Result<Config, String> = manager.load();
        assert!(result.is_err());
    }
}
