use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

pub struct ConfigManager<TProvider, TSerializer = YamlConfigSerializer> {
    content_provider: TProvider,
    serializer: TSerializer,
}

impl ConfigManager<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            content_provider: FileContentConfigProvider::new(file_path.to_string()),
            serializer: YamlConfigSerializer::new(),
        }
    }
}

impl<TProvider, TSerializer> ConfigManager<TProvider, TSerializer>
where
    TProvider: ConfigContentProvider,
{
    pub fn new(content_provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }

    // Missing file is not an error: the caller gets the default config.
    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: Validate + Default,
        TSerializer: ConfigSerializer<TConfig>,
    {
        match self.content_provider.get_config_content()? {
            Some(content) => {
                let config = self.serializer.deserialize(&content)?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                Ok(config)
            }
            None => Ok(TConfig::default()),
        }
    }

    pub fn save<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: Validate,
        TSerializer: ConfigSerializer<TConfig>,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let serialized = self.serializer.serialize(config)?;
        self.content_provider.set_config_content(&serialized)
    }

    pub fn exists(&self) -> Result<bool, String> {
        Ok(self.content_provider.get_config_content()?.is_some())
    }
}
