//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: char,
    #[serde(default)]
    pub case_sensitive_commands: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Id the bot answers to when mentioned as `<@id>`
    pub bot_id: String,
    /// Id attached to lines typed on stdin
    pub user_id: String,
    pub channel_id: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bot_id: "1".to_string(),
            user_id: "2".to_string(),
            channel_id: "console".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "mute".to_string(),
                prefix: '!',
                case_sensitive_commands: false,
            },
            adapters: AdaptersConfig {
                console: Some(ConsoleConfig::default()),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(name) = std::env::var("BOT_NAME") {
            config.bot.name = name;
        }

        if let Some(prefix) = std::env::var("BOT_PREFIX").ok().and_then(|p| p.chars().next()) {
            config.bot.prefix = prefix;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.bot.prefix;
        // `<` would make every mention look like a prefixed command
        if prefix.is_whitespace() || prefix.is_alphanumeric() || prefix == '<' {
            return Err(ConfigError::InvalidValue(format!(
                "prefix {:?} must be a symbol other than '<'",
                prefix
            )));
        }

        if let Some(console) = &self.adapters.console {
            for (field, value) in [
                ("adapters.console.bot-id", &console.bot_id),
                ("adapters.console.user-id", &console.user_id),
                ("adapters.console.channel-id", &console.channel_id),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::MissingField(field.to_string()));
                }
            }

            // mention tokens only carry numeric ids (`<@123>`)
            if !console.bot_id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue(format!(
                    "adapters.console.bot-id {:?} must be numeric",
                    console.bot_id
                )));
            }
        }

        Ok(())
    }

    /// Console adapter settings, if the adapter is enabled
    pub fn console(&self) -> Option<&ConsoleConfig> {
        self.adapters.console.as_ref().filter(|c| c.enabled)
    }
}
