//! Configuration management for Sahayak CLI
//!
//! Stores language, speech, location and timing settings in
//! ~/.config/sahayak/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use sahayak::{GeoLocation, Language};
use sahayak_app::adapters::DEFAULT_SPEECH_PROGRAM;
use sahayak_app::{ConversationConfig, SessionConfig};

const CONFIG_DIR: &str = "sahayak";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "storage.json";

/// Overrides the config directory (handy for trying things out)
const CONFIG_DIR_ENV: &str = "SAHAYAK_CONFIG_DIR";

/// Which speech engine reads lines aloud
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechEngineKind {
    /// Print lines to the terminal
    #[default]
    Console,
    /// Run an external synthesizer
    Command,
}

impl std::str::FromStr for SpeechEngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(SpeechEngineKind::Console),
            "command" => Ok(SpeechEngineKind::Command),
            _ => Err(format!("Unknown speech engine: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    #[serde(default)]
    pub engine: SpeechEngineKind,
    #[serde(default = "default_speech_program")]
    pub program: String,
}

fn default_speech_program() -> String {
    DEFAULT_SPEECH_PROGRAM.to_string()
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            engine: SpeechEngineKind::default(),
            program: default_speech_program(),
        }
    }
}

/// Simulated delays, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSettings {
    #[serde(default = "default_network_latency_ms")]
    pub network_latency_ms: u64,
    #[serde(default = "default_recognition_delay_ms")]
    pub recognition_delay_ms: u64,
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

fn default_network_latency_ms() -> u64 {
    1000
}

fn default_recognition_delay_ms() -> u64 {
    2000
}

fn default_response_delay_ms() -> u64 {
    1000
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            network_latency_ms: default_network_latency_ms(),
            recognition_delay_ms: default_recognition_delay_ms(),
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

/// CLI Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub timing: TimingSettings,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Where the persisted session lives
    pub fn storage_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        if std::env::var_os(CONFIG_DIR_ENV).is_some() {
            return Ok(Self::config_dir()?.join(STORAGE_FILE));
        }
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(CONFIG_DIR);
        Ok(data_dir.join(STORAGE_FILE))
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            network_latency: Duration::from_millis(self.timing.network_latency_ms),
        }
    }

    pub fn conversation_config(&self) -> ConversationConfig {
        ConversationConfig {
            recognition_delay: Duration::from_millis(self.timing.recognition_delay_ms),
            response_delay: Duration::from_millis(self.timing.response_delay_ms),
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.speech.engine, SpeechEngineKind::Console);
        assert_eq!(config.speech.program, "espeak-ng");
        assert!(config.location.is_none());
        assert_eq!(config.timing.recognition_delay_ms, 2000);
        assert_eq!(
            config.session_config().network_latency,
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
language = "hindi"

[speech]
engine = "command"

[location]
latitude = 26.9124
longitude = 75.7873

[timing]
response_delay_ms = 250
"#,
        )
        .unwrap();

        assert_eq!(config.language, Language::Hindi);
        assert_eq!(config.speech.engine, SpeechEngineKind::Command);
        assert_eq!(config.speech.program, "espeak-ng");
        assert_eq!(config.location, Some(GeoLocation::new(26.9124, 75.7873)));

        let conversation = config.conversation_config();
        assert_eq!(conversation.response_delay, Duration::from_millis(250));
        assert_eq!(conversation.recognition_delay, Duration::from_millis(2000));
        assert_eq!(conversation.language, Language::Hindi);
    }

    #[test]
    fn test_save_format_parses_back() {
        let config = Config {
            location: Some(GeoLocation::new(19.076, 72.8777)),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.location, config.location);
        assert_eq!(parsed.language, config.language);
    }
}
