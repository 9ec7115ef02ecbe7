//! TOML configuration for speakdrill.

use crate::defaults;
use crate::error::{Result, SpeakdrillError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub recognizer: RecognizerConfig,
    pub practice: PracticeConfig,
}

/// Practice session configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Countdown duration in seconds
    pub duration_secs: u32,
}

/// Recognizer capability configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognizerConfig {
    /// External recognizer command (streams one segment per stdout line).
    /// When unset, sessions run the countdown without speech input.
    pub command: Option<String>,
    /// Language tag passed to the recognizer
    pub language: String,
}

/// Practice defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PracticeConfig {
    /// Default topic name (see the topic catalog)
    pub topic: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: defaults::SESSION_SECS,
        }
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            command: None,
            language: defaults::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            topic: defaults::DEFAULT_TOPIC.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Panics on invalid TOML so a broken config is never silently ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(SpeakdrillError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                panic!("Failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SPEAKDRILL_LANGUAGE → recognizer.language
    /// - SPEAKDRILL_RECOGNIZER → recognizer.command
    /// - SPEAKDRILL_TOPIC → practice.topic
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = std::env::var("SPEAKDRILL_LANGUAGE")
            && !language.is_empty()
        {
            self.recognizer.language = language;
        }

        if let Ok(command) = std::env::var("SPEAKDRILL_RECOGNIZER")
            && !command.is_empty()
        {
            self.recognizer.command = Some(command);
        }

        if let Ok(topic) = std::env::var("SPEAKDRILL_TOPIC")
            && !topic.is_empty()
        {
            self.practice.topic = topic;
        }

        self
    }

    /// Validate values a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.session.duration_secs == 0 {
            return Err(SpeakdrillError::ConfigInvalidValue {
                key: "session.duration_secs".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/speakdrill/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("speakdrill")
            .join("config.toml")
    }
}
