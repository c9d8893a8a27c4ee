use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Maximum characters a cue may carry before it gets re-segmented
    #[serde(default = "default_max_cue_chars")]
    pub max_cue_chars: usize,

    /// Maximum characters per rendered subtitle line
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,

    /// Extension appended to the input filename for the output file
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_cue_chars == 0 {
            return Err(anyhow!("max_cue_chars must be at least 1"));
        }

        if self.max_line_width == 0 {
            return Err(anyhow!("max_line_width must be at least 1"));
        }

        if self.output_extension.trim().is_empty() {
            return Err(anyhow!("output_extension must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            max_cue_chars: default_max_cue_chars(),
            max_line_width: default_max_line_width(),
            output_extension: default_output_extension(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_cue_chars() -> usize {
    crate::segmenter::DEFAULT_MAX_CUE_CHARS
}

fn default_max_line_width() -> usize {
    crate::segmenter::DEFAULT_MAX_LINE_WIDTH
}

fn default_output_extension() -> String {
    "vtt".to_string()
}
