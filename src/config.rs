use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

use crate::defaults;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub segment: SegmentConfig,
    pub render: RenderConfig,
}

/// Transcript segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmentConfig {
    pub block_duration_secs: u32,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub color: ColorMode,
    pub show_unanchored: bool,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            block_duration_secs: defaults::BLOCK_DURATION_SECS,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_unanchored: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - CLAIMLINE_BLOCK_DURATION → segment.block_duration_secs
    /// - CLAIMLINE_COLOR → render.color
    ///
    /// Values that fail to parse are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(duration) = std::env::var(defaults::ENV_BLOCK_DURATION)
            && let Ok(secs) = duration.trim().parse::<u32>()
        {
            self.segment.block_duration_secs = secs;
        }

        if let Ok(color) = std::env::var(defaults::ENV_COLOR) {
            match color.trim() {
                "auto" => self.render.color = ColorMode::Auto,
                "always" => self.render.color = ColorMode::Always,
                "never" => self.render.color = ColorMode::Never,
                _ => {}
            }
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/claimline/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::CONFIG_DIR)
            .join(defaults::CONFIG_FILE)
    }

    /// Dump a commented configuration template
    pub fn template() -> String {
        format!(
            "# claimline configuration\n\
             \n\
             [segment]\n\
             # Navigation window size in seconds\n\
             block_duration_secs = {}\n\
             \n\
             [render]\n\
             # Color output: \"auto\", \"always\", or \"never\"\n\
             color = \"auto\"\n\
             # List claims that did not anchor anywhere in the transcript\n\
             show_unanchored = true\n",
            defaults::BLOCK_DURATION_SECS
        )
    }
}
