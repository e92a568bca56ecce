// SPDX-License-Identifier: MIT OR Apache-2.0
//! Coordinator configuration, stored as RON.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Prefix used for generated coordinator names
pub const DEFAULT_NAME_PREFIX: &str = "MultiTrack";

/// Textual layout used by `describe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeStyle {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Decimal places printed for durations
    pub precision: usize,
}

impl Default for DescribeStyle {
    fn default() -> Self {
        Self {
            indent_width: 1,
            precision: 2,
        }
    }
}

impl DescribeStyle {
    /// Leading whitespace for the given nesting level
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}

/// Settings applied when building a coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Prefix of generated names (`<prefix>-<n>`)
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// Layout of textual descriptions
    #[serde(default)]
    pub describe: DescribeStyle,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            name_prefix: default_name_prefix(),
            describe: DescribeStyle::default(),
        }
    }
}

impl SequencerConfig {
    /// Parse a config from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: SequencerConfig = ron::from_str(content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }

        Ok(config)
    }

    /// Load a config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded sequencer config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save the config to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }
}
