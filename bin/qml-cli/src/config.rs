// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from TOML files.
//!
//! # TOML Format
//! ```toml
//! strict = true
//! format = "compact"
//! ```

use anyhow::Context;
use std::path::Path;

/// Output format for the `canon` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (the default).
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Defaults applied to `check` and `canon` unless overridden by flags.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CliConfig {
    /// Treat advisory issues as failures in `check`.
    #[serde(default)]
    pub strict: bool,
    /// Output format for `canon`.
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_format() -> OutputFormat {
    OutputFormat::Pretty
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strict: false,
            format: OutputFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the given path, or returns the defaults
    /// when no path is supplied.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config '{}'", path.display()))?;
                Self::from_toml(&content)
            }
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CliConfig::default();
        assert!(!cfg.strict);
        assert_eq!(cfg.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_from_toml() {
        let cfg = CliConfig::from_toml("strict = true\nformat = \"compact\"\n").unwrap();
        assert!(cfg.strict);
        assert_eq!(cfg.format, OutputFormat::Compact);
    }

    #[test]
    fn test_from_toml_partial() {
        let cfg = CliConfig::from_toml("strict = true\n").unwrap();
        assert!(cfg.strict);
        assert_eq!(cfg.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(CliConfig::from_toml("format = \"xml\"").is_err());
    }
}
