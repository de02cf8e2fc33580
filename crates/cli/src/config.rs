// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry configuration loading.
//!
//! Configuration is a TOML file holding [`TelemetryConfig`] fields. It is
//! looked up in order:
//! - the `--config` flag
//! - the `FLOWLENS_CONFIG` environment variable
//! - `<config dir>/flowlens/config.toml`
//!
//! An explicitly named file must exist. The default location is optional;
//! without it every setting takes its default.

use fl_core::TelemetryConfig;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "flowlens";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads configuration following the lookup order above.
pub fn load(explicit: Option<&Path>) -> Result<TelemetryConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }
    if let Some(path) = env::config_path() {
        return load_file(&path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_file(&path),
        _ => {
            tracing::debug!("no config file, using defaults");
            Ok(TelemetryConfig::default())
        }
    }
}

/// Loads one config file.
pub fn load_file(path: &Path) -> Result<TelemetryConfig> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let config = parse(&text, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parses config text. `path` is only used for error messages.
pub fn parse(text: &str, path: &Path) -> Result<TelemetryConfig> {
    toml::from_str(text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
