// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Values missing
//! from the file take their defaults, and the API origin can be overridden
//! from the environment without touching the file.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "musica-tui";

/// Environment variable that overrides [`AppConfig::api_origin`].
pub(crate) const ORIGIN_ENV: &str = "MUSICA_API_ORIGIN";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Scheme, host and port of the server, e.g. `http://localhost:8000`.
    pub(crate) api_origin: String,
    pub(crate) api_prefix: String,
    /// How long notifications stay on screen.
    pub(crate) alert_seconds: u64,
    /// Log file location, defaults to a file next to the config file.
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_origin: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            alert_seconds: 5,
            log_file: None,
        }
    }
}

impl AppConfig {
    fn with_env_overrides(mut self) -> Self {
        if let Ok(origin) = env::var(ORIGIN_ENV) {
            if !origin.trim().is_empty() {
                self.api_origin = origin.trim().to_string();
            }
        }
        self
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join("musica-tui.log")))
            .unwrap_or_else(|| PathBuf::from("musica-tui.log"))
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load::<AppConfig>(CONFIG_NAME, None)
        .unwrap_or_default()
        .with_env_overrides()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: AppConfig =
            serde_json::from_value(serde_json::json!({ "api_origin": "http://music.local:9000" }))
                .unwrap();

        assert_eq!(config.api_origin, "http://music.local:9000");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.alert_seconds, 5);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/client.log")),
            ..AppConfig::default()
        };

        assert_eq!(config.log_path(), PathBuf::from("/tmp/client.log"));
    }
}
