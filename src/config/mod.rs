//
//  webmate-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration for the `wm` binary: who to authenticate as, which webmate
//! installation to talk to, and the default project.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/wm/config.toml`
//! - **macOS**: `~/Library/Application Support/wm/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\wm\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! user = "jane@example.com"
//! api_token = "..."
//! base_url = "https://app.webmate.io/api/v1"
//! project = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60"
//! ```
//!
//! Every key is optional. Values given on the command line or through
//! `WEBMATE_USER`, `WEBMATE_API_TOKEN`, `WEBMATE_URL` and `WEBMATE_PROJECT`
//! take precedence, see [`Config::session`].

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::common::ProjectId;
use crate::auth::WebmateAuthInfo;
use crate::session::{WebmateApiSession, WebmateEnvironment};

/// Keys understood by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["user", "api_token", "base_url", "project"];

/// Persistent `wm` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Account email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// API token of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Base URL of the webmate API. Defaults to the public installation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Default project for project-scoped commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub user: Option<String>,
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub project: Option<String>,
}

/// A credential needed to build a session is not configured anywhere.
#[derive(Debug, thiserror::Error)]
#[error("No webmate {what} configured. Set {env} or run `wm config set {key} <value>`")]
pub struct MissingCredential {
    pub what: &'static str,
    pub key: &'static str,
    pub env: &'static str,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value. `None` for unset or unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "user" => self.user.clone(),
            "api_token" => self.api_token.clone(),
            "base_url" => self.base_url.clone(),
            "project" => self.project.clone(),
            _ => None,
        }
    }

    /// Sets a configuration value.
    ///
    /// `base_url` must be an absolute URL and `project` a UUID.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "user" => self.user = Some(value),
            "api_token" => self.api_token = Some(value),
            "base_url" => {
                WebmateEnvironment::new(&value)
                    .with_context(|| format!("Invalid base_url '{}'", value))?;
                self.base_url = Some(value);
            }
            "project" => {
                value
                    .parse::<ProjectId>()
                    .with_context(|| format!("Invalid project '{}'", value))?;
                self.project = Some(value);
            }
            _ => anyhow::bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Builds an API session from the configuration and `overrides`.
    ///
    /// # Errors
    ///
    /// [`MissingCredential`] if neither the overrides nor the file provide a
    /// user or an API token. Invalid URLs or project ids are reported with
    /// the offending value.
    pub fn session(&self, overrides: &SessionOverrides) -> Result<WebmateApiSession> {
        let user = pick(&overrides.user, &self.user).ok_or(MissingCredential {
            what: "user",
            key: "user",
            env: "WEBMATE_USER",
        })?;
        let api_token = pick(&overrides.api_token, &self.api_token).ok_or(MissingCredential {
            what: "API token",
            key: "api_token",
            env: "WEBMATE_API_TOKEN",
        })?;

        let environment = match pick(&overrides.base_url, &self.base_url) {
            Some(url) => WebmateEnvironment::new(&url)
                .with_context(|| format!("Invalid webmate URL '{}'", url))?,
            None => WebmateEnvironment::default(),
        };

        let session = WebmateApiSession::new(WebmateAuthInfo::new(user, api_token), environment);
        match pick(&overrides.project, &self.project) {
            Some(project) => {
                let project_id = project
                    .parse::<ProjectId>()
                    .with_context(|| format!("Invalid project '{}'", project))?;
                Ok(session.with_project(project_id))
            }
            None => Ok(session),
        }
    }
}

fn pick(preferred: &Option<String>, fallback: &Option<String>) -> Option<String> {
    preferred
        .as_deref()
        .or(fallback.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PROJECT: &str = "4a0b3c1e-2a8b-4c2e-9f9e-1b2c3d4e5f60";

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("user", "jane@example.com".to_string()).unwrap();
        config.set("project", PROJECT.to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get("user").as_deref(), Some("jane@example.com"));
        assert_eq!(loaded.get("project").as_deref(), Some(PROJECT));
        assert!(loaded.get("api_token").is_none());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("api_token"));
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::default();
        assert!(config.set("base_url", "not a url".to_string()).is_err());
        assert!(config.set("project", "abc".to_string()).is_err());
        assert!(config.set("color", "always".to_string()).is_err());
        assert_eq!(config, Config::default());

        config
            .set("base_url", "https://webmate.example.com/api/v1".to_string())
            .unwrap();
        assert!(config.base_url.is_some());
    }

    #[test]
    fn test_session_prefers_overrides() {
        let config = Config {
            user: Some("file@example.com".to_string()),
            api_token: Some("file-token".to_string()),
            base_url: Some("https://file.example.com/api/v1".to_string()),
            project: None,
        };
        let overrides = SessionOverrides {
            user: Some("cli@example.com".to_string()),
            project: Some(PROJECT.to_string()),
            ..Default::default()
        };

        let session = config.session(&overrides).unwrap();
        assert_eq!(session.auth_info().email_address(), "cli@example.com");
        assert_eq!(session.auth_info().api_token(), "file-token");
        assert_eq!(session.environment().base_url(), "https://file.example.com/api/v1");
        assert_eq!(session.project_id().map(|id| id.to_string()).as_deref(), Some(PROJECT));
    }

    #[test]
    fn test_session_requires_credentials() {
        let config = Config {
            user: Some("jane@example.com".to_string()),
            api_token: Some("  ".to_string()),
            ..Default::default()
        };
        let err = config.session(&SessionOverrides::default()).unwrap_err();
        let missing = err.downcast_ref::<MissingCredential>().unwrap();
        assert_eq!(missing.env, "WEBMATE_API_TOKEN");
        assert!(err.to_string().contains("wm config set api_token"));
    }

    #[test]
    fn test_session_default_environment() {
        let config = Config {
            user: Some("jane@example.com".to_string()),
            api_token: Some("t".to_string()),
            ..Default::default()
        };
        let session = config.session(&SessionOverrides::default()).unwrap();
        assert_eq!(
            session.environment().base_url(),
            crate::session::DEFAULT_BASE_URL
        );
        assert!(session.project_id().is_none());
    }
}
