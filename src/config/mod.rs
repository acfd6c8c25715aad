// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for glmirror.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. glmirror.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GLMIRROR_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GLMIRROR_GITLAB__ACCESS_TOKEN=... → gitlab.access_token
//! GLMIRROR_PATHS__BASE_DIR=/data    → paths.base_dir
//! GLMIRROR_GLOBAL__DRY=true         → global.dry
//! ```

pub mod loader;
pub mod settings;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use settings::MirrorSettings;
use types::{GitConfig, GitLabConfig, GlobalConfig, PathsConfig};

/// Complete application configuration, as merged from all sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// GitLab API settings.
    pub gitlab: GitLabConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Clone command settings.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use glmirror::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("mirror.toml")
    ///     .add_toml_file_optional("glmirror.toml")
    ///     .with_env_prefix("GLMIRROR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate required keys and freeze them into [`MirrorSettings`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for the first absent (or blank)
    /// required value, checked in the order token, base dir, host, group, and
    /// `ConfigError::InvalidValue` when `gitlab.per_page` is zero.
    pub fn mirror_settings(&self) -> std::result::Result<MirrorSettings, ConfigError> {
        let access_token = required(
            self.gitlab.access_token.as_deref(),
            "gitlab",
            "access_token",
            "access-token",
        )?;
        let base_dir = self
            .paths
            .base_dir
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| missing("paths", "base_dir", "base-dir"))?;
        let host = required(
            self.gitlab.host.as_deref(),
            "gitlab",
            "host",
            "gitlab-base-url",
        )?;
        let group_id = required(
            self.gitlab.group_id.as_deref(),
            "gitlab",
            "group_id",
            "group-id",
        )?;

        if self.gitlab.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                section: "gitlab".to_string(),
                key: "per_page".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(
            MirrorSettings::new(host, access_token, group_id, base_dir.clone())
                .with_per_page(self.gitlab.per_page)
                .with_git_program(self.git.program.clone())
                .with_dry_run(self.global.dry),
        )
    }

    /// Format configuration options for display.
    ///
    /// The access token is never printed; a set token shows as `[hidden]`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let fmt = |v: Option<&str>| v.unwrap_or_default().to_string();

        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert("gitlab.host".into(), fmt(self.gitlab.host.as_deref()));
        options.insert(
            "gitlab.access_token".into(),
            if self.gitlab.access_token.is_some() {
                "[hidden]".to_string()
            } else {
                String::new()
            },
        );
        options.insert(
            "gitlab.group_id".into(),
            fmt(self.gitlab.group_id.as_deref()),
        );
        options.insert("gitlab.per_page".into(), self.gitlab.per_page.to_string());
        options.insert(
            "paths.base_dir".into(),
            self.paths
                .base_dir
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "git.program".into(),
            self.git.program.display().to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

fn required<'a>(
    value: Option<&'a str>,
    section: &str,
    key: &str,
    flag: &str,
) -> std::result::Result<&'a str, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(section, key, flag))
}

fn missing(section: &str, key: &str, flag: &str) -> ConfigError {
    ConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
        flag: flag.to_string(),
    }
}
