// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, GitLabConfig, PathsConfig, GitConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default page size for project listings. Anything past it is not fetched.
pub const DEFAULT_PER_PAGE: u32 = 1000;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would be cloned without running the clone command.
    pub dry: bool,
}

/// GitLab API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitLabConfig {
    /// API host, e.g. `gitlab.com`. A value with a scheme is used as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Access token sent in the `PRIVATE-TOKEN` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Root group, numeric id or full path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Upper bound of projects fetched per group.
    pub per_page: u32,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            host: None,
            access_token: None,
            group_id: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of the mirrored directory tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

/// External clone command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program invoked as `<program> clone <url>`.
    pub program: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }
}
