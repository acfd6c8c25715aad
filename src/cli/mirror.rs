// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirror target options.
//!
//! Each flag also accepts its camelCase spelling (`--accessToken`,
//! `--baseDir`, `--gitlabBaseURL`, `--groupId`).

use clap::Args;
use std::path::PathBuf;

/// Where to mirror from and to.
///
/// All four values are required for a mirror run, but may come from config
/// files or the environment instead of the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct MirrorArgs {
    /// GitLab access token sent as PRIVATE-TOKEN.
    #[arg(
        long = "access-token",
        alias = "accessToken",
        value_name = "TOKEN",
        env = "GITLAB_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Local directory the group tree is mirrored into.
    #[arg(long = "base-dir", alias = "baseDir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// GitLab host, e.g. gitlab.com. `https://` is assumed unless a scheme is given.
    #[arg(long = "gitlab-base-url", alias = "gitlabBaseURL", value_name = "HOST")]
    pub gitlab_base_url: Option<String>,

    /// Root group, numeric id or full path (e.g. `team/backend`).
    #[arg(long = "group-id", alias = "groupId", value_name = "ID")]
    pub group_id: Option<String>,
}

impl MirrorArgs {
    /// Converts the given flags to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        [
            ("gitlab.access_token", self.access_token.clone()),
            (
                "paths.base_dir",
                self.base_dir.as_ref().map(|p| p.display().to_string()),
            ),
            ("gitlab.host", self.gitlab_base_url.clone()),
            ("gitlab.group_id", self.group_id.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}
