// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validated, immutable run settings.
//!
//! ```text
//! Config (all optional) --mirror_settings()--> MirrorSettings (all present)
//! ```

use std::path::{Path, PathBuf};

/// Everything a mirror run needs, checked once at startup.
///
/// Built by [`Config::mirror_settings`](super::Config::mirror_settings) and
/// handed by reference to the API client, clone orchestrator and traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSettings {
    api_base: String,
    access_token: String,
    group_id: String,
    base_dir: PathBuf,
    per_page: u32,
    git_program: PathBuf,
    dry_run: bool,
}

impl MirrorSettings {
    /// Creates settings directly; `host` is normalized with [`api_base_url`].
    #[must_use]
    pub fn new(
        host: &str,
        access_token: impl Into<String>,
        group_id: impl Into<String>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_base: api_base_url(host),
            access_token: access_token.into(),
            group_id: group_id.into(),
            base_dir: base_dir.into(),
            per_page: super::types::DEFAULT_PER_PAGE,
            git_program: PathBuf::from("git"),
            dry_run: false,
        }
    }

    /// Sets the project page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the clone program.
    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// API root, e.g. `https://gitlab.com/api/v4`.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    #[must_use]
    pub fn git_program(&self) -> &Path {
        &self.git_program
    }

    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Turns a configured host into the v4 API root.
///
/// `gitlab.com` becomes `https://gitlab.com/api/v4`. A host that already
/// carries a scheme keeps it, which is what self-hosted plain-HTTP instances
/// and local test servers need.
#[must_use]
pub fn api_base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("https://") || host.starts_with("http://") {
        format!("{host}/api/v4")
    } else {
        format!("https://{host}/api/v4")
    }
}
