// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirror command: validate settings, check git, walk the group tree.
//!
//! ```text
//! Config --mirror_settings()--> MirrorSettings
//!        --GitCli::locate()---> fetcher
//!        --Mirror::run()------> MirrorReport --> completion message
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::git::GitCli;
use crate::mirror::{Mirror, MirrorReport};
use anyhow::Context;
use tracing::info;

/// Printed once every project has been handled.
pub const COMPLETION_MESSAGE: &str = "All Git clones completed successfully!";

/// Run the mirror with the merged configuration.
///
/// # Errors
///
/// Returns an error if a required setting is missing, the clone program
/// cannot be found, or any API request or clone fails.
pub async fn run_mirror_command(config: &Config) -> Result<MirrorReport> {
    let settings = config.mirror_settings()?;
    let fetcher = GitCli::locate(settings.git_program())
        .context("a git executable is required to mirror projects")?;

    info!(
        api = settings.api_base(),
        group = settings.group_id(),
        base_dir = %settings.base_dir().display(),
        dry_run = settings.dry_run(),
        "Starting mirror"
    );

    let mirror = Mirror::new(settings, fetcher);
    let report = mirror.run().await.context("mirror aborted")?;

    if mirror.settings().dry_run() {
        info!(%report, "[dry-run] Mirror complete");
        println!("Dry run complete: {report}");
    } else {
        info!(%report, "{COMPLETION_MESSAGE}");
        println!("{COMPLETION_MESSAGE}");
    }
    Ok(report)
}
