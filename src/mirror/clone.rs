// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-project clone orchestration.
//!
//! ```text
//! clone_project(url, "team/backend", "service-a")
//!   target = {base}/team/backend/service-a
//!   exists?      --> Skipped
//!   dry run?     --> DryRun
//!   mkdir -p {base}/team/backend   (failure: warn, continue)
//!   fetcher.fetch_into(url, {base}/team/backend)
//!                --> Cloned
//! ```

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::settings::MirrorSettings;
use crate::error::{FsError, MirrorResult};
use crate::git::RepoFetcher;

/// What happened to one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
    /// A fresh clone was made.
    Cloned,
    /// The target directory already existed; nothing was done.
    Skipped,
    /// Dry-run mode; the clone was only logged.
    DryRun,
}

/// Directory a group's projects are cloned into.
///
/// Joins `base_dir` with the non-empty `/`-separated segments of the group's
/// full path, so `/data` and `team/backend` give `/data/team/backend`.
///
/// # Errors
///
/// Returns `FsError::UnsafePath` if a segment is not a plain directory name,
/// such as `..`.
pub fn clone_dir(base_dir: &Path, parent_full_path: &str) -> Result<PathBuf, FsError> {
    parent_full_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .try_fold(base_dir.to_path_buf(), |dir, segment| {
            if is_plain_name(segment) {
                Ok(dir.join(segment))
            } else {
                Err(FsError::UnsafePath {
                    path: parent_full_path.to_string(),
                })
            }
        })
}

/// True if `name` is exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Clones one project into `{base_dir}/{parent_full_path}/{project_path}`.
///
/// An existing target is never touched. Failing to create the parent
/// directory is logged and the clone is attempted anyway.
///
/// # Errors
///
/// Returns `FsError::UnsafePath` if the group or project path would leave
/// `base_dir`, or the fetcher's `GitError` if the clone fails. Either aborts
/// the run.
pub async fn clone_project<F: RepoFetcher + Sync>(
    settings: &MirrorSettings,
    fetcher: &F,
    repo_url: &str,
    parent_full_path: &str,
    project_path: &str,
) -> MirrorResult<CloneOutcome> {
    let parent = clone_dir(settings.base_dir(), parent_full_path)?;
    if !is_plain_name(project_path) {
        return Err(FsError::UnsafePath {
            path: project_path.to_string(),
        }
        .into());
    }
    let dest = parent.join(project_path);

    if tokio::fs::try_exists(&dest).await.unwrap_or(false) {
        info!(
            dest = %dest.display(),
            "Skipping clone, directory already exists"
        );
        return Ok(CloneOutcome::Skipped);
    }

    if settings.dry_run() {
        info!(
            url = repo_url,
            dest = %dest.display(),
            "[dry-run] Would clone repository"
        );
        return Ok(CloneOutcome::DryRun);
    }

    if let Err(source) = tokio::fs::create_dir_all(&parent).await {
        let err = FsError::CreateDir {
            path: parent.display().to_string(),
            source,
        };
        warn!(error = %err, "continuing with clone");
    }

    debug!(url = repo_url, dir = %parent.display(), "Cloning repository");
    fetcher.fetch_into(repo_url, &parent).await?;

    info!(
        url = repo_url,
        dest = %dest.display(),
        "Project cloned"
    );
    Ok(CloneOutcome::Cloned)
}
