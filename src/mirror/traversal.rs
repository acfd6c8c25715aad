// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-depth group walk.
//!
//! ```text
//! root (fetch_group)
//!  |-- projects                      level 0
//!  '-- subgroups
//!       |-- projects                 level 1
//!       '-- subgroups
//!            '-- projects            level 2
//!                (their subgroups are never requested)
//! ```

use std::fmt;

use tracing::{debug, info};

use super::clone::{CloneOutcome, clone_project};
use crate::config::settings::MirrorSettings;
use crate::error::MirrorResult;
use crate::git::RepoFetcher;
use crate::gitlab::{GitLabClient, Subgroup, fetch_group, fetch_subgroups, list_projects};

/// Totals of one mirror run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Groups whose projects were listed.
    pub groups: usize,
    pub cloned: usize,
    pub skipped: usize,
    pub dry_run: usize,
}

impl MirrorReport {
    const fn record(&mut self, outcome: CloneOutcome) {
        match outcome {
            CloneOutcome::Cloned => self.cloned += 1,
            CloneOutcome::Skipped => self.skipped += 1,
            CloneOutcome::DryRun => self.dry_run += 1,
        }
    }

    /// Number of projects seen.
    #[must_use]
    pub const fn projects(&self) -> usize {
        self.cloned + self.skipped + self.dry_run
    }
}

impl fmt::Display for MirrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} groups, {} projects ({} cloned, {} skipped, {} dry-run)",
            self.groups,
            self.projects(),
            self.cloned,
            self.skipped,
            self.dry_run
        )
    }
}

/// Walks a group tree and mirrors every project found.
#[derive(Debug)]
pub struct Mirror<F> {
    client: GitLabClient,
    fetcher: F,
    settings: MirrorSettings,
}

impl<F: RepoFetcher + Sync> Mirror<F> {
    /// Creates a mirror with an API client built from `settings`.
    #[must_use]
    pub fn new(settings: MirrorSettings, fetcher: F) -> Self {
        let client = GitLabClient::new(&settings);
        Self {
            client,
            fetcher,
            settings,
        }
    }

    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub const fn settings(&self) -> &MirrorSettings {
        &self.settings
    }

    /// Mirrors the root group, its subgroups and their subgroups.
    ///
    /// Requests and clones run one after another in API order.
    ///
    /// # Errors
    ///
    /// The first network, decode or clone error aborts the walk and is
    /// returned; projects already cloned stay on disk.
    pub async fn run(&self) -> MirrorResult<MirrorReport> {
        let mut report = MirrorReport::default();

        let root = fetch_group(&self.client, self.settings.group_id()).await?;
        info!(group = %root.full_path, id = root.id, "Mirroring group");
        self.mirror_projects(&root, &mut report).await?;

        for subgroup in fetch_subgroups(&self.client, &root.id.to_string()).await? {
            self.mirror_projects(&subgroup, &mut report).await?;

            for child in fetch_subgroups(&self.client, &subgroup.id.to_string()).await? {
                self.mirror_projects(&child, &mut report).await?;
            }
        }

        Ok(report)
    }

    async fn mirror_projects(&self, group: &Subgroup, report: &mut MirrorReport) -> MirrorResult<()> {
        let projects = list_projects(&self.client, &group.id.to_string()).await?;
        debug!(group = %group.full_path, count = projects.len(), "Mirroring projects");
        report.groups += 1;

        for project in projects {
            let outcome = clone_project(
                &self.settings,
                &self.fetcher,
                &project.repo_url,
                &group.full_path,
                &project.path,
            )
            .await?;
            report.record(outcome);
        }
        Ok(())
    }
}
