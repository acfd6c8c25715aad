// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository fetcher abstraction.
//!
//! ```text
//! RepoFetcher (capability) --> GitCli (git CLI)
//!                          --> test fakes recording calls
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{GitError, MirrorResult, ProcessError};

/// Clones a repository into a parent directory.
///
/// Implementors must leave the checkout in `parent_dir/<repository name>`,
/// the layout `git clone <url>` produces.
pub trait RepoFetcher {
    /// Clone `url` with `parent_dir` as working directory.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the clone cannot be started or does not
    /// succeed.
    fn fetch_into(
        &self,
        url: &str,
        parent_dir: &Path,
    ) -> impl Future<Output = MirrorResult<()>> + Send;
}

/// Shell-based fetcher using the git CLI.
///
/// Output is not captured: git's progress and errors go straight to the
/// terminal.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    /// Uses `program` as given, resolved by the OS at spawn time.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolves `program` through `PATH` up front.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the program cannot be
    /// found.
    pub fn locate(program: &Path) -> MirrorResult<Self> {
        let resolved = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.display().to_string(),
        })?;
        debug!(program = %resolved.display(), "using clone program");
        Ok(Self::new(resolved))
    }

    /// The program this fetcher runs.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl RepoFetcher for GitCli {
    async fn fetch_into(&self, url: &str, parent_dir: &Path) -> MirrorResult<()> {
        debug!(cwd = %parent_dir.display(), url, "git clone");

        // Never block on a credential prompt
        let status = Command::new(&self.program)
            .args(["clone", url])
            .current_dir(parent_dir)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| GitError::Spawn {
                program: self.program.display().to_string(),
                dir: parent_dir.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(GitError::CloneFailed {
                url: url.to_string(),
                dir: parent_dir.display().to_string(),
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
