// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use super::{GitCli, RepoFetcher};
use crate::error::{GitError, MirrorError, ProcessError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Creates a repository with one commit under `dir/name`.
fn init_source_repo(dir: &Path, name: &str) -> std::path::PathBuf {
    let repo = dir.join(name);
    std::fs::create_dir_all(&repo).unwrap();
    let git = |args: &[&str]| {
        let status = Command::new("git")
            .args(args)
            .current_dir(&repo)
            .env("GIT_AUTHOR_NAME", "test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {args:?} failed");
    };
    git(&["init", "--quiet"]);
    std::fs::write(repo.join("README.md"), "hello\n").unwrap();
    git(&["add", "README.md"]);
    git(&["commit", "--quiet", "-m", "initial"]);
    repo
}

#[test]
fn test_default_program_is_git() {
    assert_eq!(GitCli::default().program(), Path::new("git"));
}

#[test]
fn test_locate_missing_program() {
    let err = GitCli::locate(Path::new("glmirror-no-such-program")).unwrap_err();
    match err {
        MirrorError::Process(inner) => {
            let ProcessError::ExecutableNotFound { name } = *inner;
            assert_eq!(name, "glmirror-no-such-program");
        }
        other => panic!("expected process error, got {other:?}"),
    }
}

#[test]
fn test_locate_git_resolves_absolute_path() {
    if !git_available() {
        return;
    }
    let cli = GitCli::locate(Path::new("git")).unwrap();
    assert!(cli.program().is_absolute());
}

#[tokio::test]
async fn test_fetch_into_creates_checkout_in_parent() {
    if !git_available() {
        return;
    }
    let sources = temp_dir();
    let target = temp_dir();
    let source = init_source_repo(sources.path(), "service-a");

    GitCli::default()
        .fetch_into(source.to_str().unwrap(), target.path())
        .await
        .unwrap();

    let checkout = target.path().join("service-a");
    assert!(checkout.join(".git").exists());
    assert_eq!(
        std::fs::read_to_string(checkout.join("README.md")).unwrap(),
        "hello\n"
    );
}

#[tokio::test]
async fn test_fetch_into_reports_failure_with_exit_code() {
    if !git_available() {
        return;
    }
    let target = temp_dir();
    let missing = target.path().join("does-not-exist");
    let url = missing.to_str().unwrap().to_string();

    let err = GitCli::default()
        .fetch_into(&url, target.path())
        .await
        .unwrap_err();
    match err {
        MirrorError::Git(inner) => match *inner {
            GitError::CloneFailed { url: failed, code, .. } => {
                assert_eq!(failed, url);
                assert!(code.is_some_and(|c| c != 0));
            }
            other => panic!("expected CloneFailed, got {other:?}"),
        },
        other => panic!("expected git error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_into_spawn_failure() {
    let target = temp_dir();
    let err = GitCli::new("/nonexistent/glmirror-git")
        .fetch_into("https://example.com/x.git", target.path())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, MirrorError::Git(inner) if matches!(**inner, GitError::Spawn { .. })),
        "expected Spawn, got {err:?}"
    );
}
