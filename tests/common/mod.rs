// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use glmirror::config::settings::MirrorSettings;
use glmirror::error::MirrorResult;
use glmirror::git::RepoFetcher;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Fetcher that records each clone and creates the checkout directory.
#[derive(Default)]
pub struct RecordingFetcher {
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingFetcher {
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RepoFetcher for RecordingFetcher {
    async fn fetch_into(&self, url: &str, parent_dir: &Path) -> MirrorResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), parent_dir.to_path_buf()));
        let name = url
            .rsplit('/')
            .next()
            .unwrap_or(url)
            .trim_end_matches(".git");
        std::fs::create_dir_all(parent_dir.join(name)).unwrap();
        Ok(())
    }
}

/// Settings pointing at a mock server.
pub fn settings(server: &MockServer, group_id: &str, base_dir: &Path) -> MirrorSettings {
    MirrorSettings::new(&server.uri(), "test-token", group_id, base_dir)
}

pub fn group(id: u64, full_path: &str) -> Value {
    let path = full_path.rsplit('/').next().unwrap_or(full_path);
    json!({
        "id": id,
        "name": path,
        "path": path,
        "full_path": full_path,
        "visibility": "private"
    })
}

pub fn project(id: u64, group_full_path: &str, path: &str) -> Value {
    json!({
        "id": id,
        "name": path,
        "path": path,
        "path_with_namespace": format!("{group_full_path}/{path}"),
        "http_url_to_repo": repo_url(group_full_path, path),
        "ssh_url_to_repo": format!("git@gitlab.example.com:{group_full_path}/{path}.git"),
        "archived": false
    })
}

pub fn repo_url(group_full_path: &str, path: &str) -> String {
    format!("https://gitlab.example.com/{group_full_path}/{path}.git")
}
