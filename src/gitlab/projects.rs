// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project listing.

use tracing::debug;

use super::client::GitLabClient;
use super::types::{Project, decode_many};
use crate::error::MirrorResult;

/// Lists the non-archived, non-shared projects directly under `group_id`.
///
/// Only the first page is requested, sized by `gitlab.per_page`; projects
/// past that bound are not returned. An empty list is a valid answer.
///
/// # Errors
///
/// Returns a `NetworkError` if the request fails or is not answered with
/// 200, or a `DecodeError` if the body is not a project list.
pub async fn list_projects(client: &GitLabClient, group_id: &str) -> MirrorResult<Vec<Project>> {
    let url = client.projects_url(group_id);
    let body = client.get(&url).await?;
    let projects: Vec<Project> = decode_many(&body, &url, "projects")?;
    debug!(group = group_id, count = projects.len(), "listed projects");
    Ok(projects)
}
