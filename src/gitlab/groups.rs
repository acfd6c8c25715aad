// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Group resolution.

use tracing::debug;

use super::client::GitLabClient;
use super::types::{Subgroup, decode_one_or_many};
use crate::error::{DecodeError, MirrorResult};

/// Fetches the direct subgroups of `group_id`, in API order.
///
/// # Errors
///
/// Returns a `NetworkError` if the request fails or is not answered with
/// 200, or a `DecodeError` if the body is neither a subgroup list nor a
/// single subgroup.
pub async fn fetch_subgroups(client: &GitLabClient, group_id: &str) -> MirrorResult<Vec<Subgroup>> {
    let url = client.subgroups_url(group_id);
    let body = client.get(&url).await?;
    let subgroups: Vec<Subgroup> = decode_one_or_many(&body, &url, "subgroups")?;
    debug!(group = group_id, count = subgroups.len(), "fetched subgroups");
    Ok(subgroups)
}

/// Fetches the self-record of `group_id` from the group detail endpoint.
///
/// The body is decoded like a subgroup listing and the first record is taken
/// as canonical.
///
/// # Errors
///
/// Same as [`fetch_subgroups`], plus `DecodeError::Empty` if the body is an
/// empty list.
pub async fn fetch_group(client: &GitLabClient, group_id: &str) -> MirrorResult<Subgroup> {
    let url = client.group_url(group_id);
    let body = client.get(&url).await?;
    let group = decode_one_or_many::<Subgroup>(&body, &url, "group")?
        .into_iter()
        .next()
        .ok_or(DecodeError::Empty { url })?;
    debug!(group = group_id, id = group.id, full_path = %group.full_path, "resolved group");
    Ok(group)
}
