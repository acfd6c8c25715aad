// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authenticated GET requests against the GitLab API.
//!
//! ```text
//! GitLabClient::new(&settings)
//!        |
//!   group_url / subgroups_url / projects_url
//!        |
//!        v
//!   get(url) --> 200       --> Ok(body bytes)
//!            --> other     --> NetworkError::Api { status, body snippet }
//!            --> no answer --> NetworkError::Transport
//! ```

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::settings::MirrorSettings;
use crate::error::{MirrorResult, NetworkError};

/// Header GitLab reads personal/project/group access tokens from.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Longest response body kept in an [`NetworkError::Api`] message.
const BODY_SNIPPET_LEN: usize = 512;

/// Thin GitLab API client: one token, one API root, GET only.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    client: Client,
    api_base: String,
    token: String,
    per_page: u32,
}

impl GitLabClient {
    /// Builds a client for the API root and token in `settings`.
    /// Falls back to a default `reqwest` client if custom configuration fails.
    #[must_use]
    pub fn new(settings: &MirrorSettings) -> Self {
        let client = Client::builder()
            .user_agent(format!("glmirror/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: settings.api_base().to_string(),
            token: settings.access_token().to_string(),
            per_page: settings.per_page(),
        }
    }

    /// Group detail endpoint: `{api}/groups/{id}/`.
    #[must_use]
    pub fn group_url(&self, group_id: &str) -> String {
        format!("{}/groups/{}/", self.api_base, encode_group_id(group_id))
    }

    /// Direct subgroups endpoint: `{api}/groups/{id}/subgroups/`.
    #[must_use]
    pub fn subgroups_url(&self, group_id: &str) -> String {
        format!("{}subgroups/", self.group_url(group_id))
    }

    /// Direct, non-archived, non-shared projects of a group, one page.
    #[must_use]
    pub fn projects_url(&self, group_id: &str) -> String {
        format!(
            "{}/groups/{}/projects?archived=false&per_page={}&with_shared=false",
            self.api_base,
            encode_group_id(group_id),
            self.per_page
        )
    }

    /// Issues an authenticated GET and returns the body of a 200 response.
    ///
    /// # Errors
    ///
    /// - `NetworkError::Transport` if no response could be obtained or the
    ///   body could not be read.
    /// - `NetworkError::Api` for any status other than 200, with a snippet of
    ///   the body for diagnostics.
    pub async fn get(&self, url: &str) -> MirrorResult<Vec<u8>> {
        debug!(url, "GET");

        let transport = |source| NetworkError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(url, status = status.as_u16(), "unexpected response");
            return Err(NetworkError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body: body_snippet(&body),
            }
            .into());
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}

/// Encodes a group identifier for use as one path segment.
///
/// Numeric ids pass through; a full path such as `team/backend` becomes
/// `team%2Fbackend`, the form GitLab expects for namespaced ids.
#[must_use]
pub fn encode_group_id(group_id: &str) -> String {
    group_id.trim_matches('/').replace('/', "%2F")
}

/// Trims a response body to a loggable size without splitting a character.
#[must_use]
pub fn body_snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
