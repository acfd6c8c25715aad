// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab API records and body decoding.
//!
//! Only the fields the mirror needs are declared; serde ignores the rest of
//! the (large) GitLab payloads.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// A group or subgroup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subgroup {
    pub id: u64,
    /// Last path segment, e.g. `backend`.
    pub path: String,
    /// Slash-joined ancestry, e.g. `team/backend`. Used as a relative path.
    pub full_path: String,
}

/// A project (repository) owned by a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u64,
    /// HTTPS clone URL.
    #[serde(rename = "http_url_to_repo")]
    pub repo_url: String,
    /// Repository slug; the directory `git clone` creates.
    pub path: String,
}

/// Decodes a body that is either a JSON array of `T` or a single `T`.
///
/// Compatibility shim for GitLab answering with a bare object where a list is
/// expected (the group detail endpoint always does, listings sometimes do
/// when there is one entry). The array form is tried first, then the object
/// form, which is wrapped into a one-element vector.
///
/// # Errors
///
/// Returns `DecodeError::Body` carrying the object-form parse error when
/// neither form matches.
pub fn decode_one_or_many<T: DeserializeOwned>(
    body: &[u8],
    url: &str,
    expected: &'static str,
) -> Result<Vec<T>, DecodeError> {
    serde_json::from_slice::<Vec<T>>(body)
        .or_else(|_| serde_json::from_slice::<T>(body).map(|one| vec![one]))
        .map_err(|source| DecodeError::Body {
            url: url.to_string(),
            expected,
            source,
        })
}

/// Decodes a body that must be a JSON array of `T`.
///
/// # Errors
///
/// Returns `DecodeError::Body` if the body is not such an array.
pub fn decode_many<T: DeserializeOwned>(
    body: &[u8],
    url: &str,
    expected: &'static str,
) -> Result<Vec<T>, DecodeError> {
    serde_json::from_slice::<Vec<T>>(body).map_err(|source| DecodeError::Body {
        url: url.to_string(),
        expected,
        source,
    })
}
