// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab REST API (v4) access.
//!
//! ```text
//!   groups.rs              projects.rs
//!   fetch_group            list_projects
//!   fetch_subgroups            |
//!        |                     |
//!        v                     v
//!   types.rs  decode_one_or_many / decode_many
//!        \                    /
//!         v                  v
//!      client.rs  GitLabClient::get(url) -> bytes
//!                 PRIVATE-TOKEN header, 200 only
//! ```

pub mod client;
pub mod groups;
pub mod projects;
pub mod types;

pub use client::GitLabClient;
pub use groups::{fetch_group, fetch_subgroups};
pub use projects::list_projects;
pub use types::{Project, Subgroup};
