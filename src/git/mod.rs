// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   mirror::clone
//!        |
//!        v
//!  ,-------------------,
//!  | RepoFetcher trait |
//!  '---------+---------'
//!            |
//!            v
//!         GitCli  --> git clone <url>   (cwd = parent dir, stdio inherited)
//! ```
//!
//! Only the initial clone is ever performed; existing checkouts are left
//! alone by the caller.

pub mod backend;

pub use backend::{GitCli, RepoFetcher};
