// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirror orchestration.
//!
//! ```text
//! traversal.rs  Mirror::run: root -> subgroups -> their subgroups
//!      |
//!      v
//! clone.rs      clone_project: skip / dry-run / mkdir / fetch
//! ```

pub mod clone;
pub mod traversal;

pub use clone::{CloneOutcome, clone_dir, clone_project};
pub use traversal::{Mirror, MirrorReport};
