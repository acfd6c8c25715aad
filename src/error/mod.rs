// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              MirrorError (16 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Config Network Decode  Fs     Git  Process
//!  Box    Box     Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingKey, InvalidValue, Load
//!   Network Transport, Api
//!   Decode  Body, Empty
//!   Fs      CreateDir            (logged, never fatal)
//!   Git     CloneFailed, Spawn
//!   Process ExecutableNotFound
//! ```
//!
//! Everything except `FsError` aborts the run: the error travels back to
//! `main`, which prints it and exits non-zero.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MirrorError`].
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum pointer-sized plus tag.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Network or API status error.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] Box<DecodeError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process lookup error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MirrorError {
                fn from(err: $error) -> Self {
                    MirrorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    NetworkError => Network,
    DecodeError => Decode,
    FsError => Fs,
    GitError => Git,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]' (set it with --{flag})")]
    MissingKey {
        section: String,
        key: String,
        flag: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration sources could not be read or merged.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Request never produced a response (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with something other than 200 OK.
    #[error("unexpected response {status} from {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },
}

// --- Decode Errors ---

/// Response body errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is neither the expected record nor a list of them.
    #[error("failed to decode {expected} from {url}: {source}")]
    Body {
        url: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Group lookup decoded to zero records.
    #[error("no group record returned by {url}")]
    Empty { url: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Directory could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A path from the API would leave the base directory.
    #[error("refusing to use '{path}' as a relative path under the base directory")]
    UnsafePath { path: String },
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Clone command exited unsuccessfully.
    #[error("failed to clone {url} into '{dir}': {}", exit_description(*.code))]
    CloneFailed {
        url: String,
        dir: String,
        code: Option<i32>,
    },

    /// Clone command could not be started.
    #[error("failed to run '{program}' in '{dir}': {source}")]
    Spawn {
        program: String,
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_description(code: Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exited with code {code}"),
    )
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },
}
