// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for glmirror using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! glmirror [global options] [mirror options]   mirror the group tree
//! version
//! options
//! configs
//! ```

pub mod global;
pub mod mirror;


use crate::cli::global::GlobalOptions;
use crate::cli::mirror::MirrorArgs;
use clap::{Parser, Subcommand};

/// GitLab group mirror
///
/// Clones every project of a GitLab group and its subgroups into a local
/// directory tree.
#[derive(Debug, Parser)]
#[command(
    name = "glmirror",
    author,
    version,
    about = "GitLab group mirror",
    long_about = "glmirror Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Clones every project of a GitLab group, its subgroups and\n\
                  their subgroups into {base-dir}/{group path}/{project}.\n\
                  Projects that already have a directory are skipped.",
    after_help = "CONFIG FILES:\n\n\
                  glmirror reads `glmirror.toml` from the current directory if it\n\
                  exists, then every file given with --config in order. Values\n\
                  can also be set with GLMIRROR_<SECTION>__<KEY> environment\n\
                  variables, e.g. GLMIRROR_GITLAB__GROUP_ID. Command-line flags\n\
                  override everything else."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Mirror source and destination
    #[command(flatten)]
    pub mirror: MirrorArgs,

    /// Command to execute; mirrors when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values after merging all sources.
    Options,

    /// Lists the config files that were loaded.
    Configs,
}

impl Cli {
    /// All configuration overrides given on the command line.
    #[must_use]
    pub fn config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = self.global.to_config_overrides();
        overrides.extend(self.mirror.to_config_overrides());
        overrides
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
