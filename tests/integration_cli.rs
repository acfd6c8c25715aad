// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::{CommandFactory, Parser};
use glmirror::cli::{Cli, Command};

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_bare_invocation_mirrors() {
    let cli = Cli::try_parse_from(["glmirror"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_subcommands() {
    for (arg, expected) in [
        ("version", "Version"),
        ("options", "Options"),
        ("configs", "Configs"),
    ] {
        let cli = Cli::try_parse_from(["glmirror", arg]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(format!("{command:?}"), expected);
    }
}

#[test]
fn cli_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["glmirror", "sync"]).is_err());
}

#[test]
fn cli_mirror_flags_before_subcommand() {
    let cli = Cli::try_parse_from(["glmirror", "--group-id", "5", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.mirror.group_id.as_deref(), Some("5"));
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn cli_help_lists_mirror_flags() {
    let help = Cli::command().render_long_help().to_string();
    for flag in [
        "--access-token",
        "--base-dir",
        "--gitlab-base-url",
        "--group-id",
        "--config",
        "--dry",
        "GITLAB_TOKEN",
    ] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}
