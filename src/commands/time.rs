//! # Time Command
//!
//! Refreshes `date`/`update` of the Markdown files git reports as new or
//! modified, task by task as configured in `update-time.toml`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{bail, Result};

use crate::{
    changeset, clock,
    config::{Config, Workflow},
    runner::{timestamp, RunReport, TimestampStats},
    storage::git,
    ui,
};

/// Executes the time command.
pub fn execute(root: &Path) -> Result<RunReport<TimestampStats>> {
    let config = Config::load(root, Workflow::Timestamp)?;
    ui::print_warnings(&config.warnings);

    if !git::is_git_repo(root) {
        bail!("Not a git repository: {}", root.display());
    }
    let repo = git::toplevel(root)?;
    let status = changeset::parse_porcelain(&git::status_porcelain(&repo)?);
    tracing::debug!(repo = %repo.display(), entries = status.len(), "working tree status");

    // One stamp for the whole run
    let now = clock::frontmatter_stamp(&clock::now());

    let report = timestamp::run(&repo, &config.tasks, &status, &now);
    ui::print_report("Timestamp refresh", &report);
    Ok(report)
}
