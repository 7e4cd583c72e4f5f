//! # Commit & Push Commands
//!
//! `commit` refreshes timestamps and commits everything; `push` also
//! converts documents and pushes the result.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{Context, Result};

use super::{convert, time};
use crate::{clock, storage::git, ui};

/// Arguments for the push command
#[derive(Debug, Clone)]
pub struct PushArgs {
    pub remote: String,
    pub branch: String,
}

/// Executes the commit command.
pub fn commit(root: &Path) -> Result<()> {
    time::execute(root)?;
    commit_all(root).map(|_| ())
}

/// Executes the push command.
pub fn push(root: &Path, args: &PushArgs) -> Result<()> {
    time::execute(root)?;
    convert::execute(root)?;

    let result = commit_all(root).and_then(|_| {
        ui::print_info(format!("Pushing to {} {}", args.remote, args.branch));
        git::push(root, &args.remote, &args.branch)
    });

    if let Err(err) = result {
        ui::print_push_hints(&args.remote, &args.branch);
        return Err(err).context("Push failed");
    }

    ui::print_success(format!("Pushed to {} {}", args.remote, args.branch));
    Ok(())
}

/// Stages everything and commits with a timestamped message.
///
/// Returns false when there was nothing to commit.
fn commit_all(root: &Path) -> Result<bool> {
    git::add_all(root)?;

    if !git::has_staged_changes(root)? {
        ui::print_info("No changes to commit");
        return Ok(false);
    }

    let message = clock::commit_message(&clock::now());
    git::commit(root, &message)?;
    ui::print_success(format!("Committed: {message}"));
    Ok(true)
}
