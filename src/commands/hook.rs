//! # Hook Command
//!
//! Pre-commit hook: refreshes the timestamps of staged Markdown files and
//! stages them again so the commit carries the new stamp.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    clock,
    config::{Config, Workflow},
    runner::timestamp,
    storage::{self, git},
    ui,
};

/// Executes the hook command. Returns the files that were re-staged,
/// relative to the repository top level.
pub fn execute(root: &Path) -> Result<Vec<PathBuf>> {
    let config = Config::load(root, Workflow::Timestamp)?;
    ui::print_warnings(&config.warnings);
    let exclude = config.settings.exclude.compile()?;

    let repo = git::toplevel(root)?;
    let now = clock::frontmatter_stamp(&clock::now());
    let mut restaged = Vec::new();

    for file in git::staged_files(&repo)? {
        let path = repo.join(&file);
        if !storage::is_markdown(&path) || !path.is_file() {
            continue;
        }
        if let Some(rule) = exclude.matching_rule(&path) {
            tracing::debug!(file = %file.display(), rule, "excluded from hook");
            continue;
        }

        match timestamp::refresh_file(&path, &now) {
            Ok(true) => {
                git::add(&repo, std::slice::from_ref(&file))?;
                ui::print_updated(&file);
                restaged.push(file);
            }
            Ok(false) => {}
            Err(err) => ui::print_file_error(&file, &err),
        }
    }

    Ok(restaged)
}
