//! # Timestamp Workflow
//!
//! Refreshes `date`/`update` in the documents a task's change set names.
//! Only files the working tree reports as new or modified are touched.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use super::stats::{RunReport, TimestampStats};
use crate::{
    changeset::{self, StatusEntry},
    config::Task,
    frontmatter, storage, ui,
};

/// Runs every task in order. `repo_root` anchors the status paths and `now`
/// is the stamp written to every refreshed document.
pub fn run(
    repo_root: &Path,
    tasks: &[Task],
    status: &[StatusEntry],
    now: &str,
) -> RunReport<TimestampStats> {
    let mut report = RunReport::default();
    for (index, task) in tasks.iter().enumerate() {
        ui::print_task_header(&task.name, index + 1, tasks.len());
        let stats = run_task(repo_root, task, status, now);
        ui::print_task_stats(&stats);
        report.push(task.name.clone(), stats);
    }
    report
}

/// Refreshes the changed documents under one task's directory.
pub fn run_task(
    repo_root: &Path,
    task: &Task,
    status: &[StatusEntry],
    now: &str,
) -> TimestampStats {
    let mut stats = TimestampStats::default();

    if !task.source_dir.is_dir() {
        ui::print_warning(format!(
            "directory not found, skipping: {}",
            task.source_dir.display()
        ));
        return stats;
    }

    let files = changeset::resolve(repo_root, &task.source_dir, status);
    stats.total = files.len();

    let (excluded, included): (Vec<_>, Vec<_>) = files
        .iter()
        .partition(|path| task.exclude.should_exclude(path));
    stats.excluded = excluded.len();

    if task.verbose {
        for path in &excluded {
            let rule = task.exclude.matching_rule(path).unwrap_or_default();
            ui::print_excluded(storage::relative_to(path, &task.source_dir), rule);
        }
    }

    for path in included {
        let shown = storage::relative_to(path, &task.source_dir);
        match refresh_file(path, now) {
            Ok(true) => {
                stats.success += 1;
                if task.verbose {
                    ui::print_updated(shown);
                }
            }
            Ok(false) => {
                stats.skip += 1;
                if task.verbose {
                    ui::print_skipped(shown, "no frontmatter");
                }
            }
            Err(err) => {
                stats.fail += 1;
                ui::print_file_error(shown, &err);
            }
        }
    }

    stats
}

/// Stamps one document in place. Returns false (and writes nothing) when the
/// document has no frontmatter.
pub fn refresh_file(path: &Path, now: &str) -> Result<bool> {
    let content = storage::read_document(path)?;
    let (updated, changed) = frontmatter::upsert_timestamp_fields(&content, now);
    if changed {
        storage::write_document(path, &updated)?;
    }
    Ok(changed)
}
