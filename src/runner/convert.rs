//! # Convert Workflow
//!
//! Gives every document of a task a stable id and writes it to
//! `<target_dir>/<id>.md`. Ids come from one [`IdPool`] shared by all tasks
//! of the run, so documents from different source directories never land on
//! the same file name.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use super::stats::{ConvertStats, RunReport};
use crate::{
    config::Task,
    constants::{DOCUMENT_EXTENSION, FIELD_ID},
    frontmatter,
    id::{self, IdPool},
    storage, ui,
};

/// Per-file convert failures that are not plain I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("id '{0}' cannot be used as a file name")]
    InvalidId(String),

    #[error("id '{0}' is already used by another document in this run")]
    DuplicateId(String),
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub id: String,
    /// File that was written
    pub target: PathBuf,
    /// True if the id was newly allocated and inserted
    pub assigned: bool,
    /// True if the source file was deleted afterwards
    pub removed_source: bool,
}

/// Returns true if `id` is usable as a file stem.
fn is_safe_stem(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

/// Runs every task in order against the shared `pool`.
pub fn run(tasks: &[Task], pool: &mut IdPool) -> RunReport<ConvertStats> {
    let mut report = RunReport::default();
    for (index, task) in tasks.iter().enumerate() {
        ui::print_task_header(&task.name, index + 1, tasks.len());
        let stats = run_task(task, pool);
        ui::print_task_stats(&stats);
        report.push(task.name.clone(), stats);
    }
    report
}

/// Converts the `.md` files directly inside the task's source directory.
///
/// A missing source directory is a warning and yields zero counts.
pub fn run_task(task: &Task, pool: &mut IdPool) -> ConvertStats {
    let mut stats = ConvertStats::default();

    if !task.source_dir.is_dir() {
        ui::print_warning(format!(
            "source directory not found, skipping: {}",
            task.source_dir.display()
        ));
        return stats;
    }

    let files = match storage::list_markdown(&task.source_dir) {
        Ok(files) => files,
        Err(err) => {
            ui::print_warning(format!("{err:#}"));
            return stats;
        }
    };
    stats.total = files.len();
    tracing::debug!(task = %task.name, files = files.len(), "converting");

    for source in &files {
        let shown = storage::relative_to(source, &task.source_dir);

        if let Some(rule) = task.exclude.matching_rule(source) {
            stats.skip += 1;
            if task.verbose {
                ui::print_excluded(shown, rule);
            }
            continue;
        }

        match convert_file(task, source, pool) {
            Ok(converted) => {
                stats.success += 1;
                if task.verbose {
                    ui::print_converted(shown, &converted);
                }
            }
            Err(err) => ui::print_file_error(shown, &err),
        }
    }

    stats.settle()
}

/// Converts one document: reuses its `id:` or allocates a new one, writes
/// `<output_dir>/<id>.md` and removes the source unless it is kept.
pub fn convert_file(task: &Task, source: &Path, pool: &mut IdPool) -> Result<Converted> {
    let content = storage::read_document(source)?;

    let (id, output) = match frontmatter::extract_field(&content, FIELD_ID) {
        Some(id) => {
            if !is_safe_stem(&id) {
                return Err(ConvertError::InvalidId(id).into());
            }
            if !pool.claim(&id) {
                return Err(ConvertError::DuplicateId(id).into());
            }
            (id, None)
        }
        None => {
            let id = id::allocate_unique(pool, task.string_length, &task.alphabet);
            let output = frontmatter::insert_id_after_open(&content, &id);
            (id, Some(output))
        }
    };

    let target = task
        .output_dir()
        .join(format!("{id}.{DOCUMENT_EXTENSION}"));
    storage::write_document(&target, output.as_deref().unwrap_or(&content))?;

    let removed_source = !task.keep_original && !same_file(source, &target);
    if removed_source {
        storage::remove_document(source)?;
    }

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        %id,
        "converted"
    );

    Ok(Converted {
        id,
        target,
        assigned: output.is_some(),
        removed_source,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => storage::normalize(a) == storage::normalize(b),
    }
}
