//! # Insert-IDs Command
//!
//! Stamps an `id:` into every Markdown file below a directory, in place.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    constants::{FIELD_ID, POST_ID_LENGTH},
    frontmatter::{self, IdEdit},
    id::{self, Alphabet, IdPool},
    storage, ui,
};

/// Counters for one insert-ids run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertStats {
    /// `id:` added to an existing frontmatter
    pub inserted: usize,
    /// Frontmatter created from scratch
    pub created: usize,
    /// Already had an id
    pub unchanged: usize,
    pub failed: usize,
}

/// Executes the insert-ids command on `dir`.
pub fn execute(dir: &Path) -> Result<InsertStats> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    let files: Vec<PathBuf> = storage::walk_markdown(dir).collect();
    let mut pool = seed_pool(&files);
    let alphabet = Alphabet::default();
    let mut stats = InsertStats::default();

    for path in &files {
        let shown = storage::relative_to(path, dir);
        match stamp_file(path, &mut pool, &alphabet) {
            Ok(IdEdit::Unchanged) => {
                stats.unchanged += 1;
                ui::print_skipped(shown, "id exists");
            }
            Ok(IdEdit::Inserted(_)) => {
                stats.inserted += 1;
                println!("  {} {}", "+".green(), shown.display());
            }
            Ok(IdEdit::Created(_)) => {
                stats.created += 1;
                println!(
                    "  {} {} {}",
                    "+".green(),
                    shown.display(),
                    "(frontmatter created)".dimmed()
                );
            }
            Err(err) => {
                stats.failed += 1;
                ui::print_file_error(shown, &err);
            }
        }
    }

    ui::print_success(format!(
        "{} inserted, {} created, {} unchanged, {} failed",
        stats.inserted, stats.created, stats.unchanged, stats.failed
    ));
    Ok(stats)
}

/// Pool of ids already present in `files`, so new ones never repeat them.
fn seed_pool(files: &[PathBuf]) -> IdPool {
    let mut pool = IdPool::new();
    for path in files {
        let Ok(content) = storage::read_document(path) else {
            continue;
        };
        if let Some(id) = frontmatter::extract_field(&content, FIELD_ID) {
            pool.claim(&id);
        }
    }
    tracing::debug!(ids = pool.len(), "seeded id pool");
    pool
}

fn stamp_file(path: &Path, pool: &mut IdPool, alphabet: &Alphabet) -> Result<IdEdit> {
    let content = storage::read_document(path)?;
    if frontmatter::extract_field(&content, FIELD_ID).is_some() {
        return Ok(IdEdit::Unchanged);
    }

    let id = id::allocate_unique(pool, POST_ID_LENGTH, alphabet);
    let edit = frontmatter::edit_id(&content, &id);
    if let IdEdit::Inserted(updated) | IdEdit::Created(updated) = &edit {
        storage::write_document(path, updated)
            .with_context(|| format!("Failed to stamp id {id}"))?;
    }
    Ok(edit)
}
