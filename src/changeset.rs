//! # Change Set
//!
//! Turns the working-tree status into the Markdown files a task should
//! touch: added, modified or untracked entries under the task root, with
//! untracked directories expanded to the documents inside them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::storage;

/// Two-letter porcelain status code for untracked entries.
const UNTRACKED: &str = "??";

/// One entry of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// `XY` status code (index, work tree)
    pub code: String,
    /// Path relative to the repository top level; directories end with `/`
    pub path: String,
}

impl StatusEntry {
    pub fn new(code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
        }
    }

    /// Untracked file or directory.
    pub fn is_untracked(&self) -> bool {
        self.code == UNTRACKED
    }

    /// Untracked directory (reported collapsed, with a trailing `/`).
    pub fn is_untracked_dir(&self) -> bool {
        self.is_untracked() && self.path.ends_with('/')
    }

    /// Added or modified, in the index or the work tree, and not deleted.
    ///
    /// Renames without further edits, deletions and conflicts are left out.
    pub fn is_added_or_modified(&self) -> bool {
        let mut codes = self.code.chars();
        let (Some(index), Some(worktree)) = (codes.next(), codes.next()) else {
            return false;
        };
        let touched = |c: char| matches!(c, 'A' | 'M');
        let gone = |c: char| matches!(c, 'D' | 'U');
        (touched(index) || touched(worktree)) && !gone(index) && !gone(worktree)
    }

    /// Whether this entry can contribute to a change set.
    pub fn is_candidate(&self) -> bool {
        self.is_untracked() || self.is_added_or_modified()
    }
}

/// Parses `git status --porcelain=v1 -z` output.
///
/// Rename and copy records carry their source path in the following field,
/// which is consumed and dropped.
pub fn parse_porcelain(output: &str) -> Vec<StatusEntry> {
    let mut entries = Vec::new();
    let mut fields = output.split('\0').filter(|f| !f.is_empty());

    while let Some(field) = fields.next() {
        let (Some(code), Some(path)) = (field.get(..2), field.get(3..)) else {
            tracing::debug!(field, "unparseable status record");
            continue;
        };
        if code.starts_with(['R', 'C']) {
            fields.next();
        }
        entries.push(StatusEntry::new(code, path));
    }

    entries
}

/// Resolves the `.md` files under `task_root` that the status reports as
/// new or changed. `repo_root` anchors the status paths. The result is
/// deduplicated and sorted.
pub fn resolve(repo_root: &Path, task_root: &Path, entries: &[StatusEntry]) -> Vec<PathBuf> {
    let task_root = storage::normalize(task_root);
    let mut files = BTreeSet::new();

    tracing::debug!(
        repo = %repo_root.display(),
        task = %task_root.display(),
        entries = entries.len(),
        "resolving change set"
    );

    for entry in entries.iter().filter(|e| e.is_candidate()) {
        let full = storage::normalize(&repo_root.join(&entry.path));

        if entry.is_untracked_dir() {
            let inside = storage::walk_markdown(&full)
                .filter(|file| storage::is_within(file, &task_root))
                .map(|file| storage::normalize(&file));
            files.extend(inside);
            continue;
        }

        let within = storage::is_within(&full, &task_root);
        tracing::debug!(
            code = %entry.code,
            path = %entry.path,
            full = %full.display(),
            within,
            "status entry"
        );
        if within && storage::is_markdown(&full) {
            files.insert(full);
        }
    }

    tracing::debug!(files = ?files, "change set");
    files.into_iter().collect()
}
