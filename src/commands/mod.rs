//! # Commands
//!
//! CLI command implementations for postkit. Every command takes the project
//! root explicitly.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commit;
pub mod completions;
pub mod convert;
pub mod hook;
pub mod insert_ids;
pub mod new;
pub mod publish;
pub mod time;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use self::{
    commit::{commit, push, PushArgs},
    completions::execute as completions,
    convert::execute as convert,
    hook::execute as hook,
    insert_ids::{execute as insert_ids, InsertStats},
    new::{execute as new, NewArgs},
    publish::execute as publish,
    time::execute as time,
};

/// Resolves the project root to an absolute, canonical path.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("Project root not found: {}", root.display()))
}
