//! # Settings & Tasks
//!
//! File schema for the `[global]` table and `[[tasks]]` entries, and the pure
//! resolution of built-in defaults, global overrides and task overrides into
//! a ready-to-run [`Task`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::{
    constants::{DEFAULT_ID_ALPHABET, MAX_ID_LENGTH, UNSAFE_ID_CHARS},
    exclude::{ExcludeMatcher, ExcludeRules},
    id::Alphabet,
    storage,
};

/// The `[global]` table. Every field is optional and overrides the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Identifier length
    #[serde(default)]
    pub string_length: Option<usize>,

    /// Identifier alphabet
    #[serde(default)]
    pub chars: Option<String>,

    /// Per-file progress output
    #[serde(default)]
    pub verbose: Option<bool>,

    /// Keep source files after conversion
    #[serde(default)]
    pub keep_original: Option<bool>,

    /// Replaces the built-in exclude rules
    #[serde(default)]
    pub exclude: Option<ExcludeRules>,
}

/// One `[[tasks]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Display name
    pub name: String,

    /// Directory holding the documents, relative to the project root
    #[serde(alias = "path")]
    pub source_dir: PathBuf,

    /// Output directory for converted documents (defaults to `source_dir`)
    #[serde(default)]
    pub target_dir: Option<PathBuf>,

    #[serde(default)]
    pub string_length: Option<usize>,

    #[serde(default)]
    pub chars: Option<String>,

    #[serde(default)]
    pub verbose: Option<bool>,

    #[serde(default)]
    pub keep_original: Option<bool>,

    /// Merged with the global rules, not replacing them
    #[serde(default)]
    pub exclude: ExcludeRules,
}

impl TaskConfig {
    /// Creates a task entry with no overrides.
    pub fn new(name: impl Into<String>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source_dir: source_dir.into(),
            target_dir: None,
            string_length: None,
            chars: None,
            verbose: None,
            keep_original: None,
            exclude: ExcludeRules::default(),
        }
    }
}

/// Fully resolved global settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub string_length: usize,
    pub chars: String,
    pub verbose: bool,
    pub keep_original: bool,
    pub exclude: ExcludeRules,
}

impl Settings {
    /// Built-in settings with the given identifier length and exclude rules.
    pub fn new(string_length: usize, exclude: ExcludeRules) -> Self {
        Self {
            string_length,
            chars: DEFAULT_ID_ALPHABET.to_string(),
            verbose: true,
            keep_original: true,
            exclude,
        }
    }

    /// Applies the `[global]` table field by field.
    pub fn with_overrides(&self, global: &GlobalConfig) -> Self {
        Self {
            string_length: global.string_length.unwrap_or(self.string_length),
            chars: global.chars.clone().unwrap_or_else(|| self.chars.clone()),
            verbose: global.verbose.unwrap_or(self.verbose),
            keep_original: global.keep_original.unwrap_or(self.keep_original),
            exclude: global.exclude.clone().unwrap_or_else(|| self.exclude.clone()),
        }
    }
}

/// A task ready to run: paths resolved, rules merged and compiled.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    /// Absolute source directory
    pub source_dir: PathBuf,
    /// Absolute target directory, if configured
    pub target_dir: Option<PathBuf>,
    pub string_length: usize,
    pub alphabet: Alphabet,
    pub verbose: bool,
    pub keep_original: bool,
    /// Merged rule set, kept for display
    pub exclude_rules: ExcludeRules,
    /// Compiled form of `exclude_rules`
    pub exclude: ExcludeMatcher,
}

impl Task {
    /// Resolves a task entry against `settings`, with paths relative to `root`.
    pub fn resolve(root: &Path, settings: &Settings, task: &TaskConfig) -> Result<Self, ConfigError> {
        let string_length = task.string_length.unwrap_or(settings.string_length);
        if !(1..=MAX_ID_LENGTH).contains(&string_length) {
            return Err(ConfigError::InvalidLength {
                task: task.name.clone(),
                length: string_length,
            });
        }

        let chars = task.chars.as_deref().unwrap_or(&settings.chars);
        // Ids become file names
        if let Some(symbol) = chars.chars().find(|c| UNSAFE_ID_CHARS.contains(c)) {
            return Err(ConfigError::UnsafeAlphabet {
                task: task.name.clone(),
                symbol,
            });
        }
        let alphabet = Alphabet::new(chars).ok_or_else(|| ConfigError::EmptyAlphabet {
            task: task.name.clone(),
        })?;

        let exclude_rules = ExcludeRules::merge(&settings.exclude, &task.exclude);
        let exclude = exclude_rules.compile()?;

        Ok(Self {
            name: task.name.clone(),
            source_dir: storage::normalize(&root.join(&task.source_dir)),
            target_dir: task
                .target_dir
                .as_ref()
                .map(|dir| storage::normalize(&root.join(dir))),
            string_length,
            alphabet,
            verbose: task.verbose.unwrap_or(settings.verbose),
            keep_original: task.keep_original.unwrap_or(settings.keep_original),
            exclude_rules,
            exclude,
        })
    }

    /// Directory converted documents are written to.
    pub fn output_dir(&self) -> &Path {
        self.target_dir.as_deref().unwrap_or(&self.source_dir)
    }
}
