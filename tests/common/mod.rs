//! # Test Harness
//!
//! Utilities for integration testing postkit against a throwaway blog
//! directory. Every command takes the project root explicitly, so tests
//! never change the process working directory and can run in parallel.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::TempDir;

/// A temporary blog project.
pub struct TestEnv {
    /// Keeps the directory alive for the duration of the test
    _dir: TempDir,
    /// Canonical project root
    root: PathBuf,
}

impl TestEnv {
    /// Creates an empty project directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp project dir");
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Creates a project that is also an initialized git repository.
    pub fn with_git() -> Self {
        let env = Self::new();
        env.git(&["init", "-q"]);
        env.git(&["config", "user.name", "Test User"]);
        env.git(&["config", "user.email", "test@example.com"]);
        env.git(&["config", "commit.gpgsign", "false"]);
        env
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a project-relative path.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Writes a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a project file.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Creates `convert.toml` with the given content.
    pub fn write_convert_config(&self, content: &str) {
        self.write("convert.toml", content);
    }

    /// Creates `update-time.toml` with the given content.
    pub fn write_time_config(&self, content: &str) {
        self.write("update-time.toml", content);
    }

    /// Names of the `.md` files directly inside `rel`, sorted.
    pub fn markdown_names(&self, rel: &str) -> Vec<String> {
        let dir = self.path(rel);
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = walkdir::WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs git in the project and returns stdout. Panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Stages and commits everything.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-q", "-m", message]);
    }
}

// =============================================================================
// Document Helpers
// =============================================================================

/// Value of the first `key:` line of a document, if any.
pub fn field<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix(key)?
            .strip_prefix(':')
            .map(str::trim)
    })
}

/// Number of `key:` lines in a document.
pub fn count_field(content: &str, key: &str) -> usize {
    content
        .lines()
        .filter(|line| line.trim_start().starts_with(&format!("{key}:")))
        .count()
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for one `[[tasks]]` table.
pub struct TaskBuilder {
    name: String,
    source_dir: String,
    target_dir: Option<String>,
    keep_original: Option<bool>,
    string_length: Option<usize>,
    exclude_files: Vec<String>,
    exclude_patterns: Vec<String>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>, source_dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_dir: source_dir.into(),
            target_dir: None,
            keep_original: None,
            string_length: None,
            exclude_files: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }

    pub fn target_dir(mut self, dir: impl Into<String>) -> Self {
        self.target_dir = Some(dir.into());
        self
    }

    pub fn keep_original(mut self, keep: bool) -> Self {
        self.keep_original = Some(keep);
        self
    }

    pub fn string_length(mut self, length: usize) -> Self {
        self.string_length = Some(length);
        self
    }

    pub fn exclude_file(mut self, file: impl Into<String>) -> Self {
        self.exclude_files.push(file.into());
        self
    }

    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = vec![
            "[[tasks]]".to_string(),
            format!("name = \"{}\"", self.name),
            format!("source_dir = \"{}\"", self.source_dir),
        ];
        if let Some(dir) = &self.target_dir {
            lines.push(format!("target_dir = \"{dir}\""));
        }
        if let Some(keep) = self.keep_original {
            lines.push(format!("keep_original = {keep}"));
        }
        if let Some(length) = self.string_length {
            lines.push(format!("string_length = {length}"));
        }
        if !self.exclude_files.is_empty() || !self.exclude_patterns.is_empty() {
            lines.push("[tasks.exclude]".to_string());
            lines.push(format!("files = {}", toml_list(&self.exclude_files)));
            lines.push(format!("patterns = {}", toml_list(&self.exclude_patterns)));
        }
        lines.join("\n")
    }
}

/// TOML array of literal strings.
fn toml_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Joins a `[global]` block and task tables into one config file.
pub fn config(global: &str, tasks: &[TaskBuilder]) -> String {
    let mut parts = Vec::new();
    if !global.is_empty() {
        parts.push(format!("[global]\n{global}"));
    }
    parts.extend(tasks.iter().map(TaskBuilder::build));
    parts.join("\n\n") + "\n"
}
