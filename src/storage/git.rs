//! # Git Integration
//!
//! Thin wrappers over the `git` executable: working-tree status for the
//! change set, staging, committing and pushing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{bail, Context, Result};

/// Gets the user name from git config (`git config user.name`).
pub fn user_name() -> Option<String> {
    Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Checks if `dir` is inside a git work tree.
pub fn is_git_repo(dir: &Path) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Runs git in `repo` and returns its stdout. Fails with git's stderr on a
/// non-zero exit.
fn capture(repo: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs git in `repo` with inherited stdio, so its own output reaches the user.
fn run(repo: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !status.success() {
        bail!("git {} exited with {status}", args.join(" "));
    }
    Ok(())
}

/// Absolute path of the repository's top-level directory.
pub fn toplevel(dir: &Path) -> Result<PathBuf> {
    let out = capture(dir, &["rev-parse", "--show-toplevel"])
        .with_context(|| format!("Not inside a git repository: {}", dir.display()))?;
    Ok(PathBuf::from(out.trim()))
}

/// NUL-separated porcelain status, paths relative to the top level.
pub fn status_porcelain(repo: &Path) -> Result<String> {
    capture(repo, &["status", "--porcelain=v1", "-z", "--untracked-files=normal"])
}

/// Staged files that were added, copied or modified, relative to the top level.
pub fn staged_files(repo: &Path) -> Result<Vec<PathBuf>> {
    let out = capture(
        repo,
        &["diff", "--cached", "--name-only", "--diff-filter=ACM", "-z"],
    )?;
    Ok(out
        .split('\0')
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Stages the given paths.
pub fn add(repo: &Path, paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .arg("add")
        .arg("--")
        .args(paths)
        .status()
        .context("Failed to execute git add")?;

    if !status.success() {
        bail!("git add exited with {status}");
    }
    Ok(())
}

/// Stages everything (`git add .`).
pub fn add_all(repo: &Path) -> Result<()> {
    run(repo, &["add", "."])
}

/// Returns true if the index differs from `HEAD`.
pub fn has_staged_changes(repo: &Path) -> Result<bool> {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["diff", "--cached", "--quiet"])
        .status()
        .context("Failed to execute git diff")?;
    // `--quiet` exits 1 when there are differences.
    match status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => bail!("git diff --cached exited with {status}"),
    }
}

/// Commits the index with `message`.
pub fn commit(repo: &Path, message: &str) -> Result<()> {
    run(repo, &["commit", "-m", message])
}

/// Pushes `branch` to `remote`.
pub fn push(repo: &Path, remote: &str, branch: &str) -> Result<()> {
    run(repo, &["push", remote, branch])
}
