//! # Editor Integration
//!
//! Launches the user's preferred editor on a freshly created post.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, io::IsTerminal, path::Path, process::Command};

use anyhow::{Context, Result};

/// Editor command line: `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Opens a file in the user's editor.
///
/// The editor is only launched if stdout is a terminal.
pub fn open(path: &Path) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Ok(());
    }

    let editor = command();

    // The command may carry arguments, e.g. "code --wait"
    let parts = shlex::split(&editor)
        .with_context(|| format!("Invalid editor command: {editor}"))?;
    let (program, args) = parts.split_first().context("Empty editor command")?;

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error: {status}");
    }

    Ok(())
}
