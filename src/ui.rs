//! # UI Utilities
//!
//! Console output shared by the commands and workflows: per-file progress,
//! task headers, statistics tables and colored warnings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt::Display, path::Path};

use owo_colors::OwoColorize;

use crate::runner::{Converted, RunReport, Stats};

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: impl Display) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an informational line.
pub fn print_info(message: impl Display) {
    println!("{} {}", "•".cyan(), message);
}

/// Prints a warning with yellow prefix.
pub fn print_warning(message: impl Display) {
    eprintln!("{} {}", "warning:".yellow(), message);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        print_warning(warning);
    }
}

// =============================================================================
// Per-file Progress
// =============================================================================

/// Prints a converted document: `+ a.md -> Ab3dE.md`.
pub fn print_converted(source: &Path, converted: &Converted) {
    let target = converted.target.file_name().map_or_else(
        || converted.target.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let note = match (converted.assigned, converted.removed_source) {
        (true, true) => " (new id, source removed)",
        (true, false) => " (new id)",
        (false, true) => " (source removed)",
        (false, false) => "",
    };
    println!(
        "  {} {} -> {}{}",
        "+".green(),
        source.display(),
        target,
        note.dimmed()
    );
}

/// Prints a document whose timestamps were refreshed.
pub fn print_updated(path: &Path) {
    println!("  {} {}", "~".green(), path.display());
}

/// Prints a document left alone, with the reason.
pub fn print_skipped(path: &Path, reason: &str) {
    println!("  {} {} {}", "-".dimmed(), path.display(), format!("({reason})").dimmed());
}

/// Prints a document removed by an exclude rule.
pub fn print_excluded(path: &Path, rule: &str) {
    println!(
        "  {} {} {}",
        "-".dimmed(),
        path.display(),
        format!("(excluded by {rule})").dimmed()
    );
}

/// Prints a per-file failure with its error chain.
pub fn print_file_error(path: &Path, err: &anyhow::Error) {
    eprintln!("  {} {}: {err:#}", "✗".red(), path.display());
}

// =============================================================================
// Statistics
// =============================================================================

/// Prints the header for one task of a run.
pub fn print_task_header(name: &str, index: usize, count: usize) {
    println!();
    println!("{} {}", format!("[{index}/{count}]").dimmed(), name.bold());
}

/// Prints one task's counters on a single line.
pub fn print_task_stats<S: Stats>(stats: &S) {
    let line = stats
        .rows()
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {}", line.dimmed());
}

/// Prints overall totals and the per-task breakdown.
pub fn print_report<S: Stats>(title: &str, report: &RunReport<S>) {
    let totals = report.totals();

    println!();
    println!("{}", title.bold());
    for (label, value) in totals.rows() {
        println!("  {label:<10} {value:>5}");
    }

    if report.tasks.len() > 1 {
        println!();
        println!("{}", "Per task".bold());
        let header: String = totals
            .rows()
            .iter()
            .map(|(label, _)| format!("{label:>9}"))
            .collect();
        println!("  {:<20} {}", "", header.dimmed());
        for task in &report.tasks {
            let values: String = task
                .stats
                .rows()
                .iter()
                .map(|(_, value)| format!("{value:>9}"))
                .collect();
            println!("  {:<20} {values}", task.name);
        }
    }
}

// =============================================================================
// Remediation
// =============================================================================

/// Prints what to check after a failed commit or push.
pub fn print_push_hints(remote: &str, branch: &str) {
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  1. The remote has commits you do not have yet:");
    eprintln!("       git pull {remote} {branch}");
    eprintln!("     Resolve any merge conflicts, commit, then push again.");
    eprintln!("  2. You lack push permission for '{remote}':");
    eprintln!("       git remote -v");
    eprintln!("  3. Network problems. Check your connection and retry.");
}
