//! # Convert Command
//!
//! Assigns ids and relocates documents to `<target_dir>/<id>.md` for every
//! task in `convert.toml`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use crate::{
    config::{Config, Workflow},
    id::IdPool,
    runner::{convert, ConvertStats, RunReport},
    ui,
};

/// Executes the convert command.
pub fn execute(root: &Path) -> Result<RunReport<ConvertStats>> {
    let config = Config::load(root, Workflow::Convert)?;
    ui::print_warnings(&config.warnings);

    if config.tasks.is_empty() {
        ui::print_warning(format!(
            "no tasks configured in {}, nothing to convert",
            Workflow::Convert.file_name()
        ));
    }

    let mut pool = IdPool::new();
    let report = convert::run(&config.tasks, &mut pool);
    ui::print_report("File conversion", &report);
    Ok(report)
}
