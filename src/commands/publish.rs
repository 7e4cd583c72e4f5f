//! # Publish Command
//!
//! Triggers a site rebuild through the build webhook.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{constants::WEBHOOK_URL_ENV, ui, webhook};

/// Executes the publish command.
///
/// `url` comes from `--url` or the environment; the status code is only
/// reported.
pub fn execute(url: Option<&str>) -> Result<()> {
    let Some(url) = url.filter(|url| !url.trim().is_empty()) else {
        anyhow::bail!("No webhook URL. Pass --url or set {WEBHOOK_URL_ENV}");
    };

    let status = webhook::trigger(url)?;
    if status.is_success() {
        ui::print_success(format!("Build triggered (status {status})"));
    } else {
        ui::print_warning(format!("Webhook answered with status {status}"));
    }
    Ok(())
}
