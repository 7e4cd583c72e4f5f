//! # Build Webhook
//!
//! Triggers a site rebuild with one empty POST.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, header::CONTENT_LENGTH, StatusCode};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Sends an empty POST to `url` and returns the response status.
///
/// Any status counts as delivered; only transport failures are errors.
pub fn trigger(url: &str) -> Result<StatusCode> {
    let client = Client::builder()
        .timeout(TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    tracing::debug!(url, "posting to build webhook");

    let response = client
        .post(url)
        .header(CONTENT_LENGTH, 0)
        .send()
        .with_context(|| format!("Failed to reach webhook: {url}"))?;

    let status = response.status();
    tracing::debug!(%status, "webhook responded");
    Ok(status)
}
