//! # Clock
//!
//! Wall-clock stamps in the site's fixed civil time zone (UTC+8).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::constants::{
    COMMIT_MESSAGE_PREFIX, COMMIT_TIME_FORMAT, FRONTMATTER_TIME_FORMAT, TIMEZONE_OFFSET_SECS,
};

/// The UTC+8 offset.
pub fn site_offset() -> FixedOffset {
    FixedOffset::east_opt(TIMEZONE_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current time in the site time zone.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&site_offset())
}

/// Frontmatter stamp, e.g. `2025-01-31-09:05:00`.
pub fn frontmatter_stamp(at: &DateTime<FixedOffset>) -> String {
    at.format(FRONTMATTER_TIME_FORMAT).to_string()
}

/// Commit message, e.g. `文档更新：2025-01-31 09:05:00`.
pub fn commit_message(at: &DateTime<FixedOffset>) -> String {
    format!("{COMMIT_MESSAGE_PREFIX}{}", at.format(COMMIT_TIME_FORMAT))
}
