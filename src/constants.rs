//! # Constants
//!
//! Centralized constants for magic values used throughout postkit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Document Format
// =============================================================================

/// Frontmatter delimiter line.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Field holding the stable document identifier.
pub const FIELD_ID: &str = "id";

/// Field holding the creation timestamp.
pub const FIELD_DATE: &str = "date";

/// Field holding the last-update timestamp.
pub const FIELD_UPDATE: &str = "update";

/// File extension for documents.
pub const DOCUMENT_EXTENSION: &str = "md";

// =============================================================================
// Identifiers
// =============================================================================

/// Default identifier alphabet: case-sensitive letters and digits (62 symbols).
pub const DEFAULT_ID_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Identifier length used by the convert workflow when nothing is configured.
pub const DEFAULT_CONVERT_ID_LENGTH: usize = 10;

/// Identifier length for newly created posts and `insert-ids`.
pub const POST_ID_LENGTH: usize = 5;

/// Length of generated post file names.
pub const POST_FILENAME_LENGTH: usize = 8;

/// Upper bound accepted for configured identifier lengths.
pub const MAX_ID_LENGTH: usize = 64;

/// Characters a configured alphabet may not contain.
pub const UNSAFE_ID_CHARS: [char; 3] = ['/', '\\', '.'];

// =============================================================================
// Configuration
// =============================================================================

/// Convert workflow configuration file (in the project root).
pub const CONVERT_CONFIG_FILE: &str = "convert.toml";

/// Timestamp workflow configuration file (in the project root).
pub const TIMESTAMP_CONFIG_FILE: &str = "update-time.toml";

/// Name of the built-in timestamp task.
pub const DEFAULT_TASK_NAME: &str = "默认任务";

// =============================================================================
// Time
// =============================================================================

/// Civil time zone offset for all stamps (UTC+8).
pub const TIMEZONE_OFFSET_SECS: i32 = 8 * 3600;

/// Frontmatter timestamp format.
pub const FRONTMATTER_TIME_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// Commit message timestamp format.
pub const COMMIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Git & Publishing
// =============================================================================

/// Commit message prefix, followed by the commit timestamp.
pub const COMMIT_MESSAGE_PREFIX: &str = "文档更新：";

/// Default remote for `push`.
pub const DEFAULT_REMOTE: &str = "origin";

/// Default branch for `push`.
pub const DEFAULT_BRANCH: &str = "main";

/// Environment variable holding the build webhook URL.
pub const WEBHOOK_URL_ENV: &str = "POSTKIT_WEBHOOK_URL";

/// Fallback author for new posts when git has no `user.name`.
pub const DEFAULT_AUTHOR: &str = "Anonymous";
