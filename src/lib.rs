//! # postkit
//!
//! Content-management workflows for a Markdown blog kept in git.
//!
//! Documents are plain Markdown files with a small `key: value` header.
//! postkit gives them stable random ids, relocates them to `<id>.md`,
//! refreshes their `date`/`update` stamps, and drives the git commit and
//! push that publishes them.
//!
//! ## Features
//!
//! - **Id Stamping**: Run-unique random ids, inserted without touching the rest of the file
//! - **Relocation**: Per-task source and target folders with merged exclude rules
//! - **Timestamps**: Only documents git reports as new or modified are refreshed
//! - **Publishing**: Timestamped commits, push, and a build webhook
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod changeset;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod exclude;
pub mod frontmatter;
pub mod id;
pub mod logging;
pub mod runner;
pub mod storage;
pub mod ui;
pub mod webhook;

pub use config::{Config, ConfigError, Task, Workflow};
pub use exclude::{ExcludeMatcher, ExcludeRules};
pub use id::{Alphabet, IdPool};
pub use runner::{ConvertStats, RunReport, TimestampStats};
