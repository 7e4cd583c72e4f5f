//! # Task Runner
//!
//! Runs the configured tasks of a workflow one after another and collects
//! their statistics. Per-file problems are printed and counted; they never
//! stop the batch.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod convert;
pub mod stats;
pub mod timestamp;

pub use self::{
    convert::{ConvertError, Converted},
    stats::{ConvertStats, RunReport, Stats, TaskReport, TimestampStats},
};
