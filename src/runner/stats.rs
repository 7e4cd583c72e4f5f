//! # Run Statistics
//!
//! Per-task counters for both workflows and the per-run report that sums them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{iter::Sum, ops::AddAssign};

/// Counters that can be summed across tasks and printed as labelled rows.
pub trait Stats: Copy + Default + AddAssign + Sum {
    /// `(label, value)` rows in display order.
    fn rows(&self) -> Vec<(&'static str, usize)>;
}

/// Convert workflow counters.
///
/// `total` counts every `.md` file in the source directory; excluded files
/// count as skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub total: usize,
    pub success: usize,
    pub skip: usize,
    pub fail: usize,
}

impl ConvertStats {
    /// Derives `fail` as whatever was neither converted nor skipped.
    pub const fn settle(mut self) -> Self {
        self.fail = self.total.saturating_sub(self.success + self.skip);
        self
    }
}

impl AddAssign for ConvertStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.success += rhs.success;
        self.skip += rhs.skip;
        self.fail += rhs.fail;
    }
}

impl Sum for ConvertStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

impl Stats for ConvertStats {
    fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("total", self.total),
            ("converted", self.success),
            ("skipped", self.skip),
            ("failed", self.fail),
        ]
    }
}

/// Timestamp workflow counters.
///
/// `skip` counts documents without frontmatter; `excluded` those removed by
/// exclude rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampStats {
    pub total: usize,
    pub success: usize,
    pub skip: usize,
    pub excluded: usize,
    pub fail: usize,
}

impl AddAssign for TimestampStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.success += rhs.success;
        self.skip += rhs.skip;
        self.excluded += rhs.excluded;
        self.fail += rhs.fail;
    }
}

impl Sum for TimestampStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

impl Stats for TimestampStats {
    fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("total", self.total),
            ("updated", self.success),
            ("skipped", self.skip),
            ("excluded", self.excluded),
            ("failed", self.fail),
        ]
    }
}

/// Counters of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport<S> {
    pub name: String,
    pub stats: S,
}

/// All task reports of one run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport<S> {
    pub tasks: Vec<TaskReport<S>>,
}

impl<S> Default for RunReport<S> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<S: Stats> RunReport<S> {
    pub fn push(&mut self, name: impl Into<String>, stats: S) {
        self.tasks.push(TaskReport {
            name: name.into(),
            stats,
        });
    }

    /// Sum over all tasks.
    pub fn totals(&self) -> S {
        self.tasks.iter().map(|task| task.stats).sum()
    }
}
