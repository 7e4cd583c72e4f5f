//! # Frontmatter Scanner
//!
//! Two-state scan (outside / inside) that locates the frontmatter block.
//! The block only counts when its opening delimiter is the first non-blank
//! line, and scanning stops at the closing delimiter, so `---` rules in the
//! body are never treated as boundaries.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::ops::Range;

use crate::constants::FRONTMATTER_DELIMITER;

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside { open: usize },
}

/// Line indices of a frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Index of the opening delimiter line.
    pub open: usize,
    /// Index of the closing delimiter line; `None` if the block never closes.
    pub close: Option<usize>,
}

impl Block {
    /// Range of field lines strictly between the delimiters.
    ///
    /// An unclosed block runs to the end of the document.
    pub fn fields(&self, line_count: usize) -> Range<usize> {
        self.open + 1..self.close.unwrap_or(line_count)
    }

    /// Index of the first line after the block.
    pub fn end(&self, line_count: usize) -> usize {
        self.close.map_or(line_count, |close| close + 1)
    }
}

/// Returns true if `line` is a delimiter line (surrounding whitespace ignored).
pub fn is_delimiter(line: &str) -> bool {
    line.trim() == FRONTMATTER_DELIMITER
}

/// Locates the frontmatter block in `lines`.
pub fn scan(lines: &[&str]) -> Option<Block> {
    let mut state = State::Outside;

    for (index, line) in lines.iter().enumerate() {
        match state {
            State::Outside => {
                if line.trim().is_empty() {
                    continue;
                }
                if !is_delimiter(line) {
                    return None;
                }
                state = State::Inside { open: index };
            }
            State::Inside { open } => {
                if is_delimiter(line) {
                    return Some(Block {
                        open,
                        close: Some(index),
                    });
                }
            }
        }
    }

    match state {
        State::Inside { open } => Some(Block { open, close: None }),
        State::Outside => None,
    }
}
