//! # Exclude Rules
//!
//! Literal file names and regular expressions that keep documents out of a
//! workflow. Global and task rules are unioned; any single match excludes.
//! Both kinds are checked against the file's basename only.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeSet, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exclusion rules as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExcludeRules {
    /// Exact basenames to exclude
    #[serde(default)]
    pub files: BTreeSet<String>,

    /// Regular expressions searched for in the basename
    #[serde(default)]
    pub patterns: BTreeSet<String>,
}

/// A pattern that is not a valid regular expression.
#[derive(Debug, Error)]
#[error("invalid exclude pattern '{pattern}'")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

impl ExcludeRules {
    /// Creates a rule set from literal names and patterns.
    pub fn new<F, P>(files: F, patterns: P) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Union of global and task rules, duplicates collapsed.
    pub fn merge(global: &Self, task: &Self) -> Self {
        Self {
            files: global.files.union(&task.files).cloned().collect(),
            patterns: global.patterns.union(&task.patterns).cloned().collect(),
        }
    }

    /// Returns true if there are no rules at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.patterns.is_empty()
    }

    /// Compiles the patterns.
    pub fn compile(&self) -> Result<ExcludeMatcher, PatternError> {
        let patterns = self
            .patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| PatternError {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExcludeMatcher {
            files: self.files.clone(),
            patterns,
        })
    }
}

/// Compiled exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    files: BTreeSet<String>,
    patterns: Vec<Regex>,
}

impl ExcludeMatcher {
    /// Returns true if the basename of `path` is listed or matches a pattern.
    pub fn should_exclude(&self, path: &Path) -> bool {
        self.matching_rule(path).is_some()
    }

    /// The first rule that excludes `path`, for diagnostics.
    pub fn matching_rule(&self, path: &Path) -> Option<&str> {
        let name = path.file_name()?.to_string_lossy();

        if let Some(file) = self.files.get(name.as_ref()) {
            return Some(file.as_str());
        }

        self.patterns
            .iter()
            .find(|regex| regex.is_match(&name))
            .map(Regex::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(files: &[&str], patterns: &[&str]) -> ExcludeMatcher {
        ExcludeRules::new(files.iter().copied(), patterns.iter().copied())
            .compile()
            .unwrap()
    }

    #[test]
    fn test_literal_and_pattern_rules() {
        let rules = matcher(&["README.md"], &[r"^draft-.*\.md$"]);
        assert!(rules.should_exclude(Path::new("README.md")));
        assert!(rules.should_exclude(Path::new("draft-2024.md")));
        assert!(!rules.should_exclude(Path::new("post.md")));
    }

    #[test]
    fn test_matches_basename_not_path() {
        let rules = matcher(&["README.md"], &[r"^private-"]);
        assert!(rules.should_exclude(Path::new("/blog/zh/README.md")));
        assert!(rules.should_exclude(Path::new("zh/private-notes.md")));
        assert!(!rules.should_exclude(Path::new("private-dir/post.md")));
    }

    #[test]
    fn test_unanchored_pattern_matches_substring() {
        let rules = matcher(&[], &["wip"]);
        assert!(rules.should_exclude(Path::new("my-wip-post.md")));
        assert!(!rules.should_exclude(Path::new("finished.md")));
    }

    #[test]
    fn test_literal_is_exact_and_case_sensitive() {
        let rules = matcher(&["index.md"], &[]);
        assert!(!rules.should_exclude(Path::new("Index.md")));
        assert!(!rules.should_exclude(Path::new("index.md.bak")));
    }

    #[test]
    fn test_merge_unions_and_dedupes() {
        let global = ExcludeRules::new(["README.md"], [r"^temp-.*\.md$"]);
        let task = ExcludeRules::new(["index.md", "README.md"], [r"^temp-.*\.md$", "^x"]);
        let merged = ExcludeRules::merge(&global, &task);
        assert_eq!(merged.files.len(), 2);
        assert_eq!(merged.patterns.len(), 2);
        assert_eq!(merged, ExcludeRules::merge(&task, &global));
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let err = ExcludeRules::new(Vec::<String>::new(), ["(unclosed"])
            .compile()
            .unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
    }

    #[test]
    fn test_matching_rule_names_the_rule() {
        let rules = matcher(&["README.md"], &["^temp-"]);
        assert_eq!(rules.matching_rule(Path::new("README.md")), Some("README.md"));
        assert_eq!(rules.matching_rule(Path::new("temp-1.md")), Some("^temp-"));
        assert_eq!(rules.matching_rule(Path::new("a.md")), None);
        assert!(ExcludeRules::default().is_empty());
    }
}
