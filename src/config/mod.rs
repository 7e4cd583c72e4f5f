//! # Configuration
//!
//! Each workflow reads its own TOML file from the project root
//! (`convert.toml`, `update-time.toml`). A missing file means built-in
//! defaults; a malformed or invalid one is reported and also falls back to
//! the defaults so the run can continue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod settings;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::settings::{GlobalConfig, Settings, Task, TaskConfig};
use crate::{
    constants::{
        CONVERT_CONFIG_FILE, DEFAULT_CONVERT_ID_LENGTH, DEFAULT_TASK_NAME, MAX_ID_LENGTH,
        TIMESTAMP_CONFIG_FILE,
    },
    exclude::{ExcludeRules, PatternError},
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("task '{task}': chars must not be empty")]
    EmptyAlphabet { task: String },

    #[error("task '{task}': chars must not contain '{symbol}'")]
    UnsafeAlphabet { task: String, symbol: char },

    #[error(
        "task '{task}': string_length must be between 1 and {max}, got {length}",
        max = MAX_ID_LENGTH
    )]
    InvalidLength { task: String, length: usize },
}

/// The two batch workflows, each with its own config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Id assignment and relocation
    Convert,
    /// `date`/`update` refresh of changed documents
    Timestamp,
}

impl Workflow {
    /// Config file name in the project root.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Convert => CONVERT_CONFIG_FILE,
            Self::Timestamp => TIMESTAMP_CONFIG_FILE,
        }
    }

    /// Built-in global settings.
    pub fn default_settings(self) -> Settings {
        match self {
            Self::Convert => Settings::new(DEFAULT_CONVERT_ID_LENGTH, ExcludeRules::default()),
            Self::Timestamp => Settings::new(
                DEFAULT_CONVERT_ID_LENGTH,
                ExcludeRules::new(["README.md"], [r"^temp-.*\.md$", r"^draft-.*\.md$"]),
            ),
        }
    }

    /// Built-in task list, used when the file has no `tasks`.
    pub fn default_tasks(self) -> Vec<TaskConfig> {
        match self {
            Self::Convert => Vec::new(),
            Self::Timestamp => vec![TaskConfig::new(DEFAULT_TASK_NAME, ".")],
        }
    }
}

/// Contents of a workflow config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub global: GlobalConfig,

    /// Replaces the built-in task list when present
    #[serde(default)]
    pub tasks: Option<Vec<TaskConfig>>,
}

impl ConfigFile {
    /// Parses TOML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses `path`. Returns `Ok(None)` if the file does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content, path).map(Some)
    }
}

/// Resolved configuration for one workflow run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root all task paths are relative to
    pub root: PathBuf,

    pub workflow: Workflow,

    /// Global settings after overrides
    pub settings: Settings,

    /// Tasks in configured order
    pub tasks: Vec<Task>,

    /// Problems found while loading (the run used defaults instead)
    pub warnings: Vec<String>,
}

impl Config {
    /// Loads the workflow's config file from `root`, falling back to the
    /// built-in defaults if it is missing, malformed or invalid.
    pub fn load(root: &Path, workflow: Workflow) -> Result<Self, ConfigError> {
        let path = root.join(workflow.file_name());

        let loaded = ConfigFile::read(&path)
            .and_then(|file| file.map(|file| Self::resolve(root, workflow, &file)).transpose());

        match loaded {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), tasks = config.tasks.len(), "loaded config");
                Ok(config)
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::defaults(root, workflow)
            }
            Err(err) => {
                let message = format!("{:#}", anyhow::Error::new(err));
                tracing::warn!(path = %path.display(), error = %message, "config rejected");
                let mut config = Self::defaults(root, workflow)?;
                config
                    .warnings
                    .push(format!("{message}; using built-in defaults"));
                Ok(config)
            }
        }
    }

    /// Built-in configuration.
    pub fn defaults(root: &Path, workflow: Workflow) -> Result<Self, ConfigError> {
        Self::resolve(root, workflow, &ConfigFile::default())
    }

    /// Resolves a parsed file against the workflow defaults.
    pub fn resolve(root: &Path, workflow: Workflow, file: &ConfigFile) -> Result<Self, ConfigError> {
        let settings = workflow.default_settings().with_overrides(&file.global);

        // Global-level validation, so a bad global value is reported even
        // when no task exists to carry it.
        Task::resolve(root, &settings, &TaskConfig::new("global", "."))?;

        let task_configs = file
            .tasks
            .clone()
            .unwrap_or_else(|| workflow.default_tasks());
        let tasks = task_configs
            .iter()
            .map(|task| Task::resolve(root, &settings, task))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            workflow,
            settings,
            tasks,
            warnings: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[global]
string_length = 5
verbose = false

[global.exclude]
files = ["README.md"]
patterns = ['^temp-.*\.md$']

[[tasks]]
name = "中文文档"
source_dir = "zh"
target_dir = "post-zh"

[tasks.exclude]
files = ["index.md"]
patterns = ['^private-.*\.md$']

[[tasks]]
name = "English"
path = "./en"
string_length = 7
"#;

    #[test]
    fn test_parse_and_resolve() {
        let file = ConfigFile::parse(SAMPLE, Path::new("convert.toml")).unwrap();
        let config = Config::resolve(Path::new("/blog"), Workflow::Convert, &file).unwrap();

        assert_eq!(config.settings.string_length, 5);
        assert_eq!(config.tasks.len(), 2);

        let zh = &config.tasks[0];
        assert_eq!(zh.name, "中文文档");
        assert_eq!(zh.source_dir, PathBuf::from("/blog/zh"));
        assert_eq!(zh.output_dir(), Path::new("/blog/post-zh"));
        assert_eq!(zh.string_length, 5);
        assert!(!zh.verbose);
        assert!(zh.exclude.should_exclude(Path::new("index.md")));
        assert!(zh.exclude.should_exclude(Path::new("README.md")));

        let en = &config.tasks[1];
        assert_eq!(en.source_dir, PathBuf::from("/blog/en"));
        assert_eq!(en.string_length, 7);
        assert!(!en.exclude.should_exclude(Path::new("index.md")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConfigFile::parse("[global]\nstringLength = 5\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_timestamp_defaults() {
        let config = Config::defaults(Path::new("/blog"), Workflow::Timestamp).unwrap();
        assert_eq!(config.tasks.len(), 1);
        assert_eq!(config.tasks[0].name, DEFAULT_TASK_NAME);
        assert_eq!(config.tasks[0].source_dir, PathBuf::from("/blog"));
        assert!(config.tasks[0].exclude.should_exclude(Path::new("draft-1.md")));
        assert!(config.tasks[0].exclude.should_exclude(Path::new("README.md")));
    }

    #[test]
    fn test_convert_defaults() {
        let config = Config::defaults(Path::new("/blog"), Workflow::Convert).unwrap();
        assert!(config.tasks.is_empty());
        assert_eq!(config.settings.string_length, DEFAULT_CONVERT_ID_LENGTH);
        assert!(config.settings.exclude.is_empty());
    }

    #[test]
    fn test_file_without_tasks_keeps_default_tasks() {
        let file = ConfigFile::parse("[global]\nverbose = false\n", Path::new("t.toml")).unwrap();
        let config = Config::resolve(Path::new("/blog"), Workflow::Timestamp, &file).unwrap();
        assert_eq!(config.tasks.len(), 1);
        assert!(!config.tasks[0].verbose);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path(), Workflow::Convert).unwrap();
        assert!(config.tasks.is_empty());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(TIMESTAMP_CONFIG_FILE), "[global\nbroken").unwrap();
        let config = Config::load(dir.path(), Workflow::Timestamp).unwrap();
        assert_eq!(config.tasks.len(), 1);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("update-time.toml"));
    }

    #[test]
    fn test_load_invalid_pattern_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONVERT_CONFIG_FILE),
            "[[tasks]]\nname = \"a\"\nsource_dir = \"a\"\n[tasks.exclude]\npatterns = [\"(\"]\n",
        )
        .unwrap();
        let config = Config::load(dir.path(), Workflow::Convert).unwrap();
        assert!(config.tasks.is_empty());
        assert!(config.warnings[0].contains("invalid exclude pattern"));
    }
}
