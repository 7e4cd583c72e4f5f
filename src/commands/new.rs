//! # New Command
//!
//! Creates a new post in a language folder from a fixed template.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    clock,
    constants::{DEFAULT_AUTHOR, DOCUMENT_EXTENSION, FIELD_ID, POST_FILENAME_LENGTH, POST_ID_LENGTH},
    editor, frontmatter,
    id::{self, Alphabet, IdPool},
    storage::{self, git},
    ui,
};

/// Arguments for the new command
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub language: Option<String>,
    pub file_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated
    pub tags: Option<String>,
    pub open: bool,
}

/// Per-language folder and template defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub folder: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static str,
    pub contents: &'static str,
}

pub static LANGUAGES: [Language; 3] = [
    Language {
        code: "en",
        folder: "en",
        title: "New Post",
        description: "This is a new post",
        tags: "post,new",
        contents: "Contents",
    },
    Language {
        code: "ja",
        folder: "ja",
        title: "新しい投稿",
        description: "これは新しい投稿です",
        tags: "投稿,新規",
        contents: "目次",
    },
    Language {
        code: "zh",
        folder: "zh",
        title: "新文章",
        description: "这是一篇新文章",
        tags: "文章,新的",
        contents: "目录",
    },
];

impl Language {
    /// Looks up `code`, falling back to Chinese.
    pub fn resolve(code: &str) -> &'static Self {
        let fallback = &LANGUAGES[2];
        LANGUAGES
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
            .unwrap_or(fallback)
    }
}

/// Field values of a new post.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: String,
    pub timestamp: String,
}

impl Post {
    /// Renders the post file: frontmatter, title heading and a contents block.
    pub fn render(&self, language: &Language) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|tag| format!("    - {tag}\n"))
            .collect();

        format!(
            "---\n\
{FIELD_ID}: {id}\n\
title: {title}\n\
date: {now}\n\
update: {now}\n\
category: Note\n\
tags:\n\
{tags}\
description: {description}\n\
outline: [2,3]\n\
draft: false\n\
publish: true\n\
author: {author}\n\
---\n\
\n\
# {title}\n\
\n\
::: details {contents}\n\
[[toc]]\n\
:::\n",
            id = self.id,
            title = self.title,
            now = self.timestamp,
            description = self.description,
            author = self.author,
            contents = language.contents,
        )
    }
}

/// Splits a comma-separated tag list, dropping blanks.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Treats empty arguments as absent.
fn given(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Ids already used by posts in `dir`.
fn existing_ids(dir: &Path) -> Result<IdPool> {
    let mut pool = IdPool::new();
    if !dir.is_dir() {
        return Ok(pool);
    }
    for path in storage::list_markdown(dir)? {
        let content = storage::read_document(&path)?;
        if let Some(id) = frontmatter::extract_field(&content, FIELD_ID) {
            pool.claim(&id);
        }
    }
    Ok(pool)
}

/// Random file stem not yet taken in `dir`.
fn unique_file_name(dir: &Path, alphabet: &Alphabet) -> String {
    loop {
        let name = id::generate(POST_FILENAME_LENGTH, alphabet);
        if !dir.join(format!("{name}.{DOCUMENT_EXTENSION}")).exists() {
            return name;
        }
    }
}

/// Executes the new command. Returns the path of the created post.
pub fn execute(root: &Path, args: &NewArgs) -> Result<PathBuf> {
    let language = Language::resolve(given(args.language.as_ref()).unwrap_or("zh"));
    let dir = root.join(language.folder);
    let alphabet = Alphabet::default();

    let file_name = match given(args.file_name.as_ref()) {
        Some(name) => name.to_string(),
        None => unique_file_name(&dir, &alphabet),
    };
    let path = dir.join(format!("{file_name}.{DOCUMENT_EXTENSION}"));
    if path.exists() {
        anyhow::bail!("File already exists: {}", path.display());
    }

    let mut pool = existing_ids(&dir)?;
    let post = Post {
        id: id::allocate_unique(&mut pool, POST_ID_LENGTH, &alphabet),
        title: given(args.title.as_ref()).unwrap_or(language.title).to_string(),
        description: given(args.description.as_ref())
            .unwrap_or(language.description)
            .to_string(),
        tags: parse_tags(given(args.tags.as_ref()).unwrap_or(language.tags)),
        author: git::user_name().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        timestamp: clock::frontmatter_stamp(&clock::now()),
    };

    storage::write_document(&path, &post.render(language))?;

    ui::print_success(format!("Created post: {}", storage::relative_to(&path, root).display()));
    println!("  {} {}", "Language:".dimmed(), language.code);
    println!("  {} {}", "Id:".dimmed(), post.id);
    println!("  {} {}", "Title:".dimmed(), post.title);

    if args.open {
        editor::open(&path).context("Failed to open editor")?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::resolve("en").folder, "en");
        assert_eq!(Language::resolve("JA").folder, "ja");
        assert_eq!(Language::resolve("fr").folder, "zh");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("rust, cli,,  "), ["rust", "cli"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_render() {
        let post = Post {
            id: "Ab3dE".into(),
            title: "Hello".into(),
            description: "desc".into(),
            tags: vec!["a".into(), "b".into()],
            author: "Jane".into(),
            timestamp: "2025-01-31-09:05:00".into(),
        };
        let out = post.render(Language::resolve("en"));

        assert!(out.starts_with("---\nid: Ab3dE\ntitle: Hello\ndate: 2025-01-31-09:05:00\n"));
        assert!(out.contains("update: 2025-01-31-09:05:00\n"));
        assert!(out.contains("tags:\n    - a\n    - b\n"));
        assert!(out.contains("author: Jane\n---\n\n# Hello\n"));
        assert!(out.ends_with("::: details Contents\n[[toc]]\n:::\n"));
        assert_eq!(frontmatter::extract_field(&out, FIELD_ID).as_deref(), Some("Ab3dE"));
    }

    #[test]
    fn test_execute_creates_post() {
        let dir = tempdir().unwrap();
        let args = NewArgs {
            language: Some("en".into()),
            file_name: Some("hello".into()),
            title: Some("Hello".into()),
            ..NewArgs::default()
        };
        let path = execute(dir.path(), &args).unwrap();
        assert_eq!(path, dir.path().join("en/hello.md"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("title: Hello\n"));
        assert!(content.contains("description: This is a new post\n"));
        let id = frontmatter::extract_field(&content, FIELD_ID).unwrap();
        assert_eq!(id.len(), POST_ID_LENGTH);

        let err = execute(dir.path(), &args).unwrap_err();
        assert!(format!("{err}").contains("already exists"));
    }

    #[test]
    fn test_execute_generates_file_name() {
        let dir = tempdir().unwrap();
        let path = execute(dir.path(), &NewArgs::default()).unwrap();
        assert_eq!(path.parent().unwrap(), dir.path().join("zh"));
        let stem = path.file_stem().unwrap().to_str().unwrap();
        assert_eq!(stem.len(), POST_FILENAME_LENGTH);
    }

    #[test]
    fn test_existing_ids_are_collected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\nid: AAAAA\n---\n").unwrap();
        fs::write(dir.path().join("b.md"), "no header\n").unwrap();
        let pool = existing_ids(dir.path()).unwrap();
        assert!(pool.contains("AAAAA"));
        assert_eq!(pool.len(), 1);
    }
}
