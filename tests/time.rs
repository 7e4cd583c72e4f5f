//! # Timestamp Workflow Tests
//!
//! Tests for `postkit time` and the pre-commit hook against real git
//! repositories.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{count_field, field, TestEnv};
use postkit::{commands, TimestampStats};

const DOC: &str = "---\ntitle: Hello\ndate: 2024-01-01\n---\n\nBody\n";

#[test]
fn test_only_changed_files_are_stamped() {
    let env = TestEnv::with_git();
    env.write("zh/old.md", DOC);
    env.write("zh/edited.md", DOC);
    env.commit_all("initial");

    env.write("zh/edited.md", &format!("{DOC}More\n"));
    env.write("zh/new.md", DOC);

    let report = commands::time(env.root()).expect("time should succeed");
    let totals = report.totals();
    assert_eq!(totals.total, 2);
    assert_eq!(totals.success, 2);

    assert_eq!(env.read("zh/old.md"), DOC);

    for rel in ["zh/edited.md", "zh/new.md"] {
        let content = env.read(rel);
        assert_eq!(count_field(&content, "update"), 1, "{rel}");
        assert_eq!(field(&content, "date"), Some("2024-01-01"));
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[3].starts_with("update: "), "update follows date in {rel}");
    }
}

#[test]
fn test_untracked_directories_are_expanded() {
    let env = TestEnv::with_git();
    env.write("README.md", "# readme\n");
    env.commit_all("initial");

    env.write("posts/2025/a.md", DOC);
    env.write("posts/2025/deep/b.md", "---\n---\n");
    env.write("posts/2025/image.png", "png");

    let report = commands::time(env.root()).expect("time should succeed");
    assert_eq!(report.totals().success, 2);

    let b = env.read("posts/2025/deep/b.md");
    assert!(b.starts_with("---\ndate: "));
    assert_eq!(count_field(&b, "update"), 1);
}

#[test]
fn test_default_excludes_and_missing_frontmatter() {
    let env = TestEnv::with_git();
    env.write("keep.md", DOC);
    env.commit_all("initial");

    env.write("README.md", DOC);
    env.write("draft-idea.md", DOC);
    env.write("temp-scratch.md", DOC);
    env.write("plain.md", "no header\n");
    env.write("post.md", DOC);

    let report = commands::time(env.root()).expect("time should succeed");
    assert_eq!(
        report.totals(),
        TimestampStats {
            total: 5,
            success: 1,
            skip: 1,
            excluded: 3,
            fail: 0,
        }
    );
    assert_eq!(env.read("README.md"), DOC);
    assert_eq!(env.read("draft-idea.md"), DOC);
    assert_eq!(env.read("plain.md"), "no header\n");
}

#[test]
fn test_rerun_replaces_update_without_duplicating() {
    let env = TestEnv::with_git();
    env.write("a.md", "---\ndate: 2024-01-01\nupdate: 2024-02-02\nupdate: 2024-03-03\n---\n");

    commands::time(env.root()).expect("first run should succeed");
    let first = env.read("a.md");
    assert_eq!(count_field(&first, "update"), 1);
    assert_ne!(field(&first, "update"), Some("2024-02-02"));
    let line_count = first.lines().count();

    commands::time(env.root()).expect("second run should succeed");
    let second = env.read("a.md");
    assert_eq!(second.lines().count(), line_count);
    assert_eq!(count_field(&second, "update"), 1);
}

#[test]
fn test_configured_tasks_scope_the_change_set() {
    let env = TestEnv::with_git();
    env.write("zh/a.md", DOC);
    env.write("en/b.md", DOC);
    env.write("ja/c.md", DOC);
    env.write_time_config(
        "[global]\nverbose = false\n\n\
[[tasks]]\nname = \"zh\"\npath = \"zh\"\n\n\
[[tasks]]\nname = \"en\"\npath = \"en\"\n\
[tasks.exclude]\nfiles = ['b.md']\n",
    );

    let report = commands::time(env.root()).expect("time should succeed");
    assert_eq!(report.tasks.len(), 2);
    assert_eq!(report.tasks[0].stats.success, 1);
    assert_eq!(report.tasks[1].stats.excluded, 1);

    assert_eq!(env.read("en/b.md"), DOC);
    assert_eq!(env.read("ja/c.md"), DOC);
    assert_eq!(count_field(&env.read("zh/a.md"), "update"), 1);
}

#[test]
fn test_time_outside_git_fails() {
    let env = TestEnv::new();
    // The temp dir may itself live inside a repository on some machines
    if env.root().ancestors().any(|dir| dir.join(".git").exists()) {
        return;
    }
    let err = commands::time(env.root()).expect_err("time needs a repository");
    assert!(err.to_string().starts_with("Not a git repository"));
}

#[test]
fn test_hook_restages_staged_markdown() {
    let env = TestEnv::with_git();
    env.write("zh/a.md", DOC);
    env.write("zh/unstaged.md", DOC);
    env.write("draft-x.md", DOC);
    env.git(&["add", "zh/a.md", "draft-x.md"]);

    let restaged = commands::hook(env.root()).expect("hook should succeed");
    assert_eq!(restaged.len(), 1);
    assert!(restaged[0].ends_with("zh/a.md"));

    assert_eq!(count_field(&env.read("zh/a.md"), "update"), 1);
    assert_eq!(env.read("zh/unstaged.md"), DOC);
    assert_eq!(env.read("draft-x.md"), DOC);

    // The refreshed content is what is staged
    let staged = env.git(&["diff", "--cached", "--", "zh/a.md"]);
    assert!(staged.contains("+update: "));
    assert!(env.git(&["diff", "--", "zh/a.md"]).is_empty());
}
