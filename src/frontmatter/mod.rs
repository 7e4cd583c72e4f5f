//! # Frontmatter Editing
//!
//! Line-level reads and edits of the `key: value` header at the top of a
//! Markdown document. This is not a YAML parser: only the known fields
//! (`id`, `date`, `update`) are looked at, and every other byte of the
//! document is carried through untouched.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod scanner;

use std::borrow::Cow;

use self::scanner::Block;
use crate::constants::{FIELD_DATE, FIELD_ID, FIELD_UPDATE, FRONTMATTER_DELIMITER};

/// A document split into lines, with its frontmatter block located.
///
/// Lines are split on `\n` only, so joining them back with `\n` reproduces
/// the input exactly (including any `\r` and the trailing newline).
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
    block: Option<Block>,
}

impl<'a> Document<'a> {
    /// Splits `content` and scans for the frontmatter block.
    pub fn parse(content: &'a str) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let block = scanner::scan(&lines);
        Self { lines, block }
    }

    /// Returns true if the document opens with a frontmatter block.
    pub const fn has_frontmatter(&self) -> bool {
        self.block.is_some()
    }

    /// Field lines between the delimiters (empty without frontmatter).
    pub fn header_lines(&self) -> &[&'a str] {
        self.block
            .map_or(&[][..], |block| &self.lines[block.fields(self.lines.len())])
    }

    /// Value of the first `key:` line in the frontmatter.
    pub fn field(&self, key: &str) -> Option<&'a str> {
        self.header_lines()
            .iter()
            .find_map(|line| field_value(line, key))
    }

    /// Returns true if the frontmatter has a `key:` line with a non-empty value.
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key)
            .map(unquote)
            .is_some_and(|value| !value.is_empty())
    }

    /// Index into the document lines of the first `key:` line in the frontmatter.
    fn field_line(&self, key: &str) -> Option<usize> {
        let fields = self.block?.fields(self.lines.len());
        let start = fields.start;
        self.lines[fields]
            .iter()
            .position(|line| field_value(line, key).is_some())
            .map(|offset| start + offset)
    }
}

/// Returns the trimmed value if `line` is a `key:` line.
fn field_value<'l>(line: &'l str, key: &str) -> Option<&'l str> {
    line.trim_start()
        .strip_prefix(key)?
        .strip_prefix(':')
        .map(str::trim)
}

/// Strips one pair of matching quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Line terminator remainder to append to inserted lines so they match the
/// delimiter line's `\r\n` style.
fn carriage_return(line: &str) -> &'static str {
    if line.ends_with('\r') {
        "\r"
    } else {
        ""
    }
}

/// Returns true iff the first non-blank line is the delimiter.
pub fn has_frontmatter(content: &str) -> bool {
    Document::parse(content).has_frontmatter()
}

/// Extracts the value of `key` from the frontmatter.
///
/// Returns `None` when the field is absent or its value is empty.
pub fn extract_field(content: &str, key: &str) -> Option<String> {
    Document::parse(content)
        .field(key)
        .map(unquote)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Outcome of [`edit_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdEdit {
    /// The document already carries a non-empty `id:`.
    Unchanged,
    /// `id:` was inserted after the opening delimiter, or an empty `id:`
    /// line was filled in.
    Inserted(String),
    /// The document had no frontmatter; one was created.
    Created(String),
}

impl IdEdit {
    /// The edited content, or `None` when nothing changed.
    pub fn into_content(self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::Inserted(content) | Self::Created(content) => Some(content),
        }
    }
}

/// Adds `id: <id>` to a document that lacks one. An empty `id:` line counts
/// as missing and is filled in where it stands.
pub fn edit_id(content: &str, id: &str) -> IdEdit {
    let doc = Document::parse(content);

    let Some(block) = doc.block else {
        let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
        return IdEdit::Created(format!(
            "{FRONTMATTER_DELIMITER}{eol}{FIELD_ID}: {id}{eol}{FRONTMATTER_DELIMITER}{eol}{content}"
        ));
    };

    if doc.has_field(FIELD_ID) {
        return IdEdit::Unchanged;
    }

    let empty_at = doc.field_line(FIELD_ID);
    let template = empty_at.map_or(doc.lines[block.open], |at| doc.lines[at]);
    let indent = if empty_at.is_some() {
        leading_whitespace(template)
    } else {
        ""
    };
    let id_line = format!("{indent}{FIELD_ID}: {id}{}", carriage_return(template));

    let mut lines: Vec<&str> = doc.lines;
    match empty_at {
        Some(at) => lines[at] = &id_line,
        None => lines.insert(block.open + 1, &id_line),
    }
    IdEdit::Inserted(lines.join("\n"))
}

/// Inserts `id: <id>` right after the opening delimiter, synthesizing a
/// frontmatter block when there is none. A document that already has a
/// non-empty `id:` is returned unchanged.
pub fn insert_id_after_open(content: &str, id: &str) -> String {
    edit_id(content, id)
        .into_content()
        .unwrap_or_else(|| content.to_string())
}

/// Refreshes `update:` (and `date:` when missing) to `now`.
///
/// Every existing `update:` line is dropped, and exactly one new one is
/// placed right after the last `date:` line, keeping its indentation. With
/// no `date:` line, `date:` and `update:` are both added after the opening
/// delimiter. Documents without frontmatter are returned untouched with
/// `changed == false`.
///
/// Returns `(content, changed)`.
pub fn upsert_timestamp_fields(content: &str, now: &str) -> (String, bool) {
    let doc = Document::parse(content);
    let Some(block) = doc.block else {
        return (content.to_string(), false);
    };

    let line_count = doc.lines.len();
    let fields = block.fields(line_count);
    let cr = carriage_return(doc.lines[block.open]);
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(line_count + 2);
    out.extend(doc.lines[..fields.start].iter().map(|l| Cow::Borrowed(*l)));

    let mut date_at = None;
    for line in &doc.lines[fields.clone()] {
        if field_value(line, FIELD_UPDATE).is_some() {
            continue;
        }
        if field_value(line, FIELD_DATE).is_some() {
            date_at = Some(out.len());
        }
        out.push(Cow::Borrowed(*line));
    }

    if let Some(at) = date_at {
        let indent = leading_whitespace(&out[at]).to_string();
        out.insert(
            at + 1,
            Cow::Owned(format!("{indent}{FIELD_UPDATE}: {now}{cr}")),
        );
    } else {
        out.insert(fields.start, Cow::Owned(format!("{FIELD_DATE}: {now}{cr}")));
        out.insert(
            fields.start + 1,
            Cow::Owned(format!("{FIELD_UPDATE}: {now}{cr}")),
        );
    }

    // A frontmatter block always receives a fresh stamp, so every rerun
    // with a new `now` rewrites the file.
    out.extend(doc.lines[fields.end..].iter().map(|l| Cow::Borrowed(*l)));
    (out.join("\n"), true)
}
