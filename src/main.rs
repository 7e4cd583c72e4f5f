//! # postkit CLI
//!
//! Command-line interface for the postkit blog workflows.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use postkit::{
    commands::{self, NewArgs, PushArgs},
    constants::{DEFAULT_BRANCH, DEFAULT_REMOTE, WEBHOOK_URL_ENV},
    logging,
};

const GLOBAL_HELP: &str = "\
Configuration Files (in the project root):
  convert.toml       Tasks for the convert workflow (source_dir, target_dir, exclude)
  update-time.toml   Tasks for the timestamp workflow

Getting Started:
  postkit                        Refresh timestamps of changed documents
  postkit convert                Assign ids and move documents to <id>.md
  postkit commit                 Refresh timestamps and commit
  postkit push                   Refresh, convert, commit and push

Learn more:
  postkit <COMMAND> --help       Show detailed help for a command";

#[derive(Parser)]
#[command(name = "postkit")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Id stamping, timestamp refresh and publishing for Markdown blogs")]
#[command(
    long_about = "postkit manages the Markdown documents of a blog kept in git. It gives \
documents stable random ids, relocates them to <id>.md, refreshes their date/update \
frontmatter fields for files git reports as changed, and commits and pushes the result.

Without a command, postkit runs the timestamp refresh ('time')."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh date/update of new or modified documents
    #[command(
        long_about = "Refresh the date/update frontmatter fields of Markdown files that git \
reports as added, modified or untracked.\n\n\
Tasks come from update-time.toml. Without it, the whole project is one task that \
excludes README.md, temp-*.md and draft-*.md. Documents without frontmatter are skipped.",
        after_help = "Examples:\n  \
postkit time\n  \
postkit time --root ~/blog --debug"
    )]
    Time,

    /// Assign ids and move documents to <id>.md
    #[command(
        long_about = "Give every Markdown file in each task's source directory an id and \
write it to <target_dir>/<id>.md.\n\n\
Existing ids are kept. New ids are unique across all tasks of the run. \
Tasks come from convert.toml; keep_original = false removes the source files."
    )]
    Convert,

    /// Refresh timestamps, then commit everything
    #[command(
        long_about = "Run 'time', stage all changes and commit them with the message \
'文档更新：YYYY-MM-DD HH:mm:ss' (UTC+8)."
    )]
    Commit,

    /// Refresh timestamps, convert, commit and push
    Push {
        /// Remote to push to
        #[arg(long, default_value = DEFAULT_REMOTE)]
        remote: String,

        /// Branch to push
        #[arg(long, default_value = DEFAULT_BRANCH)]
        branch: String,
    },

    /// Create a new post from the language template
    #[command(
        after_help = "Languages: en, ja, zh (anything else falls back to zh)\n\n\
Examples:\n  \
postkit new en my-post \"My Post\" \"This is my post\" \"tag1,tag2\"\n  \
postkit new ja my-post \"私の投稿\" \"これは私の投稿です\" \"タグ1,タグ2\"\n  \
postkit new zh \"\" \"我的文章\"             Random file name"
    )]
    New {
        /// Language folder
        #[arg(default_value = "zh")]
        language: String,

        /// File name without extension (random if empty)
        file_name: Option<String>,

        /// Post title
        title: Option<String>,

        /// Post description
        description: Option<String>,

        /// Comma-separated tags
        tags: Option<String>,

        /// Open the new post in $VISUAL / $EDITOR
        #[arg(long)]
        open: bool,
    },

    /// Insert an id into every Markdown file below a directory, in place
    InsertIds {
        /// Directory to walk (relative to the project root)
        dir: PathBuf,
    },

    /// Pre-commit hook: refresh and re-stage staged Markdown files
    Hook,

    /// Trigger a site rebuild via the build webhook
    Publish {
        /// Webhook URL
        #[arg(long, env = WEBHOOK_URL_ENV)]
        url: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Time) {
        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
        Commands::Publish { url } => commands::publish(url.as_deref()),
        command => {
            let root = commands::project_root(cli.root.as_deref())?;
            tracing::debug!(root = %root.display(), "project root");
            run_in_project(command, &root)
        }
    }
}

fn run_in_project(command: Commands, root: &Path) -> Result<()> {
    match command {
        Commands::Time => commands::time(root).map(|_| ()),

        Commands::Convert => commands::convert(root).map(|_| ()),

        Commands::Commit => commands::commit(root),

        Commands::Push { remote, branch } => commands::push(root, &PushArgs { remote, branch }),

        Commands::New {
            language,
            file_name,
            title,
            description,
            tags,
            open,
        } => commands::new(
            root,
            &NewArgs {
                language: Some(language),
                file_name,
                title,
                description,
                tags,
                open,
            },
        )
        .map(|_| ()),

        Commands::InsertIds { dir } => commands::insert_ids(&root.join(dir)).map(|_| ()),

        Commands::Hook => commands::hook(root).map(|_| ()),

        Commands::Publish { .. } | Commands::Completions { .. } => Ok(()),
    }
}
