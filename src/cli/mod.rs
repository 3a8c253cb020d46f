//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;
use output::OutputFormat;

/// mintmemo - local-first Markdown notes with tags and full-text search
#[derive(Parser, Debug)]
#[command(name = "mintmemo", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides MINTMEMO_DB_PATH and the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Change a note's title, content, or tags
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Pin or unpin a note
    Pin(PinArgs),

    /// Show a note
    Show(ShowArgs),

    /// List notes, pinned first, optionally filtered by tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Full-text search across titles and content
    Search(SearchArgs),

    /// List all tags with note counts
    Tags(TagsArgs),

    /// Export every note as JSON
    Export(ExportArgs),

    /// Rebuild the full-text search index
    Reindex,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title (blank becomes "Untitled")
    pub title: String,

    /// Markdown content
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read Markdown content from a file ("-" for stdin)
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,

    /// Tags, comma separated (can be specified multiple times)
    #[arg(short, long = "tags", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: NoteId,

    /// New title
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    /// New Markdown content
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read new Markdown content from a file ("-" for stdin)
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,

    /// Replace the tag set, comma separated (can be specified multiple times)
    #[arg(short, long = "tags", action = ArgAction::Append, conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove all tags from the note
    #[arg(long)]
    pub clear_tags: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID
    pub id: NoteId,
}

/// Arguments for the `pin` command
#[derive(Parser, Debug)]
pub struct PinArgs {
    /// Note ID
    pub id: NoteId,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: NoteId,

    /// Print the content rendered as HTML
    #[arg(long, conflicts_with = "format")]
    pub html: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only notes with this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Maximum number of notes
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search terms; every term must match
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
