//! CLI command definitions and handlers

pub mod config;
pub mod date_filter;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// jot - a minimalist note-taking CLI
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Base directory holding notes/ and templates/ (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v for debug logging)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Capture a quick, timestamped note from arguments or stdin
    Quick(QuickArgs),

    /// Create a new note in your editor
    New(NewArgs),

    /// Open or create today's journal note
    Today(TodayArgs),

    /// List existing notes
    List(ListArgs),

    /// Show notes in reverse chronological order
    Timeline(TimelineArgs),

    /// View a note by ID prefix or from stdin
    View(ViewArgs),

    /// Edit a note by ID prefix or from stdin
    Edit(EditArgs),

    /// Summarize note files whose paths are read from stdin
    Pipe(PipeArgs),

    /// Manage the active context
    #[command(subcommand)]
    Context(ContextCommand),

    /// Manage note templates
    #[command(subcommand)]
    Templates(TemplatesCommand),

    /// Print the path to the notes directory
    NotesPath,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Tag, link and context flags shared by the capture commands
#[derive(Args, Debug, Default, Clone)]
pub struct MetadataArgs {
    /// Tag for the note (repeat or comma-separate)
    #[arg(short, long = "tag", action = ArgAction::Append, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Link to another note or resource (repeat or comma-separate)
    #[arg(short, long = "link", action = ArgAction::Append, value_delimiter = ',')]
    pub links: Vec<String>,

    /// Context for the note
    #[arg(short, long)]
    pub context: Option<String>,
}

/// Tag, context and output flags shared by the listing commands
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only notes carrying this tag (repeat or comma-separate; all must match)
    #[arg(short, long = "tag", action = ArgAction::Append, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Only notes in this context
    #[arg(short, long)]
    pub context: Option<String>,

    /// Output notes as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `quick` command
#[derive(Parser, Debug, Default)]
pub struct QuickArgs {
    /// Note text; read from stdin when omitted
    pub message: Vec<String>,

    #[command(flatten)]
    pub meta: MetadataArgs,
}

/// Arguments for the `new` command
#[derive(Parser, Debug, Default)]
pub struct NewArgs {
    /// Title, inserted as a heading
    pub title: Option<String>,

    #[command(flatten)]
    pub meta: MetadataArgs,

    /// Template to append to the draft
    #[arg(long)]
    pub template: Option<String>,
}

/// Arguments for the `today` command
#[derive(Parser, Debug, Default)]
pub struct TodayArgs {
    /// Context for a new journal note (default: journal)
    #[arg(short, long)]
    pub context: Option<String>,

    /// Template to append to a new journal note
    #[arg(long)]
    pub template: Option<String>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `timeline` command
#[derive(Parser, Debug, Default)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Only notes created at or after (YYYY-MM-DD or relative like "7d", "12h", "2w")
    #[arg(long)]
    pub since: Option<String>,

    /// Only notes created at or before (YYYY-MM-DD or relative)
    #[arg(long)]
    pub before: Option<String>,

    /// Show at most this many notes
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the `view` command
#[derive(Parser, Debug, Default)]
pub struct ViewArgs {
    /// Note ID or unique prefix; read from stdin when omitted
    pub id: Option<String>,

    /// Print the note file as stored
    #[arg(long, conflicts_with = "pretty")]
    pub raw: bool,

    /// Render with terminal styling
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug, Default)]
pub struct EditArgs {
    /// Note ID or unique prefix; read from stdin when omitted
    pub id: Option<String>,
}

/// Arguments for the `pipe` command
#[derive(Parser, Debug, Default)]
pub struct PipeArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Subcommand, Debug)]
pub enum ContextCommand {
    /// Set the active context
    Set {
        /// Context name
        name: String,
    },

    /// Show the active context
    Get,

    /// Clear the active context
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// List available templates
    List,

    /// Create a new template and open it in your editor
    New {
        /// Template name
        name: String,
    },

    /// Edit an existing template in your editor
    Edit {
        /// Template name
        name: String,
    },
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
