//! jot - plain-text notes with structured metadata, captured from the terminal

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_context, handle_edit, handle_list, handle_new, handle_pipe, handle_quick,
        handle_templates, handle_timeline, handle_today, handle_view,
    },
};
use infra::NoteStore;

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose > 0);

    let config = Config::load()?;
    let store = NoteStore::new(config.base_dir(cli.dir.as_deref()));
    tracing::debug!("using base directory {}", store.base_dir().display());

    match &cli.command {
        Command::Quick(args) => handle_quick(args, &store, &config),
        Command::New(args) => handle_new(args, &store, &config),
        Command::Today(args) => handle_today(args, &store, &config),
        Command::List(args) => handle_list(args, &store),
        Command::Timeline(args) => handle_timeline(args, &store),
        Command::View(args) => handle_view(args, &store),
        Command::Edit(args) => handle_edit(args, &store, &config),
        Command::Pipe(args) => handle_pipe(args),
        Command::Context(cmd) => handle_context(cmd, &store),
        Command::Templates(cmd) => handle_templates(cmd, &store, &config),
        Command::NotesPath => {
            println!("{}", store.notes_dir().display());
            Ok(())
        }
        Command::Completions(args) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "jot", &mut std::io::stdout());
            Ok(())
        }
    }
}
