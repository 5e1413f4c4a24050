//! Atlas CLI: the `atlas` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use support::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let session = Session::from_args(cli.progress, cli.config, cli.seed);
    tracing::debug!(progress = %session.progress_path.display(), seed = ?session.seed, "session ready");

    match cli.command {
        Commands::Status { json } => commands::status::run(&session, json),

        Commands::Gate { phrase, json } => commands::gate::run(&session, phrase, json),

        Commands::Sigil { guess, json } => commands::sigil::run(&session, guess, json),

        Commands::Tiles { ops, json } => commands::tiles::run(&session, ops, json),

        Commands::Order {
            moves,
            submit,
            json,
        } => commands::order::run(&session, moves, submit, json),

        Commands::Value { words, json } => commands::value::run(words, json),

        Commands::Reset { json } => commands::reset::run(&session, json),
    }
}
