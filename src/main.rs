//! OpenAssets - Agentforce asset library
//!
//! A command line tool that turns a directory of Agentforce action, topic and
//! agent descriptions into a JSON catalog snapshot and deployable zip archives,
//! and searches, downloads or serves the result.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod bundle;
mod cli;
mod commands;
mod config;
mod deploy;
mod domain;
mod download;
mod error;
mod fetch;
mod progress;
mod scanner;
mod search;
mod server;
mod snapshot;

use cli::{Cli, Commands};

/// Log to stderr at `warn` (`info` for this crate with `--verbose`), `RUST_LOG` wins
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,openassets=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.root, args),
        Commands::Snapshot(args) => commands::generate::run_snapshot(cli.root, args),
        Commands::Bundle(args) => commands::generate::run_bundle(cli.root, args),
        Commands::List => commands::list::run(cli.root),
        Commands::Search(args) => commands::search::run(cli.root, args),
        Commands::Show(args) => commands::show::run(cli.root, args),
        Commands::Download(args) => commands::download::run(cli.root, args),
        Commands::Serve(args) => commands::serve::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
