//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{AssetLocation, AssetType, Category};

/// OpenAssets - Agentforce asset library
///
/// Scan, package, search and serve a library of Agentforce actions, topics and agents.
#[derive(Parser, Debug)]
#[command(
    name = "openassets",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Asset library builder for Agentforce actions, topics and agents",
    long_about = "OpenAssets scans an asset library laid out as \
                  <industries|products>/<name>/<actions|topics|agents>/*.json, writes a \
                  JSON snapshot of it, packages every asset with its source files into a \
                  deployable zip archive and serves or searches the result.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  openassets generate\n    \
                  openassets search visit\n    \
                  openassets show industries healthcare actions schedule_visit\n    \
                  openassets download industries healthcare actions schedule_visit\n    \
                  openassets serve --addr 127.0.0.1:8080"
)]
pub struct Cli {
    /// Library root holding industries/ and products/ (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "OPENASSETS_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the snapshot and build every asset archive
    Generate(GenerateArgs),

    /// Write data.json and staticPaths.json only
    Snapshot(SnapshotArgs),

    /// Build asset archives only
    Bundle(GenerateArgs),

    /// List categories with asset counts
    List,

    /// Search assets by title, description or source file
    Search(SearchArgs),

    /// Show asset details and its deploy command
    Show(ShowArgs),

    /// Download the pre-built archive of an asset
    Download(DownloadArgs),

    /// Serve the library over HTTP
    Serve(ServeArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Four path segments naming one asset
#[derive(clap::Args, Debug, Clone)]
pub struct AssetArgs {
    /// Category type (industries, products)
    pub category: Category,

    /// Category name (e.g. healthcare)
    pub category_name: String,

    /// Asset type (actions, topics, agents)
    pub asset_type: AssetType,

    /// File name without the .json extension
    pub file_name: String,
}

impl AssetArgs {
    pub fn location(&self) -> AssetLocation {
        AssetLocation::new(
            self.category,
            self.category_name.clone(),
            self.asset_type,
            self.file_name.clone(),
        )
    }
}

/// Arguments for the generate and bundle commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate into the configured output directory:\n    openassets generate\n\n\
                  Generate into another directory:\n    openassets generate --out site/generated\n\n\
                  Keep the library layout inside archives:\n    openassets bundle --no-rewrite")]
pub struct GenerateArgs {
    /// Snapshot directory (archives go to <OUT>/assets)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Keep `<category>/<name>/main/...` paths instead of `force-app/main/...`
    #[arg(long)]
    pub no_rewrite: bool,
}

/// Arguments for the snapshot command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the snapshot:\n    openassets snapshot\n\n\
                  Write it elsewhere:\n    openassets snapshot --out /tmp/generated")]
pub struct SnapshotArgs {
    /// Snapshot directory
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search by title:\n    openassets search \"schedule visit\"\n\n\
                  Machine-readable output:\n    openassets search visit --json")]
pub struct SearchArgs {
    /// Case-insensitive search term
    pub term: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an action:\n    openassets show industries healthcare actions schedule_visit")]
pub struct ShowArgs {
    #[command(flatten)]
    pub asset: AssetArgs,
}

/// Arguments for the download command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Download from the local snapshot:\n    openassets download industries healthcare actions schedule_visit\n\n\
                  Download from a deployed site:\n    openassets download products commerce agents greeter --from https://assets.example.com\n\n\
                  Choose the saved name and directory:\n    openassets download products commerce agents greeter --name \"Store Greeter\" --dest ~/Downloads")]
pub struct DownloadArgs {
    #[command(flatten)]
    pub asset: AssetArgs,

    /// Site URL or generated directory to download from
    #[arg(long, value_name = "URL|DIR")]
    pub from: Option<String>,

    /// Display name used for the saved file (defaults to the asset title)
    #[arg(long, value_name = "DISPLAY")]
    pub name: Option<String>,

    /// Directory to save the archive in (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Serve the generated snapshot:\n    openassets serve\n\n\
                  Rescan the library on every request:\n    openassets serve --live --addr 0.0.0.0:8080")]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, value_name = "HOST:PORT")]
    pub addr: Option<String>,

    /// Rescan the library for every /api/data request instead of reading the snapshot
    #[arg(long)]
    pub live: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    openassets completions bash > ~/.bash_completion.d/openassets\n\n\
                  Generate zsh completions:\n    openassets completions zsh > ~/.zfunc/_openassets\n\n\
                  Generate fish completions:\n    openassets completions fish > ~/.config/fish/completions/openassets.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
