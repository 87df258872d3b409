//! Changelog CLI
//!
//! Command-line driver for the changelog reconciler over a document kept as
//! JSON on disk.

use std::path::PathBuf;

use changelog_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand};

mod commands;
mod document;

#[derive(Debug, Parser)]
#[command(name = "changelog")]
#[command(about = "Changelog panels for design documents", long_about = None)]
struct Cli {
    /// Document file (created with one page if missing)
    #[arg(long, global = true, default_value = document::DEFAULT_DOCUMENT_PATH)]
    document: PathBuf,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List pages of the document
    Pages,
    /// Page operations
    Page(commands::page::PageArgs),
    /// Show whether a page has a changelog
    Check(commands::check::CheckArgs),
    /// Add an entry to the changelog of a page
    Submit(commands::submit::SubmitArgs),
    /// Print the changelog of a page as an outline
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let ctx = commands::Context {
        document: cli.document,
        config: cli.config,
    };
    let result = match cli.command {
        Commands::Pages => commands::pages::execute(&ctx),
        Commands::Page(args) => commands::page::execute(&ctx, args),
        Commands::Check(args) => commands::check::execute(&ctx, args),
        Commands::Submit(args) => commands::submit::execute(&ctx, args),
        Commands::Render(args) => commands::render::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
