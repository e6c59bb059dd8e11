mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heritage", about = "Browse heritage sites and replay virtual tours")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file, overriding the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sites, optionally filtered
    List(commands::list::ListArgs),
    /// Show everything known about one site
    Info(commands::info::InfoArgs),
    /// List festivals across all sites
    Festivals,
    /// List the districts present in the catalog
    Districts,
    /// List the traditions present in the catalog
    Traditions,
    /// Replay a scripted virtual tour of a site
    Tour(commands::tour::TourArgs),
    /// Ask the guide a question about a site
    Chat(commands::chat::ChatArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ctx = commands::Context {
        config_path: cli.config,
        catalog_override: cli.catalog,
    };

    match &cli.command {
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Info(args) => commands::info::run(&ctx, args),
        Commands::Festivals => commands::list::run_festivals(&ctx),
        Commands::Districts => commands::list::run_districts(&ctx),
        Commands::Traditions => commands::list::run_traditions(&ctx),
        Commands::Tour(args) => commands::tour::run(&ctx, args),
        Commands::Chat(args) => commands::chat::run(&ctx, args),
        Commands::Config(args) => commands::config::run(args),
    }
}
