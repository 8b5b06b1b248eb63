use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod profile_args;

use commands::{ConfigCommand, MacrosCommand, MealsCommand, RecipeCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "mfit")]
#[command(version)]
#[command(about = "Daily nutrition targets and meal planning", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the daily calorie target and macro split
    Macros(MacrosCommand),

    /// Compute the full meal plan with illustrative recipes
    Meals(MealsCommand),

    /// Work with looked-up ingredient records
    Recipe(RecipeCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "macrofit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;

    match &cli.command {
        Some(Commands::Macros(cmd)) => cmd.run(&config)?,
        Some(Commands::Meals(cmd)) => cmd.run(&config)?,
        Some(Commands::Recipe(cmd)) => cmd.run(&config)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => println!("Use --help to see available commands"),
    }

    Ok(())
}
