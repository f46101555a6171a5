mod actions;
mod cli;
mod error;
mod pages;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Dashboard(args) => pages::dashboard::render(args),
        Commands::Nutrition(args) => pages::nutrition::render(args),
        Commands::Workouts(args) => pages::workouts::render(args),
        Commands::Workout(args) => pages::workout::render(args),
        Commands::Exercise(args) => pages::exercise::render(args),
        Commands::Exercises(args) => pages::exercises::render(args),
        Commands::Profile(args) => pages::profile::render(args),
        Commands::LogBodyweight(args) => actions::log_bodyweight(args),
        Commands::Follow(args) => actions::follow(args),
        Commands::Unfollow(args) => actions::unfollow(args),
        Commands::JoinGroup(args) => actions::join_group(args),
    }
}
