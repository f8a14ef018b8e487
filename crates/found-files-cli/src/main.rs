mod commands;
mod logging;
mod output;
mod record;

use anyhow::Context;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, LookupArgs, RecordArgs};
use dotenv::dotenv;
use found_files_core::config::load_configuration;
use found_files_core::{AppConfig, Database};
use std::process;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = match load_configuration(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            drop(guard);
            process::exit(1);
        }
    };
    if let Some(database) = args.database {
        config.database_path = database;
    }

    let command = match args.command {
        Some(command) => command,
        None => {
            let _ = Cli::command().print_long_help();
            return;
        }
    };

    // Storage failures are fatal for the process, but only decided here
    if let Err(err) = run(command, &config) {
        error!("Error: {:#}", err);
        drop(guard);
        process::exit(1);
    }
}

fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Init => {
            open_catalog(config)?;
            info!("Catalog ready at {}", config.database_path);
        }
        Commands::Record(args) => run_record(config, args)?,
        Commands::Show(args) => run_show(config, args)?,
        Commands::History(args) => run_history(config, args)?,
        Commands::Stats => {
            let db = open_catalog(config)?;
            println!(
                "{} entries across {} paths",
                format!("{}", db.count_found_files()?).green(),
                format!("{}", db.count_found_paths()?).cyan(),
            );
        }
        Commands::PrintConfig => {
            println!("Configuration: {:?}", config);
        }
    }
    Ok(())
}

fn open_catalog(config: &AppConfig) -> anyhow::Result<Database> {
    Database::open(&config.database_path)
        .with_context(|| format!("opening catalog {}", config.database_path))
}

fn run_record(config: &AppConfig, args: RecordArgs) -> anyhow::Result<()> {
    let db = open_catalog(config)?;
    let source = args.source.as_deref().unwrap_or(&config.source).to_string();
    let file = record::build_found_file(&db, &source, &args, Utc::now())?;

    db.save_found_file(&file)
        .with_context(|| format!("saving {}:{}", source, args.path))?;
    info!("Recorded {}:{} ({})", source, args.path, args.hash);
    Ok(())
}

fn run_show(config: &AppConfig, args: LookupArgs) -> anyhow::Result<()> {
    let db = open_catalog(config)?;
    let source = args.source.unwrap_or_else(|| config.source.clone());

    match db.get_found_file(&source, &args.path)? {
        Some(file) if args.json => println!("{}", serde_json::to_string_pretty(&file)?),
        Some(file) => output::print_found_file(&file),
        None if args.json => println!("null"),
        None => println!("{}:{} not found", source, args.path),
    }
    Ok(())
}

fn run_history(config: &AppConfig, args: LookupArgs) -> anyhow::Result<()> {
    let db = open_catalog(config)?;
    let source = args.source.unwrap_or_else(|| config.source.clone());
    let versions = db.get_found_file_versions(&source, &args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&versions)?);
        return Ok(());
    }
    if versions.is_empty() {
        println!("{}:{} not found", source, args.path);
        return Ok(());
    }
    for file in &versions {
        output::print_version_line(file);
    }
    Ok(())
}
