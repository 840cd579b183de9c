//! casecfg CLI: the `casecfg` command.

mod cli;
mod commands;
mod config;
mod logging;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use config::EngineConfig;

fn main() {
    let cli = Cli::parse();

    let config = EngineConfig::discover(cli.config.as_deref()).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });
    logging::init(cli.log.as_deref(), config.log.as_deref());

    match cli.command {
        Commands::Validate {
            settings,
            families,
            input_dir,
            json,
        } => commands::validate::run(
            commands::validate::Args {
                settings,
                families,
                input_dir,
                json,
            },
            &config,
        ),

        Commands::Migrate {
            settings,
            out,
            families,
            input_dir,
            json,
        } => commands::migrate::run(
            commands::migrate::Args {
                settings,
                out,
                families,
                input_dir,
                json,
            },
            &config,
        ),

        Commands::Kinetics {
            settings,
            db_load,
            json,
        } => commands::kinetics::run(settings, db_load, json, &config),

        Commands::Settings { settings, full } => commands::settings::run(settings, full),

        Commands::Families { json } => commands::families::run(json),
    }
}
