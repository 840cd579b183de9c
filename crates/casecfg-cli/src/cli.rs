use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "casecfg",
    about = "casecfg: validate, migrate, and derive parameters from case settings",
    version
)]
pub struct Cli {
    /// Engine configuration file (default: ./casecfg.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `casecfg_inspect=debug`
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report settings that need migration; exits 1 when any query is active
    Validate {
        /// Settings file
        settings: PathBuf,

        /// Rule family to run (repeatable; default from config)
        #[arg(long = "family")]
        families: Vec<String>,

        /// Directory relative input paths resolve against (default: the
        /// settings file's directory)
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply every correction and write the migrated settings
    Migrate {
        /// Settings file
        settings: PathBuf,

        /// Output path (default: rewrite the input in place)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Rule family to run (repeatable; default from config)
        #[arg(long = "family")]
        families: Vec<String>,

        /// Directory relative input paths resolve against
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the core-loading hooks on an empty core and print its kinetics
    /// parameters
    Kinetics {
        /// Settings file
        settings: PathBuf,

        /// Treat the load as a restore from persisted state
        #[arg(long)]
        db_load: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print normalized settings text
    Settings {
        /// Settings file
        settings: PathBuf,

        /// Include settings still at their defaults
        #[arg(long)]
        full: bool,
    },

    /// List registered rule families
    Families {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
