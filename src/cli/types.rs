use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "logsite")]
#[command(about = "Static site generator for log archives and disruption series", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory with the data file and templates (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Destination directory, relative to the source unless absolute (defaults to dist)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// Watch for changes and rebuild
        #[arg(short = 'w', long, default_value_t = false)]
        watch: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Remove the destination directory without building
    Clean {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,
    },
}

impl Commands {
    /// The command run when none is given
    pub fn default_build() -> Self {
        Commands::Build {
            config: None,
            watch: false,
            quiet: false,
            verbose: false,
        }
    }
}
