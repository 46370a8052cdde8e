use clap::{Parser, Subcommand};
use colored::Colorize;
use greetings_lib::{commands, VERSION};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greetings")]
#[command(about = "CLI tool for emitting repeated greetings to stdout or files")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single greeting
    Greet {
        /// Name to greet (falls back to GREETINGS_NAME or config)
        name: Option<String>,
        /// Write the greeting to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Emit the greeting several times
    Repeat {
        /// Name to greet (falls back to GREETINGS_NAME or config)
        name: Option<String>,
        /// How many times to greet (must be strictly positive)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        repetitions: i32,
        /// Capitalize the name (not implemented yet)
        #[arg(long)]
        capitalize: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Greet { name, output } => {
            if let Err(e) = commands::greet::run(name, output) {
                eprintln!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Commands::Repeat {
            name,
            repetitions,
            capitalize,
        } => {
            if let Err(e) = commands::repeat::run(name, repetitions, capitalize) {
                eprintln!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("👋 Greetings v{}", VERSION);
        }
    }
}
