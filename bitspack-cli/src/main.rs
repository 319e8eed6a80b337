mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bitspack")]
#[command(about = "Bitspack - BITS transmission decoder and expression evaluator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a transmission and print its two answers
    Solve {
        /// Input file with the hex transmission ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a transmission and dump its packet tree
    Inspect {
        /// Input file with the hex transmission ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output JSON file for the report
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Solve { input, json } => commands::solve::execute(&input, json),

        Commands::Inspect {
            input,
            json,
            output,
        } => commands::inspect::execute(&input, json, output.as_deref()),
    }
}
