mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "creasepack")]
#[command(about = "Creasepack - Crease metadata codec for vertex-color alpha channels", long_about = None)]
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
    /// Encode crease parameters into an alpha value
    Encode {
        /// Level-of-detail the crease appears at (0-2)
        #[arg(long)]
        lod: u8,

        /// Crease rendering mode (0-2)
        #[arg(long, default_value = "0")]
        mode: u8,

        /// Set the bump flag
        #[arg(long)]
        bump: bool,

        /// Crease thickness (0-31)
        #[arg(long, default_value = "0")]
        thickness: u8,

        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Decode an alpha value back into crease parameters
    Decode {
        /// The channel value to decode
        alpha: f32,

        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Sweep an alpha channel dump and report the creases it carries
    Scan {
        /// Input JSON file (array of channel values), or - for stdin
        #[arg(short, long)]
        input: String,

        /// Output JSON file for located creases
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,

        /// Keep only creases at or above this LOD
        #[arg(long)]
        lod_min: Option<u8>,

        /// Keep only creases at or below this LOD
        #[arg(long)]
        lod_max: Option<u8>,
    },

    /// Migrate a v1-authored channel dump to the current format
    Migrate {
        /// Input JSON file (array of channel values)
        #[arg(short, long)]
        input: String,

        /// Output JSON file for the migrated channel
        #[arg(short, long)]
        output: String,
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
        Commands::Encode {
            lod,
            mode,
            bump,
            thickness,
            json,
        } => commands::encode::execute(lod, mode, bump, thickness, json),

        Commands::Decode { alpha, json } => commands::decode::execute(alpha, json),

        Commands::Scan {
            input,
            output,
            stats_only,
            lod_min,
            lod_max,
        } => commands::scan::execute(&input, output.as_deref(), stats_only, lod_min, lod_max),

        Commands::Migrate { input, output } => commands::migrate::execute(&input, &output),
    }
}
