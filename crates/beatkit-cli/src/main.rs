//! Beatkit CLI - Command-line interface for offline percussion rendering
//!
//! This binary renders genre grooves to WAV and MIDI, exports MIDI on its own,
//! and reports on the genre list and the sample library.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use beatkit_cli::commands;
use beatkit_cli::commands::render::RenderArgs;
use beatkit_cli::logging;

/// Beatkit - Offline Afro Percussion Engine
#[derive(Parser)]
#[command(name = "beatkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); BEATKIT_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a groove to WAV and MIDI
    Render {
        /// Genre name (see `beatkit genres`)
        #[arg(short, long)]
        genre: String,

        /// Tempo in beats per minute (default: the genre preset)
        #[arg(short, long)]
        bpm: Option<u32>,

        /// Length in seconds
        #[arg(short, long)]
        duration: f64,

        /// Root directory holding sample_library/ (default: the output directory)
        #[arg(short, long)]
        library: Option<String>,

        /// Output directory (default: ./output)
        #[arg(short, long, default_value = "output")]
        out_dir: String,

        /// Engine config file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the drum sequence as a MIDI file (no samples needed)
    Midi {
        /// Genre name (see `beatkit genres`)
        #[arg(short, long)]
        genre: String,

        /// Tempo in beats per minute (default: the genre preset)
        #[arg(short, long)]
        bpm: Option<u32>,

        /// Length in seconds
        #[arg(short, long)]
        duration: f64,

        /// MIDI file to write
        #[arg(short, long)]
        output: String,

        /// Engine config file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List genres, their preset tempos, and which have a dedicated groove
    Genres {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show which kit voices have a sample in the library
    Kit {
        /// Root directory holding sample_library/
        #[arg(short, long, default_value = "output")]
        library: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            genre,
            bpm,
            duration,
            library,
            out_dir,
            config,
            json,
        } => {
            let args = RenderArgs {
                genre: &genre,
                bpm,
                duration,
                library: library.as_deref().unwrap_or(&out_dir),
                out_dir: &out_dir,
                config: config.as_deref(),
            };
            commands::render::run(&args, json)
        }
        Commands::Midi {
            genre,
            bpm,
            duration,
            output,
            config,
            json,
        } => commands::midi::run(&genre, bpm, duration, &output, config.as_deref(), json),
        Commands::Genres { json } => commands::genres::run(json),
        Commands::Kit { library, json } => commands::kit::run(&library, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
