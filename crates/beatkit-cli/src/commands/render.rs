//! Render command implementation
//!
//! Renders a groove to WAV and MIDI using the sample library on disk.

use anyhow::{anyhow, Context, Result};
use beatkit_backend_beat::bank::library_dir;
use beatkit_backend_beat::{render_beat, RenderOutput, SampleBank};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use super::json_output::{CommandOutput, JsonError};
use super::prepare;

/// Arguments of the render command.
#[derive(Debug, Clone)]
pub struct RenderArgs<'a> {
    /// Genre wire name
    pub genre: &'a str,
    /// Tempo; the genre preset when absent
    pub bpm: Option<u32>,
    /// Requested length in seconds
    pub duration: f64,
    /// Root holding `sample_library/`
    pub library: &'a str,
    /// Directory the WAV and MIDI land in
    pub out_dir: &'a str,
    /// Optional engine config file
    pub config: Option<&'a str>,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &RenderArgs<'_>, json_output: bool) -> Result<ExitCode> {
    debug!(library = args.library, out_dir = args.out_dir, "render paths");
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RenderArgs<'_>) -> Result<ExitCode> {
    let start = Instant::now();
    let prepared = prepare(args.genre, args.bpm, args.duration, args.config)
        .map_err(|e| anyhow!(e.message))?;
    let request = &prepared.request;

    println!(
        "{} {} at {} bpm for {}s",
        "Rendering:".cyan().bold(),
        request.genre.label(),
        request.bpm,
        request.duration_seconds
    );

    let bank = SampleBank::load(Path::new(args.library));
    println!(
        "{} {} samples from {}",
        "Kit:".dimmed(),
        bank.len(),
        library_dir(Path::new(args.library)).display()
    );

    let output = render_beat(&bank, request, &prepared.config, Path::new(args.out_dir))
        .with_context(|| format!("failed to render {}", request.genre))?;

    print_summary(&output);
    println!(
        "{} in {:.2}s",
        "Done".green().bold(),
        start.elapsed().as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_summary(output: &RenderOutput) {
    println!("{} {}", "ID:".dimmed(), output.id);
    println!(
        "{} {} bars, {} notes, {} hits mixed",
        "Sequence:".dimmed(),
        output.bars,
        output.notes,
        output.samples_mixed
    );
    if output.peak_gain < 1.0 {
        println!(
            "  {} mix clipped, scaled by {:.3}",
            "!!".yellow(),
            output.peak_gain
        );
    }
    println!("  {} {}", "->".green(), output.wav_path.display());
    println!("  {} {}", "->".green(), output.midi_path.display());
}

fn run_json(args: &RenderArgs<'_>) -> Result<ExitCode> {
    let prepared = match prepare(args.genre, args.bpm, args.duration, args.config) {
        Ok(prepared) => prepared,
        Err(error) => {
            CommandOutput::<RenderOutput>::failure(vec![error]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let bank = SampleBank::load(Path::new(args.library));
    match render_beat(
        &bank,
        &prepared.request,
        &prepared.config,
        Path::new(args.out_dir),
    ) {
        Ok(output) => {
            CommandOutput::success(output).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            CommandOutput::<RenderOutput>::failure(vec![JsonError::from_backend(&e)]).print()?;
            Ok(ExitCode::from(1))
        }
    }
}
