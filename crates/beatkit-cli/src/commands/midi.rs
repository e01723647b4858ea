//! MIDI command implementation
//!
//! Writes the drum sequence for a genre as a Standard MIDI File. No samples
//! are needed.

use anyhow::{anyhow, Context, Result};
use beatkit_backend_beat::write_drum_midi;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{CommandOutput, JsonError, MidiReport};
use super::prepare;

/// Run the midi command
///
/// # Arguments
/// * `genre` - Genre wire name
/// * `bpm` - Tempo, or the genre preset
/// * `duration` - Requested length in seconds
/// * `output` - File to write
/// * `config` - Optional engine config file (for the track name)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    genre: &str,
    bpm: Option<u32>,
    duration: f64,
    output: &str,
    config: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let prepared = match prepare(genre, bpm, duration, config) {
        Ok(prepared) => prepared,
        Err(error) if json_output => {
            CommandOutput::<MidiReport>::failure(vec![error]).print()?;
            return Ok(ExitCode::from(1));
        }
        Err(error) => return Err(anyhow!(error.message)),
    };
    let request = prepared.request;

    let written = write_drum_midi(
        Path::new(output),
        request.genre,
        request.bpm,
        request.duration_seconds,
        &prepared.config.track_name,
    );

    if json_output {
        return match written {
            Ok(notes) => {
                CommandOutput::success(MidiReport {
                    path: output.to_string(),
                    genre: request.genre.to_string(),
                    bpm: request.bpm,
                    notes,
                })
                .print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                CommandOutput::<MidiReport>::failure(vec![JsonError::from_backend(&e)]).print()?;
                Ok(ExitCode::from(1))
            }
        };
    }

    let notes = written.with_context(|| format!("failed to write MIDI to {}", output))?;
    println!(
        "{} {} at {} bpm, {} notes",
        "MIDI:".cyan().bold(),
        request.genre.label(),
        request.bpm,
        notes
    );
    println!("  {} {}", "->".green(), output);
    Ok(ExitCode::SUCCESS)
}
