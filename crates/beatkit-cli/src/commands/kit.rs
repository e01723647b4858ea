//! Kit command implementation
//!
//! Reports which catalog voices have a sample in the library.

use anyhow::Result;
use beatkit_backend_beat::bank::{library_dir, Manifest};
use beatkit_spec::CATALOG;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{CommandOutput, KitReport, VoiceStatus};

/// Inspect the library under `root`.
pub fn kit_report(root: &Path) -> KitReport {
    let manifest = Manifest::load(root);
    let voices: Vec<VoiceStatus> = CATALOG
        .iter()
        .map(|voice| VoiceStatus {
            name: voice.name.to_string(),
            pitch: voice.pitch,
            available: manifest.sample_exists(root, voice.name),
            file: manifest.get(voice.name).map(str::to_string),
        })
        .collect();

    KitReport {
        library: library_dir(root).display().to_string(),
        available: voices.iter().filter(|v| v.available).count(),
        total: voices.len(),
        voices,
    }
}

/// Run the kit command
///
/// # Returns
/// Exit code: 0 when at least one voice is available, 1 otherwise
pub fn run(root: &str, json_output: bool) -> Result<ExitCode> {
    let report = kit_report(Path::new(root));
    let code = if report.available > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json_output {
        CommandOutput::success(report).print()?;
        return Ok(code);
    }

    println!("{} {}", "Library:".cyan().bold(), report.library);
    for voice in &report.voices {
        if voice.available {
            println!("  {} {:<18} {:>3}", "ok".green(), voice.name, voice.pitch);
        } else {
            println!("  {} {:<18} {:>3}", "!!".yellow(), voice.name, voice.pitch);
        }
    }
    println!();
    println!(
        "{} {}/{} voices available",
        if report.available == report.total {
            "COMPLETE".green().bold()
        } else {
            "PARTIAL".yellow().bold()
        },
        report.available,
        report.total
    );
    Ok(code)
}
