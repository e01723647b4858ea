//! Genres command implementation
//!
//! Lists every genre with its preset tempo and whether it has its own groove.

use anyhow::Result;
use beatkit_backend_beat::has_dedicated_pattern;
use beatkit_spec::Genre;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, GenreInfo};

/// Collect genre info in presentation order.
pub fn genre_infos() -> Vec<GenreInfo> {
    Genre::ALL
        .iter()
        .map(|genre| GenreInfo {
            name: genre.as_str().to_string(),
            label: genre.label(),
            default_bpm: genre.default_bpm(),
            dedicated_pattern: has_dedicated_pattern(*genre),
            triplet_feel: genre.is_triplet_feel(),
            description: genre.description().to_string(),
            instruments: genre
                .default_instruments()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        })
        .collect()
}

/// Run the genres command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = genre_infos();

    if json_output {
        CommandOutput::success(infos).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Genres".cyan().bold());
    println!("{}", "======".cyan());
    for info in &infos {
        let marker = if info.dedicated_pattern {
            "*".green()
        } else {
            " ".normal()
        };
        println!(
            "  {} {:<18} {:>3} bpm  {}",
            marker,
            info.name,
            info.default_bpm,
            info.label.dimmed()
        );
    }
    println!();
    println!("{}", "* dedicated groove; others use the generic backbeat".dimmed());
    Ok(ExitCode::SUCCESS)
}
