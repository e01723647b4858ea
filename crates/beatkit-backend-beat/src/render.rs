//! Render driver: request in, WAV and MIDI files out.

use std::path::{Path, PathBuf};

use beatkit_spec::timing::total_bars;
use beatkit_spec::{content_hash, render_id, NoteEvent, RenderConfig, RenderRequest};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::bank::SampleBank;
use crate::error::{BeatError, BeatResult};
use crate::midi::{write_midi_file, MidiWriter};
use crate::mixdown::wav::write_wav_file;
use crate::mixdown::{encode_wav, mix_notes, output_frames, peak_normalize};
use crate::pattern::build_sequence;

/// Result of rendering a beat to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    /// Render identifier, also the file stem of both outputs.
    pub id: String,
    /// Path of the WAV file.
    pub wav_path: PathBuf,
    /// Path of the MIDI file.
    pub midi_path: PathBuf,
    /// BLAKE3 hash of the WAV bytes.
    pub hash: String,
    /// Stereo frames in the WAV.
    pub frames: usize,
    /// Output sample rate.
    pub sample_rate: u32,
    /// Bars sequenced.
    pub bars: u32,
    /// Notes sequenced.
    pub notes: usize,
    /// Notes that had a sample and were mixed.
    pub samples_mixed: usize,
    /// Gain applied by peak normalization (1.0 if the mix did not clip).
    pub peak_gain: f32,
}

/// An encoded mix and what went into it.
#[derive(Debug, Clone)]
struct Mixdown {
    wav: Vec<u8>,
    frames: usize,
    hits: usize,
    peak_gain: f32,
}

fn check_inputs(request: &RenderRequest, config: &RenderConfig) -> BeatResult<()> {
    request.validate()?;
    config.validate()?;
    Ok(())
}

fn mixdown(
    bank: &SampleBank,
    notes: &[NoteEvent],
    request: &RenderRequest,
    config: &RenderConfig,
) -> BeatResult<Mixdown> {
    if !bank.is_loaded() {
        return Err(BeatError::BankNotLoaded);
    }

    let buffer = mix_notes(
        bank,
        notes,
        request.bpm,
        config.sample_rate,
        request.duration_seconds,
    );
    let hits = buffer.hits();
    let frames = output_frames(
        config.sample_rate,
        request.duration_seconds,
        buffer.frames(),
    );
    let mut samples = buffer.trimmed(frames).into_samples();
    let peak_gain = peak_normalize(&mut samples, config.normalize_ceiling);
    if peak_gain < 1.0 {
        debug!(gain = peak_gain, "mix clipped, scaled down");
    }

    Ok(Mixdown {
        wav: encode_wav(&samples, config.sample_rate),
        frames,
        hits,
        peak_gain,
    })
}

/// Render a request to WAV bytes in memory.
pub fn render_wav_bytes(
    bank: &SampleBank,
    request: &RenderRequest,
    config: &RenderConfig,
) -> BeatResult<Vec<u8>> {
    check_inputs(request, config)?;
    let notes = build_sequence(request.genre, request.bpm, request.duration_seconds);
    Ok(mixdown(bank, &notes, request, config)?.wav)
}

/// Render a request to MIDI bytes in memory. Needs no samples.
pub fn render_midi_bytes(request: &RenderRequest, config: &RenderConfig) -> BeatResult<Vec<u8>> {
    check_inputs(request, config)?;
    let notes = build_sequence(request.genre, request.bpm, request.duration_seconds);
    Ok(MidiWriter::new(request.bpm, config.track_name.as_str()).encode(&notes)?)
}

/// Render a request and write `<id>.wav` and `<id>.mid` into `out_dir`.
///
/// Nothing is written if the request is invalid or the bank is empty.
#[instrument(skip_all, fields(genre = %request.genre, bpm = request.bpm, duration = request.duration_seconds))]
pub fn render_beat(
    bank: &SampleBank,
    request: &RenderRequest,
    config: &RenderConfig,
    out_dir: &Path,
) -> BeatResult<RenderOutput> {
    check_inputs(request, config)?;

    let notes = build_sequence(request.genre, request.bpm, request.duration_seconds);
    let mix = mixdown(bank, &notes, request, config)?;
    let midi = MidiWriter::new(request.bpm, config.track_name.as_str()).encode(&notes)?;

    let id = render_id(&config.id_prefix, &mix.wav);
    let hash = content_hash(&mix.wav);

    std::fs::create_dir_all(out_dir).map_err(|e| BeatError::io(out_dir, e))?;
    let wav_path = out_dir.join(format!("{id}.wav"));
    let midi_path = out_dir.join(format!("{id}.mid"));
    write_wav_file(&wav_path, &mix.wav)?;
    write_midi_file(&midi_path, &midi)?;

    let output = RenderOutput {
        id,
        wav_path,
        midi_path,
        hash,
        frames: mix.frames,
        sample_rate: config.sample_rate,
        bars: total_bars(request.bpm, request.duration_seconds),
        notes: notes.len(),
        samples_mixed: mix.hits,
        peak_gain: mix.peak_gain,
    };

    info!(
        id = %output.id,
        frames = output.frames,
        notes = output.notes,
        mixed = output.samples_mixed,
        "rendered beat"
    );
    Ok(output)
}
