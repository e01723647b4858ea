//! Peak measurement and clip-prevention scaling.

/// Largest absolute sample value.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

/// Scale `samples` down to `ceiling` if their peak exceeds full scale.
///
/// Buffers that already fit in [-1, 1] are left untouched. Returns the gain
/// that was applied (1.0 when nothing changed).
pub fn peak_normalize(samples: &mut [f32], ceiling: f32) -> f32 {
    let peak = peak(samples);
    if peak <= 1.0 {
        return 1.0;
    }
    let gain = ceiling / peak;
    for s in samples.iter_mut() {
        *s *= gain;
    }
    gain
}
