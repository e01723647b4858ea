//! Tests for peak normalization.

use super::*;

#[test]
fn test_quiet_buffer_untouched() {
    let mut samples = vec![0.5, -0.9, 1.0, -1.0];
    let original = samples.clone();
    assert_eq!(peak_normalize(&mut samples, 0.95), 1.0);
    assert_eq!(samples, original);
}

#[test]
fn test_clipping_buffer_scaled_to_ceiling() {
    let mut samples = vec![2.0, -4.0, 1.0];
    let gain = peak_normalize(&mut samples, 0.95);
    assert!((gain - 0.2375).abs() < 1e-6);
    assert!((samples[1] + 0.95).abs() < 1e-6);
    assert!((samples[0] - 0.475).abs() < 1e-6);
}

#[test]
fn test_empty_buffer() {
    let mut samples: Vec<f32> = Vec::new();
    assert_eq!(peak_normalize(&mut samples, 0.95), 1.0);
    assert_eq!(peak(&samples), 0.0);
}

#[test]
fn test_never_exceeds_ceiling() {
    // deterministic pseudo-random buffers with peaks up to ~8x full scale
    let mut state: u32 = 0x1234_5678;
    for _ in 0..50 {
        let mut samples: Vec<f32> = (0..256)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 8) as f32 / (1u32 << 24) as f32 * 16.0 - 8.0
            })
            .collect();
        let before = peak(&samples);
        let gain = peak_normalize(&mut samples, 0.95);
        let after = peak(&samples);
        if before > 1.0 {
            assert!(after <= 0.95 + 1e-5, "peak {after} after normalizing {before}");
            assert!(gain < 1.0);
        } else {
            assert_eq!(after, before);
        }
    }
}
