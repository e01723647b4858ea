//! Determinism verification: run a render several times and compare bytes.

/// Outcome of repeated generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    pub is_deterministic: bool,
    pub runs: usize,
    /// Size of the first run's output
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output
    pub hash: String,
    /// First byte offset that differed, with the run it differed in
    pub first_difference: Option<(usize, usize)>,
}

impl DeterminismResult {
    /// Panic with details unless every run matched.
    pub fn assert_deterministic(&self) {
        if let Some((offset, run)) = self.first_difference {
            panic!(
                "output differs from run 0 in run {} at byte {} (size {}, hash {})",
                run, offset, self.output_size, self.hash
            );
        }
    }
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Call `generate_fn` `runs` times and compare every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();
        let offset = reference
            .iter()
            .zip(output.iter())
            .position(|(a, b)| a != b)
            .or_else(|| {
                (reference.len() != output.len()).then_some(reference.len().min(output.len()))
            });
        if let Some(offset) = offset {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                first_difference: Some((offset, run)),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        first_difference: None,
    }
}
