//! Test input generation
//!
//! Seeded so failures reproduce.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random buffer of `len` bytes
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

/// Random buffers of random length up to `max_len`
pub fn random_inputs(seed: u64, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            data
        })
        .collect()
}

/// Copies of `base` with a few bytes overwritten at random positions
pub fn mutations(seed: u64, base: &[u8], count: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut data = base.to_vec();
            if !data.is_empty() {
                for _ in 0..rng.gen_range(1..=8) {
                    let at = rng.gen_range(0..data.len());
                    data[at] = rng.r#gen();
                }
            }
            data
        })
        .collect()
}

/// Every proper prefix of `base`
pub fn truncations(base: &[u8]) -> impl Iterator<Item = &[u8]> {
    (0..base.len()).map(move |n| &base[..n])
}

/// Standard RGB8 test image: grayscale ramp plus primaries and secondaries
pub fn reference_pixels() -> Vec<u8> {
    let mut data = Vec::new();
    for v in (0..=255u8).step_by(15) {
        data.extend_from_slice(&[v, v, v]);
    }
    for c in [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
        [0, 255, 255],
        [255, 0, 255],
    ] {
        data.extend_from_slice(&c);
    }
    data
}
