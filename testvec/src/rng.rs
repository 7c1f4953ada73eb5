use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Fixed seed for reproducible test vectors.
pub const DEFAULT_SEED: u64 = 0xDEAD_BEEF;

/// Deterministic seeded RNG; two instances yield identical streams.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(DEFAULT_SEED)
}

/// Uniform draw from `[0, 2^width)` by masking a full-width draw, exact for
/// power-of-two ranges. Widths of 64 and above cover the whole `u64` range.
pub fn random_element(rng: &mut impl Rng, width: u32) -> u64 {
    let raw: u64 = rng.gen();
    if width >= 64 {
        raw
    } else {
        raw & ((1u64 << width) - 1)
    }
}

pub fn random_vector(rng: &mut impl Rng, length: usize, width: u32) -> Vec<u64> {
    (0..length)
        .map(|_| random_element(rng, width))
        .collect_vec()
}

#[test]
pub fn test_seeded_rng_is_deterministic() {
    let a = random_vector(&mut seeded_rng(), 32, 64);
    let b = random_vector(&mut seeded_rng(), 32, 64);
    assert_eq!(a, b);
}

#[test]
pub fn test_random_element_within_width() {
    let mut rng = seeded_rng();
    for _ in 0..256 {
        assert!(random_element(&mut rng, 4) < 1 << 4);
        assert!(random_element(&mut rng, 12) < 1 << 12);
    }
}
