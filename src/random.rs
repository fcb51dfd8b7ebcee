//! Seeded random number generation.
//!
//! Every draw in the planner goes through a generator created here, so a
//! fixed seed always reproduces the same output.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives a child seed from a base seed and a sequence of discriminators.
///
/// Uses the SplitMix64 finalizer so that nearby inputs (consecutive day
/// numbers, adjacent slots) map to unrelated seeds. Draws keyed this way do
/// not depend on evaluation order, which keeps parallel synthesis stable.
pub fn derive_seed(base: u64, parts: &[u64]) -> u64 {
    parts.iter().fold(splitmix(base), |acc, &p| splitmix(acc ^ p))
}

fn splitmix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Hashes a string into a seed discriminator (FNV-1a).
pub fn str_key(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
        }
    }

    #[test]
    fn test_derive_seed_is_stable() {
        assert_eq!(derive_seed(7, &[1, 2, 3]), derive_seed(7, &[1, 2, 3]));
        assert_ne!(derive_seed(7, &[1, 2, 3]), derive_seed(7, &[1, 2, 4]));
        assert_ne!(derive_seed(7, &[1]), derive_seed(8, &[1]));
    }

    #[test]
    fn test_str_key_distinguishes() {
        assert_ne!(str_key("jaipur"), str_key("udaipur"));
        assert_eq!(str_key(""), 0xcbf2_9ce4_8422_2325);
    }
}
