use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256PlusPlus};

/// Builds the PRNG used for all randomness derivation in this crate.
///
/// Not cryptographically secure, which is fine here: the only requirement
/// is uniformity. We use an explicit Xoshiro256PlusPlus instead of rand's
/// SmallRng so that the same seed produces the same draw sequence on every
/// platform and rand patch release.
#[inline]
pub fn make_prng(seed: [u8; 32]) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::from_seed(seed)
}
