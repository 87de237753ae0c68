//! Injectable source of secure randomness.
//!
//! The protocol never touches a global RNG directly; everything that needs
//! entropy takes an [`EntropySource`], so tests can script the draws without
//! touching protocol logic.

use rand::{rngs::OsRng, Rng, RngCore};

/// Capability for drawing cryptographically secure randomness.
pub trait EntropySource {
    /// Fill `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);

    /// Draw a uniform integer in `[0, modulus)`.
    ///
    /// `modulus` must be positive; the draw must be unbiased.
    fn uniform(&mut self, modulus: u32) -> u32;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        (**self).fill_bytes(buf);
    }

    fn uniform(&mut self, modulus: u32) -> u32 {
        (**self).uniform(modulus)
    }
}

/// Production entropy source backed by the operating system RNG.
///
/// A failing OS randomness source is a fatal environment error and panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }

    fn uniform(&mut self, modulus: u32) -> u32 {
        assert!(modulus > 0, "modulus must be positive");
        // gen_range rejects and retries internally, so the draw is unbiased
        // even when modulus does not divide the sample space.
        OsRng.gen_range(0..modulus)
    }
}
