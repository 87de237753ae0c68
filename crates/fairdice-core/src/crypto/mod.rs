//! Cryptographic primitives for the commit-reveal scheme.

mod commitment;
mod entropy;

pub use commitment::{Commitment, CommitmentTag, SecretKey};
pub use entropy::{EntropySource, OsEntropy};
