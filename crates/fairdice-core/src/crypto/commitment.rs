//! Commitment engine for the commit-reveal scheme.
//!
//! A commitment binds one party to a value drawn before the counterpart
//! contributes anything: only the tag is disclosed at commit time, and the
//! key is revealed afterwards so the counterpart can recompute the tag.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

use super::entropy::EntropySource;

type HmacSha256 = Hmac<Sha256>;

/// Secret key for one commitment. Fresh per commitment, never reused.
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Draw a new random key.
    pub fn generate<E: EntropySource>(entropy: &mut E) -> Self {
        let mut bytes = [0u8; 32];
        entropy.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Tag = HMAC-SHA-256(key, value as big-endian bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitmentTag([u8; 32]);

impl CommitmentTag {
    /// Compute the tag for a committed value under a secret key.
    pub fn new(key: &SecretKey, value: u32) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
        mac.update(&value.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        Self(digest.into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and value produce this tag.
    pub fn verify(&self, key: &SecretKey, value: u32) -> bool {
        *self == Self::new(key, value)
    }
}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A staged random draw: a hidden value, the key it is bound under, and the
/// tag that gets published.
///
/// Single-use: `reveal` consumes the commitment, and every `draw` uses a
/// fresh key.
#[derive(Debug)]
pub struct Commitment {
    key: SecretKey,
    value: u32,
    tag: CommitmentTag,
}

impl Commitment {
    /// Draw a uniform value in `[0, modulus)` and commit to it.
    ///
    /// `modulus` must be positive.
    pub fn draw<E: EntropySource>(entropy: &mut E, modulus: u32) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        let key = SecretKey::generate(entropy);
        let value = entropy.uniform(modulus);
        let tag = CommitmentTag::new(&key, value);
        Self { key, value, tag }
    }

    /// The tag, safe to publish before the reveal.
    pub fn tag(&self) -> CommitmentTag {
        self.tag
    }

    /// Disclose the key and the committed value. Consumes the commitment so
    /// a key is never reused after it has been revealed.
    pub fn reveal(self) -> (SecretKey, u32) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::OsEntropy;

    #[test]
    fn test_tag_is_deterministic() {
        let key = SecretKey::from_bytes([7u8; 32]);
        assert_eq!(CommitmentTag::new(&key, 42), CommitmentTag::new(&key, 42));
    }

    #[test]
    fn test_tag_verification() {
        let key = SecretKey::generate(&mut OsEntropy);
        let tag = CommitmentTag::new(&key, 3);
        assert!(tag.verify(&key, 3));
    }

    #[test]
    fn test_wrong_value_fails_verification() {
        let key = SecretKey::generate(&mut OsEntropy);
        let tag = CommitmentTag::new(&key, 3);
        assert!(!tag.verify(&key, 4));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = SecretKey::generate(&mut OsEntropy);
        let key2 = SecretKey::generate(&mut OsEntropy);
        let tag = CommitmentTag::new(&key1, 3);
        assert!(!tag.verify(&key2, 3));
    }

    #[test]
    fn test_key_bit_flip_changes_tag() {
        let base = [0x5au8; 32];
        let tag = CommitmentTag::new(&SecretKey::from_bytes(base), 5);
        // Sampled mutation: flip one bit in a handful of byte positions.
        for position in [0, 7, 13, 21, 31] {
            let mut mutated = base;
            mutated[position] ^= 1;
            assert_ne!(tag, CommitmentTag::new(&SecretKey::from_bytes(mutated), 5));
        }
    }

    #[test]
    fn test_value_bit_flip_changes_tag() {
        let key = SecretKey::from_bytes([0x5au8; 32]);
        let tag = CommitmentTag::new(&key, 5);
        for bit in [0, 1, 8, 16, 31] {
            assert_ne!(tag, CommitmentTag::new(&key, 5 ^ (1 << bit)));
        }
    }

    #[test]
    fn test_commit_reveal_round_trip() {
        for _ in 0..50 {
            let commitment = Commitment::draw(&mut OsEntropy, 6);
            let tag = commitment.tag();
            let (key, value) = commitment.reveal();
            assert!(value < 6);
            assert_eq!(tag, CommitmentTag::new(&key, value));
        }
    }

    #[test]
    fn test_fresh_key_per_commitment() {
        let a = Commitment::draw(&mut OsEntropy, 2);
        let b = Commitment::draw(&mut OsEntropy, 2);
        let (key_a, _) = a.reveal();
        let (key_b, _) = b.reveal();
        assert_ne!(key_a.as_bytes(), key_b.as_bytes());
    }

    #[test]
    fn test_committed_values_roughly_uniform() {
        let mut counts = [0u32; 6];
        for _ in 0..6_000 {
            let (_, value) = Commitment::draw(&mut OsEntropy, 6).reveal();
            counts[value as usize] += 1;
        }
        for count in counts {
            assert!((600..1400).contains(&count), "skewed bucket: {}", count);
        }
    }

    #[test]
    #[should_panic(expected = "modulus must be positive")]
    fn test_zero_modulus_is_a_caller_error() {
        Commitment::draw(&mut OsEntropy, 0);
    }

    #[test]
    fn test_tag_display_is_full_hex() {
        let tag = CommitmentTag::new(&SecretKey::from_bytes([1u8; 32]), 0);
        let rendered = tag.to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tag_serialization() {
        let tag = CommitmentTag::new(&SecretKey::from_bytes([9u8; 32]), 17);
        let json = serde_json::to_string(&tag).unwrap();
        let back: CommitmentTag = serde_json::from_str(&json).unwrap();
        assert_eq!(tag, back);
    }
}
