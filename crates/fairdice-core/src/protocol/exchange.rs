//! One commit-reveal exchange as a typed state machine.
//!
//! `Committed -> ContributionReceived -> Revealed -> Verified`: each phase is
//! its own type and each transition consumes the previous state, so revealing
//! the key before the counterpart's contribution is fixed does not compile.

use crate::crypto::{Commitment, CommitmentTag, EntropySource, SecretKey};
use crate::error::GameError;

use super::combine::combine;

/// Phase (a): the engine has drawn and committed a hidden value. Only the tag
/// may be disclosed.
#[derive(Debug)]
pub struct Committed {
    commitment: Commitment,
    modulus: u32,
}

impl Committed {
    /// Stage a fresh draw in `[0, modulus)`.
    pub fn open<E: EntropySource>(entropy: &mut E, modulus: u32) -> Self {
        Self {
            commitment: Commitment::draw(entropy, modulus),
            modulus,
        }
    }

    /// The published tag.
    pub fn tag(&self) -> CommitmentTag {
        self.commitment.tag()
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Phase (b): fix the counterpart's contribution, still blind to the
    /// committed value. The contribution must already be validated to lie in
    /// `[0, modulus)`.
    pub fn accept(self, contribution: u32) -> ContributionReceived {
        assert!(
            contribution < self.modulus,
            "contribution must be validated before it is accepted"
        );
        ContributionReceived {
            commitment: self.commitment,
            contribution,
            modulus: self.modulus,
        }
    }
}

/// Phase (b) complete: the contribution is locked in; the key is still secret.
#[derive(Debug)]
pub struct ContributionReceived {
    commitment: Commitment,
    contribution: u32,
    modulus: u32,
}

impl ContributionReceived {
    /// Phase (c): disclose the key and committed value.
    pub fn reveal(self) -> Revealed {
        let tag = self.commitment.tag();
        let (key, value) = self.commitment.reveal();
        Revealed {
            key,
            value,
            tag,
            contribution: self.contribution,
            modulus: self.modulus,
        }
    }
}

/// Phase (c) complete: key and value are public and ready for verification.
#[derive(Debug)]
pub struct Revealed {
    key: SecretKey,
    value: u32,
    tag: CommitmentTag,
    contribution: u32,
    modulus: u32,
}

impl Revealed {
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Phase (d): recompute the keyed digest and check it against the tag
    /// published at commit time. A mismatch is a protocol violation and
    /// aborts the round.
    pub fn verify(self) -> Result<Verified, GameError> {
        if !self.tag.verify(&self.key, self.value) {
            return Err(GameError::CommitmentVerificationFailure);
        }
        Ok(Verified {
            value: self.value,
            contribution: self.contribution,
            modulus: self.modulus,
        })
    }
}

/// A fully audited exchange.
#[derive(Debug)]
pub struct Verified {
    value: u32,
    contribution: u32,
    modulus: u32,
}

impl Verified {
    /// The value the engine committed to.
    pub fn committed_value(&self) -> u32 {
        self.value
    }

    /// The counterpart's contribution.
    pub fn contribution(&self) -> u32 {
        self.contribution
    }

    /// Merge the committed value with the contribution.
    pub fn resolve(&self) -> u32 {
        combine(self.value, self.contribution, self.modulus)
    }
}
