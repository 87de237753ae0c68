//! Fairdice Core Library
//!
//! This crate provides the cryptographic commit-reveal primitives, the dice
//! value types, and the round protocol for a two-party non-transitive dice
//! game in which every random draw is provably fair.

pub mod config;
pub mod crypto;
pub mod dice;
pub mod error;
pub mod protocol;

pub use config::parse_dice_pool;
pub use crypto::{Commitment, CommitmentTag, EntropySource, OsEntropy, SecretKey};
pub use dice::Dice;
pub use error::{ConfigError, GameError};
pub use protocol::{
    combine, Interaction, Participant, Prompt, Reply, Round, RoundEvent, RoundId, RoundOutcome,
};
