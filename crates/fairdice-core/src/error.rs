//! Error taxonomy for configuration and round-level failures.

use thiserror::Error;

/// Errors detected while assembling a game, before any round begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least {required} dice are required, got {got}")]
    TooFewDice { required: usize, got: usize },

    #[error("dice {index}: face '{face}' is not an integer")]
    NotAnInteger { index: usize, face: String },

    #[error("dice {index}: {source}")]
    InvalidDice {
        index: usize,
        source: GameError,
    },

    #[error("dice {index} has no faces")]
    EmptyDice { index: usize },

    #[error("all dice must have the same face count: dice 0 has {expected}, dice {index} has {got}")]
    MismatchedFaceCount {
        index: usize,
        expected: u32,
        got: u32,
    },
}

/// Errors raised while a round is in flight. All of these are fatal for the
/// round; recoverable bad input is re-prompted and only surfaces here once
/// the retry budget is exhausted.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid dice face value {0}: faces must be non-negative integers")]
    InvalidFaceValue(i64),

    #[error("face index {index} out of range for a {faces}-face dice")]
    FaceIndexOutOfRange { index: u32, faces: u32 },

    #[error("revealed key and value do not match the published commitment tag")]
    CommitmentVerificationFailure,

    #[error("no valid input after {0} attempts")]
    RetryLimitExceeded(usize),
}
