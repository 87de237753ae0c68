//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier, used to tag audit logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two parties in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participant {
    User,
    Computer,
}

impl Participant {
    /// Get the other party
    pub fn opponent(&self) -> Participant {
        match self {
            Participant::User => Participant::Computer,
            Participant::Computer => Participant::User,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::User => write!(f, "user"),
            Participant::Computer => write!(f, "computer"),
        }
    }
}

/// Terminal result of a round.
///
/// `Aborted` means an exit request ended the round early: no winner, no tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win(Participant),
    Tie,
    Aborted,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Win(player) => write!(f, "{} wins", player),
            RoundOutcome::Tie => write!(f, "tie"),
            RoundOutcome::Aborted => write!(f, "aborted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_participant_opponent() {
        assert_eq!(Participant::User.opponent(), Participant::Computer);
        assert_eq!(Participant::Computer.opponent(), Participant::User);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::Win(Participant::User).to_string(), "user wins");
        assert_eq!(RoundOutcome::Tie.to_string(), "tie");
        assert_eq!(RoundOutcome::Aborted.to_string(), "aborted");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = RoundOutcome::Win(Participant::Computer);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: RoundOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
