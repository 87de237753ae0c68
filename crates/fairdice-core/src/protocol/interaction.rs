//! Seam between the round state machine and whatever front-end drives it.

use crate::crypto::{CommitmentTag, SecretKey};
use crate::dice::Dice;

use super::types::{Participant, RoundOutcome};

/// What the round is asking the counterpart for.
#[derive(Clone, Copy, Debug)]
pub enum Prompt<'a> {
    /// Pick one dice from the remaining pool (reply with an index into it).
    DiceSelection { pool: &'a [Dice] },
    /// Guess the committed coin value, 0 or 1.
    TurnGuess,
    /// Supply an additive contribution in `[0, modulus)`.
    Contribution { player: Participant, modulus: u32 },
}

/// The counterpart's answer to a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    Value(u32),
    /// Unparseable input; the round re-prompts.
    Invalid,
    /// Show the analytics table, then re-prompt. Does not consume the retry
    /// budget.
    Help,
    /// Abort the round with no outcome.
    Exit,
}

/// Protocol milestones the front-end must be able to display, in order.
/// Together they form an auditable transcript of the round.
#[derive(Debug)]
pub enum RoundEvent<'a> {
    /// Phase (a): a value in `[0, range)` has been committed; only the tag is
    /// disclosed.
    Committed { range: u32, tag: CommitmentTag },
    /// Phase (c): key and committed value are now public.
    Revealed { key: &'a SecretKey, value: u32 },
    /// The turn-order exchange resolved.
    FirstMover { player: Participant, guess: u32 },
    /// A party locked in its dice for the round.
    DiceAssigned { player: Participant, dice: &'a Dice },
    /// A roll exchange resolved into a throw.
    Rolled {
        player: Participant,
        committed: u32,
        contribution: u32,
        face_index: u32,
        throw: u32,
        modulus: u32,
    },
    /// The last reply was out of range or unparseable; a re-prompt follows.
    InvalidInput,
    /// Both throws compared.
    Finished {
        outcome: RoundOutcome,
        user_throw: u32,
        computer_throw: u32,
    },
}

/// The external counterpart of the protocol: supplies dice selections, the
/// turn guess, and roll contributions, and renders the protocol transcript.
pub trait Interaction {
    /// Ask for one value. Invalid replies are re-prompted by the round, up to
    /// its retry limit.
    fn request(&mut self, prompt: Prompt<'_>) -> Reply;

    /// The counterpart asked for help; render the analytics table.
    fn help(&mut self) {}

    /// Display a protocol milestone.
    fn notify(&mut self, event: RoundEvent<'_>);
}

impl<I: Interaction + ?Sized> Interaction for &mut I {
    fn request(&mut self, prompt: Prompt<'_>) -> Reply {
        (**self).request(prompt)
    }

    fn help(&mut self) {
        (**self).help();
    }

    fn notify(&mut self, event: RoundEvent<'_>) {
        (**self).notify(event);
    }
}
