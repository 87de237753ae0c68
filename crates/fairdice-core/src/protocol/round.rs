//! Round state machine: turn order, dice assignment, rolls, comparison.

use crate::config::MIN_DICE;
use crate::crypto::EntropySource;
use crate::dice::Dice;
use crate::error::{ConfigError, GameError};

use super::exchange::Committed;
use super::interaction::{Interaction, Prompt, Reply, RoundEvent};
use super::types::{Participant, RoundId, RoundOutcome};

/// How many times a single prompt is re-asked after invalid input before the
/// round gives up.
pub const RETRY_LIMIT: usize = 10;

/// One complete round: determine the first mover, assign dice, run one
/// commit-reveal roll per party, compare throws.
///
/// The round owns the dice pool and both parties' assignments for its
/// lifetime and is consumed by [`Round::play`].
#[derive(Debug)]
pub struct Round<E, I> {
    id: RoundId,
    pool: Vec<Dice>,
    entropy: E,
    interaction: I,
}

impl<E: EntropySource, I: Interaction> Round<E, I> {
    /// Assemble a round over a validated pool.
    ///
    /// The pool invariants (at least [`MIN_DICE`] dice, non-empty, equal face
    /// counts) are enforced here so library callers cannot bypass
    /// [`crate::config::parse_dice_pool`].
    pub fn new(pool: Vec<Dice>, entropy: E, interaction: I) -> Result<Self, ConfigError> {
        if pool.len() < MIN_DICE {
            return Err(ConfigError::TooFewDice {
                required: MIN_DICE,
                got: pool.len(),
            });
        }
        let expected = pool[0].face_count();
        for (index, dice) in pool.iter().enumerate() {
            if dice.face_count() == 0 {
                return Err(ConfigError::EmptyDice { index });
            }
            if dice.face_count() != expected {
                return Err(ConfigError::MismatchedFaceCount {
                    index,
                    expected,
                    got: dice.face_count(),
                });
            }
        }
        Ok(Self {
            id: RoundId::new(),
            pool,
            entropy,
            interaction,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Run the round to completion.
    ///
    /// Returns `Aborted` if the counterpart asks to exit at any prompt;
    /// errors are fatal protocol or invariant failures.
    pub fn play(self) -> Result<RoundOutcome, GameError> {
        let Round {
            id: _,
            pool,
            mut entropy,
            mut interaction,
        } = self;

        let first = match determine_first_mover(&mut entropy, &mut interaction)? {
            Some(player) => player,
            None => return Ok(RoundOutcome::Aborted),
        };

        let (user_dice, computer_dice) =
            match assign_dice(first, pool, &mut entropy, &mut interaction)? {
                Some(assignment) => assignment,
                None => return Ok(RoundOutcome::Aborted),
            };

        let computer_throw = match roll_for(
            Participant::Computer,
            &computer_dice,
            &mut entropy,
            &mut interaction,
        )? {
            Some(throw) => throw,
            None => return Ok(RoundOutcome::Aborted),
        };
        let user_throw = match roll_for(
            Participant::User,
            &user_dice,
            &mut entropy,
            &mut interaction,
        )? {
            Some(throw) => throw,
            None => return Ok(RoundOutcome::Aborted),
        };

        let outcome = if user_throw > computer_throw {
            RoundOutcome::Win(Participant::User)
        } else if user_throw < computer_throw {
            RoundOutcome::Win(Participant::Computer)
        } else {
            RoundOutcome::Tie
        };

        interaction.notify(RoundEvent::Finished {
            outcome,
            user_throw,
            computer_throw,
        });

        Ok(outcome)
    }
}

/// Re-prompt until a value below `upper` arrives, the counterpart exits
/// (`Ok(None)`), or the retry budget is exhausted. Help replies re-prompt
/// without consuming the budget.
fn request_value<I: Interaction>(
    interaction: &mut I,
    prompt: Prompt<'_>,
    upper: u32,
) -> Result<Option<u32>, GameError> {
    let mut attempts = 0;
    while attempts < RETRY_LIMIT {
        match interaction.request(prompt) {
            Reply::Value(value) if value < upper => return Ok(Some(value)),
            Reply::Value(_) | Reply::Invalid => {
                attempts += 1;
                interaction.notify(RoundEvent::InvalidInput);
            }
            Reply::Help => interaction.help(),
            Reply::Exit => return Ok(None),
        }
    }
    Err(GameError::RetryLimitExceeded(RETRY_LIMIT))
}

/// One commit-reveal exchange over `{0, 1}`. The guess is a direct shot at
/// the committed coin value, not a modular combination: the counterpart goes
/// first iff the guess matches.
fn determine_first_mover<E: EntropySource, I: Interaction>(
    entropy: &mut E,
    interaction: &mut I,
) -> Result<Option<Participant>, GameError> {
    let staged = Committed::open(entropy, 2);
    interaction.notify(RoundEvent::Committed {
        range: 2,
        tag: staged.tag(),
    });

    let guess = match request_value(interaction, Prompt::TurnGuess, 2)? {
        Some(guess) => guess,
        None => return Ok(None),
    };

    let revealed = staged.accept(guess).reveal();
    interaction.notify(RoundEvent::Revealed {
        key: revealed.key(),
        value: revealed.value(),
    });
    let verified = revealed.verify()?;

    let first = if verified.committed_value() == guess {
        Participant::User
    } else {
        Participant::Computer
    };
    interaction.notify(RoundEvent::FirstMover {
        player: first,
        guess,
    });
    Ok(Some(first))
}

/// The first mover picks from the full pool, the second from the remainder.
/// The computer picks uniformly at random; the assigned dice are distinct by
/// construction.
fn assign_dice<E: EntropySource, I: Interaction>(
    first: Participant,
    pool: Vec<Dice>,
    entropy: &mut E,
    interaction: &mut I,
) -> Result<Option<(Dice, Dice)>, GameError> {
    let mut available = pool;

    let pick_for_computer = |available: &mut Vec<Dice>, entropy: &mut E| {
        let pick = entropy.uniform(available.len() as u32) as usize;
        available.remove(pick)
    };

    let (user_dice, computer_dice) = match first {
        Participant::Computer => {
            let computer_dice = pick_for_computer(&mut available, entropy);
            interaction.notify(RoundEvent::DiceAssigned {
                player: Participant::Computer,
                dice: &computer_dice,
            });

            let index = match request_value(
                interaction,
                Prompt::DiceSelection { pool: &available },
                available.len() as u32,
            )? {
                Some(index) => index,
                None => return Ok(None),
            };
            let user_dice = available.remove(index as usize);
            interaction.notify(RoundEvent::DiceAssigned {
                player: Participant::User,
                dice: &user_dice,
            });
            (user_dice, computer_dice)
        }
        Participant::User => {
            let index = match request_value(
                interaction,
                Prompt::DiceSelection { pool: &available },
                available.len() as u32,
            )? {
                Some(index) => index,
                None => return Ok(None),
            };
            let user_dice = available.remove(index as usize);
            interaction.notify(RoundEvent::DiceAssigned {
                player: Participant::User,
                dice: &user_dice,
            });

            let computer_dice = pick_for_computer(&mut available, entropy);
            interaction.notify(RoundEvent::DiceAssigned {
                player: Participant::Computer,
                dice: &computer_dice,
            });
            (user_dice, computer_dice)
        }
    };

    Ok(Some((user_dice, computer_dice)))
}

/// One commit-reveal exchange with `modulus = face_count`: the counterpart
/// contributes blind, the key is revealed right after, and the combined index
/// selects the throw.
fn roll_for<E: EntropySource, I: Interaction>(
    player: Participant,
    dice: &Dice,
    entropy: &mut E,
    interaction: &mut I,
) -> Result<Option<u32>, GameError> {
    let modulus = dice.face_count();
    let staged = Committed::open(entropy, modulus);
    interaction.notify(RoundEvent::Committed {
        range: modulus,
        tag: staged.tag(),
    });

    let contribution = match request_value(
        interaction,
        Prompt::Contribution { player, modulus },
        modulus,
    )? {
        Some(contribution) => contribution,
        None => return Ok(None),
    };

    let revealed = staged.accept(contribution).reveal();
    interaction.notify(RoundEvent::Revealed {
        key: revealed.key(),
        value: revealed.value(),
    });
    let verified = revealed.verify()?;

    let face_index = verified.resolve();
    let throw = dice.roll(face_index)?;
    interaction.notify(RoundEvent::Rolled {
        player,
        committed: verified.committed_value(),
        contribution,
        face_index,
        throw,
        modulus,
    });
    Ok(Some(throw))
}
