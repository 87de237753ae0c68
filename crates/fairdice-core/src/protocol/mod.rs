//! Round protocol: the fair-value combiner, the typed commit-reveal
//! exchange, the interaction seam, and the round state machine.

mod combine;
mod exchange;
mod interaction;
mod round;
mod types;

pub use combine::combine;
pub use exchange::{Committed, ContributionReceived, Revealed, Verified};
pub use interaction::{Interaction, Prompt, Reply, RoundEvent};
pub use round::{Round, RETRY_LIMIT};
pub use types::{Participant, RoundId, RoundOutcome};
