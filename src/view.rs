//! Read projection of a round.

use serde::Serialize;

use crate::card::Card;
use crate::result::RoundOutcome;
use crate::round::{Round, RoundId, RoundStatus};

/// What a caller is allowed to see of a round.
///
/// While a round is active the projection carries only the dealer's up
/// card and omits the dealer value and result entirely. The withholding
/// happens here, at projection time; the stored [`Round`] always keeps
/// both dealer cards, so no operation takes a different code path for
/// hidden versus revealed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    /// Round identifier.
    pub round_id: RoundId,
    /// Lifecycle status.
    pub status: RoundStatus,
    /// The player's full hand.
    pub player_hand: Vec<Card>,
    /// The dealer's hand: the up card alone while active, every card once
    /// finished.
    pub dealer_hand: Vec<Card>,
    /// Current value of the player's hand.
    pub player_value: u8,
    /// Value of the dealer's hand, present once the round has finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_value: Option<u8>,
    /// Settled outcome, present once the round has finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundOutcome>,
    /// The owner's balance after the latest operation.
    pub balance: u64,
}

impl RoundView {
    pub(crate) fn project(round: &Round, balance: u64) -> Self {
        let finished = round.status() == RoundStatus::Finished;

        let dealer_hand = if finished {
            round.dealer().cards().to_vec()
        } else {
            round.dealer().cards().first().copied().into_iter().collect()
        };

        Self {
            round_id: round.id(),
            status: round.status(),
            player_hand: round.player().cards().to_vec(),
            dealer_hand,
            player_value: round.player().value(),
            dealer_value: finished.then(|| round.dealer().value()),
            result: round.result(),
            balance,
        }
    }
}
