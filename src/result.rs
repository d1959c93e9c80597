//! Round outcome types and the payout table.

use serde::{Deserialize, Serialize};

/// Final result of a settled round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Lose,
    /// Push (tie); the stake is returned.
    Push,
}

/// Computes the outcome and the amount to credit back to the player.
///
/// Win pays even money: the stake plus an equal profit (`2 * bet`). A push
/// returns the stake. A loss credits nothing; the stake was already
/// debited when the round started.
///
/// Only reached from a stand. A player bust is settled directly by the
/// hit path with no credit, so `player_value` is at most 21 here.
#[must_use]
pub const fn settle(player_value: u8, dealer_value: u8, bet: u64) -> (RoundOutcome, u64) {
    if dealer_value > 21 || player_value > dealer_value {
        (RoundOutcome::Win, bet * 2)
    } else if player_value == dealer_value {
        (RoundOutcome::Push, bet)
    } else {
        (RoundOutcome::Lose, 0)
    }
}
