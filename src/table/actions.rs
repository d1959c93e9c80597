use tracing::{debug, info};

use crate::error::ActionError;
use crate::result::{RoundOutcome, settle};
use crate::round::RoundId;
use crate::store::{AccountId, AccountStore, RoundStore};
use crate::view::RoundView;

use super::{Table, dealer};

impl<A: AccountStore, R: RoundStore> Table<A, R> {
    /// Player action: hit (draw a card).
    ///
    /// A bust finishes the round as a loss on the spot. The bet was
    /// already debited at the start, so a bust changes no balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is unknown, owned by a different
    /// account, or already finished. `DeckExhausted` is defensive and
    /// unreachable under single-deck play.
    pub fn hit(&self, id: RoundId, account: AccountId) -> Result<RoundView, ActionError> {
        let _guard = self.gate.lock();

        let mut round = self.rounds.get(id).ok_or(ActionError::RoundNotFound)?;
        round.ensure_owned_active(account)?;

        let card = round.hit_player()?;
        debug!(
            round = id,
            account,
            rank = card.rank,
            value = round.player().value(),
            "player hit"
        );

        if round.player().is_bust() {
            round.finish(RoundOutcome::Lose);
            info!(
                round = id,
                account,
                value = round.player().value(),
                "player bust"
            );
        }

        let view = self.project(&round)?;
        self.rounds.put(round);
        Ok(view)
    }

    /// Player action: stand.
    ///
    /// Runs the dealer policy (draw while under 17, stand on soft and
    /// hard 17 alike), settles the round against the payout table and
    /// credits the payout to the owner.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`hit`](Self::hit).
    pub fn stand(&self, id: RoundId, account: AccountId) -> Result<RoundView, ActionError> {
        let _guard = self.gate.lock();

        let mut round = self.rounds.get(id).ok_or(ActionError::RoundNotFound)?;
        round.ensure_owned_active(account)?;

        dealer::run(&mut round)?;

        let (outcome, payout) = settle(round.player().value(), round.dealer().value(), round.bet());
        round.finish(outcome);

        if payout > 0 {
            self.accounts
                .credit(account, payout)
                .map_err(|_| ActionError::UnknownAccount)?;
        }

        info!(
            round = id,
            account,
            ?outcome,
            payout,
            dealer_value = round.dealer().value(),
            "round settled"
        );

        let view = self.project(&round)?;
        self.rounds.put(round);
        Ok(view)
    }
}
