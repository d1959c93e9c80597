//! The round entity and its lifecycle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::RoundOutcome;
use crate::store::AccountId;

/// Round identifier.
pub type RoundId = u64;

/// Lifecycle status of a round.
///
/// The transition is one-way: a round is created `Active` and becomes
/// `Finished` exactly once, either by a player bust or by a stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// The round accepts hit and stand actions.
    Active,
    /// The round is settled and immutable.
    Finished,
}

/// One complete wager cycle from deal to settlement.
///
/// A round owns its remaining deck and both hands, so card conservation
/// holds per round: deck plus player hand plus dealer hand always total
/// 52 cards. The stored round keeps the dealer's hole card; withholding
/// it from callers is the job of the [`RoundView`](crate::view::RoundView)
/// projection, never of this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    owner: AccountId,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: u64,
    status: RoundStatus,
    result: Option<RoundOutcome>,
}

impl Round {
    /// Opens a round: builds a fresh shuffled deck and deals two cards to
    /// the player and two to the dealer.
    pub(crate) fn open<R: Rng + ?Sized>(id: RoundId, owner: AccountId, bet: u64, rng: &mut R) -> Self {
        let mut deck = Deck::standard(rng);
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.push(deck.draw().expect("a fresh deck covers the opening deal"));
            dealer.push(deck.draw().expect("a fresh deck covers the opening deal"));
        }

        Self {
            id,
            owner,
            deck,
            player,
            dealer,
            bet,
            status: RoundStatus::Active,
            result: None,
        }
    }

    /// Returns the round identifier.
    #[must_use]
    pub const fn id(&self) -> RoundId {
        self.id
    }

    /// Returns the owning account.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the bet amount, fixed at creation.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the settled outcome, or `None` while the round is active.
    #[must_use]
    pub const fn result(&self) -> Option<RoundOutcome> {
        self.result
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rejects actions from non-owners and actions on finished rounds.
    pub(crate) fn ensure_owned_active(&self, account: AccountId) -> Result<(), ActionError> {
        if self.owner != account {
            return Err(ActionError::RoundNotOwned);
        }
        if self.status != RoundStatus::Active {
            return Err(ActionError::RoundNotActive);
        }
        Ok(())
    }

    /// Draws one card for the player.
    pub(crate) fn hit_player(&mut self) -> Result<Card, ActionError> {
        let card = self.deck.draw().ok_or(ActionError::DeckExhausted)?;
        self.player.push(card);
        Ok(card)
    }

    /// Draws one card for the dealer.
    pub(crate) fn hit_dealer(&mut self) -> Result<Card, ActionError> {
        let card = self.deck.draw().ok_or(ActionError::DeckExhausted)?;
        self.dealer.push(card);
        Ok(card)
    }

    /// Finishes the round with the given outcome.
    pub(crate) const fn finish(&mut self, outcome: RoundOutcome) {
        self.status = RoundStatus::Finished;
        self.result = Some(outcome);
    }

    /// Builds a round in an arbitrary mid-game position for tests.
    #[cfg(test)]
    pub(crate) const fn with_state(
        id: RoundId,
        owner: AccountId,
        bet: u64,
        deck: Deck,
        player: Hand,
        dealer: Hand,
    ) -> Self {
        Self {
            id,
            owner,
            deck,
            player,
            dealer,
            bet,
            status: RoundStatus::Active,
            result: None,
        }
    }
}
