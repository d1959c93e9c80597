use std::sync::atomic::Ordering;

use tracing::info;

use crate::error::StartError;
use crate::round::Round;
use crate::store::{AccountId, AccountStore, RoundStore};
use crate::view::RoundView;

use super::Table;

impl<A: AccountStore, R: RoundStore> Table<A, R> {
    /// Starts a new round for the given account.
    ///
    /// The bet is debited immediately and stays at risk for the whole
    /// round; only a settlement credit returns it. Two cards go to the
    /// player and two to the dealer from a fresh shuffled deck. The
    /// returned view shows the dealer's up card only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or outside the table limits,
    /// the account is unknown, or the balance cannot cover the bet. A
    /// failed start leaves the balance untouched.
    pub fn start_round(&self, account: AccountId, bet: u64) -> Result<RoundView, StartError> {
        if bet == 0 {
            return Err(StartError::ZeroBet);
        }
        if !self.options.allows(bet) {
            return Err(StartError::BetOutOfRange);
        }

        let _guard = self.gate.lock();

        let balance = self.accounts.debit(account, bet)?;

        let id = self.next_round_id.fetch_add(1, Ordering::SeqCst);
        let round = {
            let mut rng = self.rng.lock();
            Round::open(id, account, bet, &mut *rng)
        };

        info!(round = id, account, bet, "round opened");

        let view = RoundView::project(&round, balance);
        self.rounds.put(round);

        Ok(view)
    }
}
