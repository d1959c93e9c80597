//! The table: engine facade over stores, randomness and round flow.
//!
//! Every operation is one atomic transaction against one round and one
//! balance. Mutating operations run under a table-level guard, a coarse
//! stand-in for per-round mutual exclusion; a transactional store pair
//! may refine the granularity. Reads take no guard and observe only
//! committed state.

use std::sync::atomic::AtomicU64;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ActionError;
use crate::options::TableOptions;
use crate::round::{Round, RoundId};
use crate::store::{AccountStore, MemoryAccounts, MemoryRounds, RoundStore};
use crate::sync::Mutex;
use crate::view::RoundView;

mod actions;
mod dealer;
mod start;


/// A blackjack table running independent single-player rounds.
///
/// The table owns the shuffling RNG and the collaborating stores. Rounds
/// belonging to different accounts share nothing beyond those stores.
pub struct Table<A = MemoryAccounts, R = MemoryRounds> {
    /// Account ledger.
    accounts: A,
    /// Round persistence.
    rounds: R,
    /// Table options.
    options: TableOptions,
    /// Next round ID to assign.
    next_round_id: AtomicU64,
    /// Random number generator feeding every shuffle.
    rng: Mutex<ChaCha8Rng>,
    /// Serializes mutating operations.
    gate: Mutex<()>,
}

impl Table<MemoryAccounts, MemoryRounds> {
    /// Creates a table backed by in-memory stores, seeded for shuffling.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{AccountStore, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// let player = table.accounts().open(100);
    /// assert_eq!(table.accounts().balance(player), Some(100));
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_stores(options, seed, MemoryAccounts::new(), MemoryRounds::new())
    }
}

impl<A: AccountStore, R: RoundStore> Table<A, R> {
    /// Creates a table over caller-supplied stores.
    #[must_use]
    pub fn with_stores(options: TableOptions, seed: u64, accounts: A, rounds: R) -> Self {
        Self {
            accounts,
            rounds,
            options,
            next_round_id: AtomicU64::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            gate: Mutex::new(()),
        }
    }

    /// Returns the account store.
    pub const fn accounts(&self) -> &A {
        &self.accounts
    }

    /// Returns the round store.
    pub const fn rounds(&self) -> &R {
        &self.rounds
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the read projection of a round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round id is unknown or the owner is
    /// missing from the account store.
    pub fn round_view(&self, id: RoundId) -> Result<RoundView, ActionError> {
        let round = self.rounds.get(id).ok_or(ActionError::RoundNotFound)?;
        self.project(&round)
    }

    pub(crate) fn project(&self, round: &Round) -> Result<RoundView, ActionError> {
        let balance = self
            .accounts
            .balance(round.owner())
            .ok_or(ActionError::UnknownAccount)?;
        Ok(RoundView::project(round, balance))
    }
}
