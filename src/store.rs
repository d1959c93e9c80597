//! Collaborator contracts for account balances and round persistence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::LedgerError;
use crate::round::{Round, RoundId};
use crate::sync::Mutex;

/// Account identifier, resolved by the caller's identity layer.
///
/// The engine trusts the id as given and only checks round ownership.
pub type AccountId = u64;

/// Balance bookkeeping for player accounts.
///
/// The engine requests a debit when a round starts and a credit at
/// settlement, nothing else. An implementation backed by a transactional
/// store must commit balance changes atomically with the round state
/// written through [`RoundStore`], or balances and rounds drift apart.
pub trait AccountStore {
    /// Returns the balance, or `None` for unknown accounts.
    fn balance(&self, account: AccountId) -> Option<u64>;

    /// Removes `amount` from the account and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown or the balance is
    /// smaller than `amount`; the balance is left untouched either way.
    fn debit(&self, account: AccountId, amount: u64) -> Result<u64, LedgerError>;

    /// Adds `amount` to the account and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown.
    fn credit(&self, account: AccountId, amount: u64) -> Result<u64, LedgerError>;
}

/// Durable mapping from round id to round state.
pub trait RoundStore {
    /// Returns a copy of the stored round, if any.
    fn get(&self, id: RoundId) -> Option<Round>;

    /// Writes the round state, replacing any previous version.
    fn put(&self, round: Round);
}

/// In-memory account ledger.
pub struct MemoryAccounts {
    balances: Mutex<HashMap<AccountId, u64>>,
    next_id: AtomicU64,
}

impl MemoryAccounts {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Registers a new account with an opening deposit.
    ///
    /// Returns the assigned account id.
    pub fn open(&self, deposit: u64) -> AccountId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.balances.lock().insert(id, deposit);
        id
    }
}

impl Default for MemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccounts {
    fn balance(&self, account: AccountId) -> Option<u64> {
        self.balances.lock().get(&account).copied()
    }

    fn debit(&self, account: AccountId, amount: u64) -> Result<u64, LedgerError> {
        let mut balances = self.balances.lock();
        let balance = balances
            .get_mut(&account)
            .ok_or(LedgerError::UnknownAccount)?;

        if *balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        *balance -= amount;
        Ok(*balance)
    }

    fn credit(&self, account: AccountId, amount: u64) -> Result<u64, LedgerError> {
        let mut balances = self.balances.lock();
        let balance = balances
            .get_mut(&account)
            .ok_or(LedgerError::UnknownAccount)?;

        *balance += amount;
        Ok(*balance)
    }
}

/// In-memory round persistence.
pub struct MemoryRounds {
    rounds: Mutex<HashMap<RoundId, Round>>,
}

impl MemoryRounds {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryRounds {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStore for MemoryRounds {
    fn get(&self, id: RoundId) -> Option<Round> {
        self.rounds.lock().get(&id).cloned()
    }

    fn put(&self, round: Round) {
        self.rounds.lock().insert(round.id(), round);
    }
}
