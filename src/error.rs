//! Error types for table operations.

use thiserror::Error;

/// Errors returned by an account ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account not found.
    #[error("account not found")]
    UnknownAccount,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is outside the table limits.
    #[error("bet is outside the table limits")]
    BetOutOfRange,
    /// Account not found.
    #[error("account not found")]
    UnknownAccount,
    /// The bet exceeds the account balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

impl From<LedgerError> for StartError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownAccount => Self::UnknownAccount,
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}

/// Errors that can occur when acting on an existing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Round not found.
    #[error("round not found")]
    RoundNotFound,
    /// The round belongs to a different account.
    #[error("round is owned by a different account")]
    RoundNotOwned,
    /// The round has already finished.
    #[error("round is not active")]
    RoundNotActive,
    /// The deck ran out of cards. Unreachable under single-deck play with
    /// one player hand; treated as a store corruption signal.
    #[error("deck exhausted")]
    DeckExhausted,
    /// The round's owner is missing from the account store.
    #[error("account not found")]
    UnknownAccount,
}
