//! A single-player blackjack round engine with persistent balances.
//!
//! The crate provides a [`Table`] type that runs one wager cycle per
//! round: the bet is debited up front, the player hits or stands against
//! an automated dealer, and settlement credits the payout back to the
//! account. Account balances and round state live behind the
//! [`AccountStore`] and [`RoundStore`] collaborator traits; in-memory
//! implementations back the default table.
//!
//! # Example
//!
//! ```
//! use twentyone::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let player = table.accounts().open(100);
//!
//! let view = table.start_round(player, 10).expect("bet is within balance");
//! assert_eq!(view.player_hand.len(), 2);
//! assert_eq!(view.dealer_hand.len(), 1);
//! assert_eq!(view.balance, 90);
//!
//! let done = table.stand(view.round_id, player).expect("round is active");
//! assert!(done.dealer_value.is_some());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod store;
mod sync;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, LedgerError, StartError};
pub use hand::Hand;
pub use options::TableOptions;
pub use result::{RoundOutcome, settle};
pub use round::{Round, RoundId, RoundStatus};
pub use store::{AccountId, AccountStore, MemoryAccounts, MemoryRounds, RoundStore};
pub use table::Table;
pub use view::RoundView;
