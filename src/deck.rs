//! Deck construction and drawing.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Suit};

/// A single shuffled deck.
///
/// A deck is built once per round and only ever shrinks: cards leave from
/// the draw end and are never returned or reshuffled. The shuffling RNG is
/// supplied by the caller, so a seeded generator yields a reproducible
/// permutation in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given RNG.
    ///
    /// Every suit/rank combination appears exactly once.
    #[must_use]
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last card in the sequence is drawn first. Intended for store
    /// rehydration and for scripting deterministic deals in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns one card from the draw end.
    ///
    /// Returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
