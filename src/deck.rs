//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DrawError, RemoveError};
use crate::random::RandomSource;

/// An ordered deck of playing cards.
///
/// A new deck holds every rank of every suit exactly once, suits in
/// [`Suit::ALL`] order and ranks in [`Rank::ALL`] order within each suit.
/// Cards only ever leave the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, top of the deck first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0].to_string(), "2 of Hearts");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
        trace!(remaining = self.cards.len(), "shuffled deck");
    }

    /// Removes and returns the top `n` cards, in deck order.
    ///
    /// Drawing zero cards returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `n` cards remain.
    /// The deck is left unchanged.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        if n > self.cards.len() {
            return Err(DrawError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        let drawn: Vec<Card> = self.cards.drain(..n).collect();
        debug!(count = n, remaining = self.cards.len(), "drew cards from deck");
        Ok(drawn)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }

        let card = self.cards.remove(0);
        debug!(%card, remaining = self.cards.len(), "drew card from deck");
        Ok(card)
    }

    /// Removes the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::CardNotFound`] if no such card is in the deck.
    pub fn remove_card(&mut self, card: &Card) -> Result<Card, RemoveError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(RemoveError::CardNotFound)?;

        let removed = self.cards.remove(index);
        trace!(card = %removed, remaining = self.cards.len(), "removed card from deck");
        Ok(removed)
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
