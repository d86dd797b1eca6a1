//! Player hand representation.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{HandError, RemoveError};
use crate::random::RandomSource;

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Moves a uniformly random card from `deck` into the hand.
    ///
    /// The card is chosen among all remaining cards regardless of position,
    /// removed from the deck, and appended to the hand. Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyDeck`] if the deck has no cards, or
    /// [`HandError::Remove`] if `rng` picks an index past the end of the deck.
    /// Neither the deck nor the hand is modified on error.
    pub fn draw_random_card<R: RandomSource>(
        &mut self,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Card, HandError> {
        if deck.is_empty() {
            return Err(HandError::EmptyDeck);
        }

        let index = rng.pick(deck.len());
        let chosen = deck
            .cards()
            .get(index)
            .copied()
            .ok_or(RemoveError::CardNotFound)?;
        let card = deck.remove_card(&chosen)?;
        self.cards.push(card);

        debug!(%card, hand = self.cards.len(), deck = deck.len(), "drew random card");
        Ok(card)
    }

    /// Returns the display strings of the cards in the hand, in draw order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, Hand, SeededRandom};
    ///
    /// let mut deck = Deck::new();
    /// let mut hand = Hand::new();
    /// let card = hand.draw_random_card(&mut deck, &mut SeededRandom::new(7)).unwrap();
    /// assert_eq!(hand.view_cards(), vec![card.to_string()]);
    /// ```
    #[must_use]
    pub fn view_cards(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
