//! Error types for card, deck, and hand operations.

use thiserror::Error;

/// Errors that can occur when constructing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of the thirteen standard ranks.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four standard suits.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when drawing from the top of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More cards were requested than remain in the deck.
    #[error("not enough cards in the deck to draw {requested} (remaining: {remaining})")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when removing a specific card from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// The card is not in the deck.
    #[error("card not found in the deck")]
    CardNotFound,
}

/// Errors that can occur when a hand draws from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No cards left in the deck.
    #[error("no cards left in the deck to draw")]
    EmptyDeck,
    /// The selected card could not be removed from the deck.
    #[error(transparent)]
    Remove(#[from] RemoveError),
}
