//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that can be shuffled and drawn from in order,
//! and a [`Hand`] that draws uniformly random cards out of a deck. All
//! randomness comes through the [`RandomSource`] trait so callers can seed or
//! script it.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Hand, SeededRandom};
//!
//! let mut rng = SeededRandom::new(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let mut hand = Hand::new();
//! hand.draw_random_card(&mut deck, &mut rng).unwrap();
//! assert_eq!(hand.len(), 1);
//! assert_eq!(deck.len(), 51);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod demo;
pub mod error;
pub mod hand;
pub mod options;
pub mod random;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use demo::DemoReport;
pub use error::{CardError, DrawError, HandError, RemoveError};
pub use hand::Hand;
pub use options::DemoOptions;
pub use random::{RandomSource, SeededRandom};
