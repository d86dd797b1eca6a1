//! Shuffle-and-draw demonstration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::info;

use crate::deck::Deck;
use crate::error::HandError;
use crate::hand::Hand;
use crate::options::DemoOptions;
use crate::random::RandomSource;

/// Summary of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Display strings of the cards in the hand, in draw order.
    pub hand: Vec<String>,
    /// Number of cards in the hand.
    pub hand_len: usize,
    /// Number of cards left in the deck.
    pub deck_len: usize,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cards in hand: [")?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{card}'")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Number of cards in hand: {}", self.hand_len)?;
        write!(f, "Number of cards left in deck: {}", self.deck_len)
    }
}

/// Builds a fresh deck, shuffles it, and draws `options.draws` random cards
/// into a new hand.
///
/// `options.seed` is not read here; the caller builds `rng` from it.
///
/// # Errors
///
/// Returns [`HandError::EmptyDeck`] if `options.draws` exceeds the deck size.
pub fn run<R: RandomSource>(options: &DemoOptions, rng: &mut R) -> Result<DemoReport, HandError> {
    let mut deck = Deck::new();
    deck.shuffle(rng);

    let mut hand = Hand::new();
    for _ in 0..options.draws {
        hand.draw_random_card(&mut deck, rng)?;
    }

    info!(hand = hand.len(), deck = deck.len(), "demo finished");

    Ok(DemoReport {
        hand: hand.view_cards(),
        hand_len: hand.len(),
        deck_len: deck.len(),
    })
}
