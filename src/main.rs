//! Shuffles a deck, draws two random cards into a hand, and prints a summary.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{DemoOptions, HandError, SeededRandom, demo};
use tracing::Level;

fn main() -> Result<(), HandError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let options = DemoOptions::default();
    let seed = options.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    let mut rng = SeededRandom::new(seed);

    let report = demo::run(&options, &mut rng)?;
    println!("{report}");

    Ok(())
}
