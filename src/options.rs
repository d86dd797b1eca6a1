//! Demo configuration options.

/// Configuration for [`crate::demo::run`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DemoOptions;
///
/// let options = DemoOptions::default().with_draws(5).with_seed(42);
/// assert_eq!(options.draws, 5);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DemoOptions {
    /// Number of random cards the hand draws.
    pub draws: usize,
    /// Seed for the random source. `None` lets the caller pick one.
    pub seed: Option<u64>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            draws: 2,
            seed: None,
        }
    }
}

impl DemoOptions {
    /// Sets the number of random draws into the hand.
    #[must_use]
    pub const fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    /// Sets a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
