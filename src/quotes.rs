//! Placeholder stock snapshots.
//!
//! There is no market data behind these numbers: [`MockQuoteSource`] draws a price
//! in `[100, 400)`, a change in `[-5, 5)` and a percent change in `[-2.5, 2.5)`,
//! each rounded to two decimals.

use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

/// A point-in-time price display for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl StockSnapshot {
    /// True when the change is zero or positive.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// Something that can produce a snapshot for a ticker symbol.
pub trait QuoteSource: Send + Sync {
    /// Returns `None` when no snapshot is available for `symbol`.
    fn quote(&self, symbol: &str) -> Option<StockSnapshot>;
}

/// Random quote generator.
#[derive(Debug)]
pub struct MockQuoteSource {
    rng: Mutex<StdRng>,
}

impl MockQuoteSource {
    /// A generator seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// A deterministic generator, for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for MockQuoteSource {
    fn quote(&self, symbol: &str) -> Option<StockSnapshot> {
        // A poisoned lock only means another caller panicked mid-draw; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Some(StockSnapshot {
            symbol: symbol.to_string(),
            price: round2(rng.random_range(100.0..400.0)),
            change: round2(rng.random_range(-5.0..5.0)),
            change_percent: round2(rng.random_range(-2.5..2.5)),
        })
    }
}

/// A source that never has data; quotes are optional in the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoQuotes;

impl QuoteSource for NoQuotes {
    fn quote(&self, _symbol: &str) -> Option<StockSnapshot> {
        None
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
