//! Simulated measurement provider.
//!
//! The service does not run a real browser, so several performance and
//! contrast figures are fabricated. Rather than hardwiring randomness into
//! the extractors, every fabricated measurement is drawn through the
//! [`SignalSource`] trait: production injects [`ThreadRngSignals`], tests
//! inject [`FixedSignals`] to get fully deterministic scores.

use rand::Rng;

/// A source of simulated measurement values.
pub trait SignalSource: Send + Sync {
    /// Samples a value uniformly from `[lo, hi)`.
    fn sample(&self, lo: f64, hi: f64) -> f64;
}

/// Production signal source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSignals;

impl SignalSource for ThreadRngSignals {
    fn sample(&self, lo: f64, hi: f64) -> f64 {
        rand::rng().random_range(lo..hi)
    }
}

/// Deterministic signal source for tests.
///
/// Always returns `lo + fraction * (hi - lo)` for a fixed fraction in [0, 1).
#[derive(Debug, Clone, Copy)]
pub struct FixedSignals {
    fraction: f64,
}

impl FixedSignals {
    /// Creates a source that returns the given fraction of every range.
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// A source pinned to the bottom of every range.
    pub fn floor() -> Self {
        Self::new(0.0)
    }

    /// A source pinned to the middle of every range.
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl SignalSource for FixedSignals {
    fn sample(&self, lo: f64, hi: f64) -> f64 {
        lo + self.fraction * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_signals_are_deterministic() {
        let signals = FixedSignals::midpoint();
        assert_eq!(signals.sample(0.0, 10.0), 5.0);
        assert_eq!(signals.sample(0.0, 10.0), 5.0);
    }

    #[test]
    fn thread_rng_respects_bounds() {
        let signals = ThreadRngSignals;
        for _ in 0..100 {
            let v = signals.sample(2.0, 3.0);
            assert!((2.0..3.0).contains(&v));
        }
    }
}
