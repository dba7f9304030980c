use std::sync::Arc;

use rand::Rng;

/// Source of uniform random draws in `[0, 1)`.
///
/// Handlers take this as a trait object so tests can substitute a
/// deterministic source and assert weighted branches without sampling.
pub trait RandomSource {
    fn next_uniform(&self) -> f64;
}

pub type DynRandomSource = Arc<dyn RandomSource + Send + Sync>;

/// Production source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_uniform(&self) -> f64 {
        rand::rng().random()
    }
}

/// Yields the same draw on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource(pub f64);

impl RandomSource for FixedRandomSource {
    fn next_uniform(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_source_draws_stay_in_unit_interval() {
        let source = ThreadRandomSource;
        for _ in 0..10_000 {
            let draw = source.next_uniform();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn fixed_source_repeats_its_value() {
        let source = FixedRandomSource(0.42);
        assert_eq!(source.next_uniform(), 0.42);
        assert_eq!(source.next_uniform(), 0.42);
    }
}
