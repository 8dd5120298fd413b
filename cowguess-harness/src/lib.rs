//! Benchmark harness for cowguess.
//!
//! Strategies are registered by name in a [`StrategyRegistry`] and timed one
//! after another by a [`BenchmarkRunner`] against the fixed workload.

mod runner;

pub use runner::{round_sizes, BenchmarkRunner, RunSettings};

use cowguess_core::DuplicateDetector;
use thiserror::Error;

/// Errors raised while setting up or running a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Two strategies were registered under one name.
    #[error("Strategy already registered: {0}")]
    DuplicateStrategy(String),

    /// There is nothing to benchmark.
    #[error("No strategies registered")]
    EmptyRegistry,

    /// Rounds must be at least one.
    #[error("Round count must be at least 1")]
    ZeroRounds,
}

/// A duplicate-detection strategy: true if the input repeats a character.
pub type StrategyFn = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Ordered table of named strategies.
///
/// Registration order is the order strategies are benchmarked and reported in.
pub struct StrategyRegistry {
    strategies: Vec<(String, StrategyFn)>,
}

impl StrategyRegistry {
    /// Create a new empty strategy registry.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// A registry holding every [`DuplicateDetector`], named by [`DuplicateDetector::name`].
    pub fn with_detectors() -> Self {
        let mut registry = Self::new();
        for detector in DuplicateDetector::ALL {
            let strategy: StrategyFn = Box::new(move |input: &str| detector.has_duplicate(input));
            registry.strategies.push((detector.name().to_string(), strategy));
        }
        registry
    }

    /// Register a strategy with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::DuplicateStrategy`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), HarnessError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(HarnessError::DuplicateStrategy(name));
        }
        self.strategies.push((name, Box::new(f)));
        Ok(())
    }

    /// List all registered strategy names, in registration order.
    pub fn list(&self) -> Vec<String> {
        self.strategies.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Run a strategy by name once on `input`.
    ///
    /// Returns `None` if no strategy with the given name exists.
    pub fn run(&self, name: &str, input: &str) -> Option<bool> {
        self.strategies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f(input))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &StrategyFn)> {
        self.strategies.iter().map(|(name, f)| (name.as_str(), f))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_and_list() {
        let mut registry = StrategyRegistry::new();
        registry.register("always", |_| true).unwrap();
        registry.register("never", |_| false).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("always"));
        assert!(!registry.contains("sometimes"));
        assert_eq!(registry.list(), vec!["always", "never"]);
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let mut registry = StrategyRegistry::new();
        registry.register("scan", |_| false).unwrap();

        let result = registry.register("scan", |_| true);
        assert_eq!(result, Err(HarnessError::DuplicateStrategy("scan".to_string())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_run() {
        let mut registry = StrategyRegistry::new();
        registry.register("long", |s| s.len() > 3).unwrap();

        assert_eq!(registry.run("long", "abcd"), Some(true));
        assert_eq!(registry.run("long", "ab"), Some(false));
        assert_eq!(registry.run("missing", "abcd"), None);
    }

    #[test]
    fn test_with_detectors() {
        let registry = StrategyRegistry::with_detectors();

        assert_eq!(
            registry.list(),
            vec!["pattern-backreference", "pattern-named-group", "iterative-scan"]
        );
        for name in registry.list() {
            assert_eq!(registry.run(&name, "abba"), Some(true));
            assert_eq!(registry.run(&name, "abcd"), Some(false));
        }
    }

    #[test]
    fn test_registry_default() {
        assert!(StrategyRegistry::default().is_empty());
    }
}
