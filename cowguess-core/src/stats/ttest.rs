use std::time::Duration;

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::{Side, StatisticalTest, TestResult};

/// Welch's t-test: two independent samples, variances not assumed equal.
///
/// Rounds of two different strategies have different spreads, so the
/// unequal-variance form is the one that applies.
#[derive(Debug, Clone)]
pub struct WelchTTest {
    /// Confidence level for significance (default: 0.95).
    pub confidence_level: f64,
}

impl Default for WelchTTest {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Mean and unbiased variance of a set of round timings, in nanoseconds.
#[derive(Debug, Clone, Copy)]
struct Moments {
    n: usize,
    mean: f64,
    variance: f64,
}

impl Moments {
    fn of(samples: &[Duration]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                n,
                mean: 0.0,
                variance: 0.0,
            };
        }
        let values = samples.iter().map(|d| d.as_nanos() as f64);
        let mean = values.clone().sum::<f64>() / n as f64;
        let variance = if n < 2 {
            0.0
        } else {
            values.map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        };
        Self { n, mean, variance }
    }

    /// Squared standard error of the mean.
    fn se2(&self) -> f64 {
        self.variance / self.n as f64
    }
}

impl WelchTTest {
    /// # Panics
    /// Panics if `confidence_level` is not in the open range (0, 1).
    pub fn new(confidence_level: f64) -> Self {
        assert!(
            confidence_level > 0.0 && confidence_level < 1.0,
            "confidence_level must be between 0 and 1 (exclusive)"
        );
        Self { confidence_level }
    }

    /// Welch-Satterthwaite degrees of freedom.
    fn degrees_of_freedom(a: &Moments, b: &Moments) -> f64 {
        let (s1, s2) = (a.se2(), b.se2());
        let denominator = s1.powi(2) / (a.n - 1) as f64 + s2.powi(2) / (b.n - 1) as f64;
        if denominator == 0.0 {
            return (a.n.min(b.n) - 1) as f64;
        }
        (s1 + s2).powi(2) / denominator
    }

    fn effect_size(reference: f64, contender: f64) -> f64 {
        if reference != 0.0 {
            (reference - contender) / reference * 100.0
        } else {
            0.0
        }
    }

    fn faster(reference: f64, contender: f64) -> Option<Side> {
        if reference > contender {
            Some(Side::Contender)
        } else if contender > reference {
            Some(Side::Reference)
        } else {
            None
        }
    }

    fn result(&self, reference: &Moments, contender: &Moments, p_value: f64) -> TestResult {
        let statistically_significant = p_value < 1.0 - self.confidence_level;
        TestResult {
            p_value,
            statistically_significant,
            effect_size: Self::effect_size(reference.mean, contender.mean),
            confidence_level: self.confidence_level,
            winner: if statistically_significant {
                Self::faster(reference.mean, contender.mean)
            } else {
                None
            },
            reference_mean_ns: reference.mean,
            contender_mean_ns: contender.mean,
        }
    }
}

impl StatisticalTest for WelchTTest {
    fn analyze(&self, reference: &[Duration], contender: &[Duration]) -> TestResult {
        let a = Moments::of(reference);
        let b = Moments::of(contender);

        if a.n < 2 || b.n < 2 {
            let mut result = self.result(&a, &b, 1.0);
            result.effect_size = 0.0;
            return result;
        }

        let se = (a.se2() + b.se2()).sqrt();
        if se == 0.0 {
            // No spread at all: any difference in means is certain.
            let p_value = if a.mean == b.mean { 1.0 } else { 0.0 };
            return self.result(&a, &b, p_value);
        }

        let t = (a.mean - b.mean) / se;
        let df = Self::degrees_of_freedom(&a, &b);
        let p_value = match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => 2.0 * (1.0 - dist.cdf(t.abs())),
            Err(_) => 1.0,
        };

        self.result(&a, &b, p_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations_from_nanos(nanos: &[u64]) -> Vec<Duration> {
        nanos.iter().map(|&n| Duration::from_nanos(n)).collect()
    }

    #[test]
    fn test_identical_rounds() {
        let test = WelchTTest::default();
        let rounds = durations_from_nanos(&[100, 100, 100, 100, 100]);

        let result = test.analyze(&rounds, &rounds);

        assert!(!result.statistically_significant);
        assert!(result.winner.is_none());
        assert_eq!(result.effect_size, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_contender_clearly_faster() {
        let test = WelchTTest::default();
        let reference = durations_from_nanos(&[1000, 1001, 1002, 999, 1000]);
        let contender = durations_from_nanos(&[100, 101, 102, 99, 100]);

        let result = test.analyze(&reference, &contender);

        assert!(result.statistically_significant);
        assert_eq!(result.winner, Some(Side::Contender));
        assert!(result.effect_size > 0.0);
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn test_contender_slower() {
        let test = WelchTTest::default();
        let reference = durations_from_nanos(&[100, 101, 102, 99, 100]);
        let contender = durations_from_nanos(&[1000, 1001, 1002, 999, 1000]);

        let result = test.analyze(&reference, &contender);

        assert!(result.statistically_significant);
        assert_eq!(result.winner, Some(Side::Reference));
        assert!(result.effect_size < 0.0);
    }

    #[test]
    fn test_overlapping_rounds_inconclusive() {
        let test = WelchTTest::default();
        let reference = durations_from_nanos(&[100, 140, 90, 130, 95]);
        let contender = durations_from_nanos(&[110, 92, 135, 98, 120]);

        let result = test.analyze(&reference, &contender);

        assert!(!result.statistically_significant);
        assert!(result.winner.is_none());
    }

    #[test]
    fn test_single_round_is_inconclusive() {
        let test = WelchTTest::default();
        let result = test.analyze(&durations_from_nanos(&[100]), &durations_from_nanos(&[200]));

        assert!(!result.statistically_significant);
        assert!(result.winner.is_none());
        assert_eq!(result.p_value, 1.0);
        assert_eq!(result.reference_mean_ns, 100.0);
    }

    #[test]
    fn test_zero_spread_different_means() {
        let test = WelchTTest::default();
        let reference = durations_from_nanos(&[200, 200, 200, 200, 200]);
        let contender = durations_from_nanos(&[100, 100, 100, 100, 100]);

        let result = test.analyze(&reference, &contender);

        assert!(result.statistically_significant);
        assert_eq!(result.winner, Some(Side::Contender));
        assert!((result.effect_size - 50.0).abs() < 0.1);
    }

    #[test]
    #[should_panic(expected = "confidence_level must be between 0 and 1")]
    fn test_invalid_confidence_level() {
        WelchTTest::new(1.5);
    }
}
