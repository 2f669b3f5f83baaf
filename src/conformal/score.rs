use crate::data::FloatData;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Returns the conformity test statistic.
///
/// For each query likelihood, compute the proportion of validation likelihoods
/// that are less than or equal to it, with `n_val + 1` as the denominator.
/// NaN query values produce NaN at the same position.
///
/// This compares every query against every validation value. For large inputs
/// prefer [`ConformityScorer`], which gives identical results.
///
/// * `log_prob` - The log probability of data to compute conformity scores for.
/// * `val_log_prob` - The log probability of the validation data.
pub fn conformity_score<T: FloatData<T>>(log_prob: &[T], val_log_prob: &[T]) -> Vec<T> {
    let denominator = T::from_usize(val_log_prob.len() + 1);
    log_prob
        .iter()
        .map(|&s| {
            if s.is_nan() {
                T::NAN
            } else {
                let n_le = val_log_prob.iter().filter(|&&v| v <= s).count();
                T::from_usize(n_le) / denominator
            }
        })
        .collect()
}

/// Conformity scorer over a fixed validation set.
///
/// The validation values are sorted once, and each query is answered by a
/// binary search. NaN validation values are kept in the count of the
/// validation set, but never compare less than or equal to a query.
#[derive(Debug, Clone)]
pub struct ConformityScorer<T> {
    sorted: Vec<T>,
    n_val: usize,
}

impl<T: FloatData<T>> ConformityScorer<T> {
    /// Create a scorer from validation log probabilities.
    pub fn new(val_log_prob: &[T]) -> Self {
        let mut sorted: Vec<T> = val_log_prob.iter().copied().filter(|v| !v.is_nan()).collect();
        // No NaN values remain, so the comparison is total.
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        ConformityScorer {
            sorted,
            n_val: val_log_prob.len(),
        }
    }

    /// Size of the validation set, NaN values included.
    pub fn n_validation(&self) -> usize {
        self.n_val
    }

    /// Conformity score of a single log probability.
    pub fn score(&self, log_prob: T) -> T {
        if log_prob.is_nan() {
            return T::NAN;
        }
        let n_le = self.sorted.partition_point(|&v| v <= log_prob);
        T::from_usize(n_le) / T::from_usize(self.n_val + 1)
    }

    /// Conformity scores for a slice of log probabilities, in input order.
    ///
    /// * `log_prob` - Query log probabilities.
    /// * `parallel` - Score queries on the rayon thread pool.
    pub fn score_all(&self, log_prob: &[T], parallel: bool) -> Vec<T> {
        if parallel {
            log_prob.par_iter().map(|&s| self.score(s)).collect()
        } else {
            log_prob.iter().map(|&s| self.score(s)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_same(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x.is_nan() && y.is_nan()) || x == y, "{} != {}", x, y);
        }
    }

    #[test]
    fn test_conformity_score() {
        let log_prob: Vec<f64> = vec![1.0, 2.0, 4.0];
        let val_log_prob: Vec<f64> = vec![3.0, 3.0, 3.0, 3.0];
        let output = conformity_score(&log_prob, &val_log_prob);
        let expected = [0.0, 0.0, 0.8];
        for (o, e) in output.iter().zip(expected) {
            assert!((o - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_conformity_score_f32() {
        let output = conformity_score(&[1.0f32, 2.0, 4.0], &[3.0f32, 3.0, 3.0, 3.0]);
        assert_eq!(output.len(), 3);
        assert!((output[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let output = conformity_score(&[f64::NAN, 5.0, f64::NAN], &[1.0, 2.0]);
        assert!(output[0].is_nan());
        assert!((output[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!(output[2].is_nan());
    }

    #[test]
    fn test_ties_are_inclusive() {
        let output = conformity_score(&[3.0], &[1.0, 3.0, 3.0, 5.0]);
        assert_eq!(output, vec![3.0 / 5.0]);
    }

    #[test]
    fn test_maximal_and_minimal_conformity() {
        let val = vec![-3.0, -2.5, -2.0];
        let high = conformity_score(&[0.0, 1.0], &val);
        assert!(high.iter().all(|&p| p == 3.0 / 4.0));
        let low = conformity_score(&[-10.0, -5.0], &val);
        assert!(low.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_empty_validation() {
        assert_eq!(conformity_score(&[1.0, 2.0], &[]), vec![0.0, 0.0]);
        let scorer = ConformityScorer::<f64>::new(&[]);
        assert_eq!(scorer.score(1.0), 0.0);
    }

    #[test]
    fn test_nan_validation_counts_in_denominator() {
        let val = vec![1.0, f64::NAN, 2.0];
        let naive = conformity_score(&[5.0], &val);
        assert_eq!(naive, vec![0.5]);
        let scorer = ConformityScorer::new(&val);
        assert_eq!(scorer.n_validation(), 3);
        assert_eq!(scorer.score(5.0), 0.5);
    }

    #[test]
    fn test_scorer_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let n_val = rng.gen_range(0..200);
            let n_query = rng.gen_range(0..100);
            // Integer valued draws make ties frequent.
            let mut draw = |n: usize| -> Vec<f64> {
                (0..n)
                    .map(|_| {
                        if rng.gen_bool(0.05) {
                            f64::NAN
                        } else {
                            rng.gen_range(-20..20) as f64
                        }
                    })
                    .collect()
            };
            let val = draw(n_val);
            let query = draw(n_query);

            let naive = conformity_score(&query, &val);
            let scorer = ConformityScorer::new(&val);
            assert_same(&naive, &scorer.score_all(&query, false));
            assert_same(&naive, &scorer.score_all(&query, true));

            let upper = n_val as f64 / (n_val as f64 + 1.0);
            for (p, q) in naive.iter().zip(&query) {
                if q.is_nan() {
                    assert!(p.is_nan());
                } else {
                    assert!(*p >= 0.0 && *p <= upper);
                }
            }
        }
    }
}
