//! Conformal Prediction
//!
//! Conformity scores for comparing the likelihood of generated samples with
//! a held-out validation likelihood distribution.
//!
//! The score of a query log-likelihood `s` is the smoothed empirical p-value
//! `#{v in validation : v <= s} / (n_val + 1)`. The `+ 1` treats the query as
//! notionally joining the validation set, so scores never reach 1.
//!
//! Reading the score:
//! * `> 0.5`: higher conformity, the query looks like the validation population.
//! * `0.5`: boundary.
//! * `< 0.5`: lower conformity, the query looks out of distribution.
//!
//! References
//! * [A Tutorial on Conformal Prediction](https://jmlr.csail.mit.edu/papers/volume9/shafer08a/shafer08a.pdf)
//! * [Criteria of efficiency for conformal prediction](https://arxiv.org/pdf/1603.04416.pdf)

pub mod score;

pub use score::{conformity_score, ConformityScorer};
