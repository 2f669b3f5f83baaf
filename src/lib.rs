//! Design Metrics
//!
//! Statistical quality metrics for generated biomolecular sequences:
//! conformity scores of model log-likelihoods against a validation set, and
//! per-descriptor Wasserstein distances between a batch of designs and a
//! reference population.

// Modules
pub mod conformal;
pub mod config;
pub mod constants;
pub mod data;
pub mod descriptors;
pub mod errors;
pub mod metrics;
pub mod utils;

// Individual classes, and functions
pub use conformal::{conformity_score, ConformityScorer};
pub use config::{AggregatorConfig, MetricsIO};
pub use data::{Column, DescriptorTable};
pub use descriptors::{Descriptors, LargeMoleculeDescriptors};
pub use errors::MetricsError;
pub use metrics::{get_batch_descriptors, get_column_info, BatchDescriptorAggregator, BatchDescriptors, ChainCategory};
