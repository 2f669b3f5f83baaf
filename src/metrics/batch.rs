use crate::config::AggregatorConfig;
use crate::data::DescriptorTable;
use crate::errors::{MetricsError, ScaleError};
use crate::metrics::column_info::{get_column_info, ChainCategory};
use crate::metrics::events::{LogEventSink, MetricEvent, MetricEventSink};
use crate::metrics::scaling::minmax_scale;
use crate::metrics::wasserstein::wasserstein_distance;
use hashbrown::HashMap;
use log::{debug, info};
use rayon::prelude::*;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};

/// Wasserstein distance of a single feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDistance {
    /// Feature column name.
    pub column: String,
    /// Output key, the column name with the distance suffix.
    pub key: String,
    /// Distance, positive infinity for a degenerate feature.
    pub distance: f64,
}

/// Per-feature distances in sorted feature column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDistances(Vec<FeatureDistance>);

impl FeatureDistances {
    /// Distance stored under an output key, such as `fv_heavy_gravy_wd`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|d| d.key == key).map(|d| d.distance)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|d| d.key.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureDistance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Features whose distance could not be computed.
    pub fn degenerate(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|d| d.distance.is_infinite())
            .map(|d| d.column.as_str())
            .collect()
    }

    /// Distances keyed by output key.
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.0.iter().map(|d| (d.key.clone(), d.distance)).collect()
    }
}

/// Aggregate statistics of a batch of designs compared to a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDescriptors {
    /// Wasserstein distance per feature column.
    pub distances: FeatureDistances,
    /// Total distance divided by the number of feature columns.
    pub average_distance: f64,
    /// Sum of all feature distances.
    pub total_distance: f64,
    /// Proportion of designs with a non-missing sample value.
    pub valid_proportion: f64,
}

/// Compare normalized distributions of one feature.
fn feature_distance(valid: &[f64], valid_ref: &[f64]) -> Result<f64, ScaleError> {
    let normed = minmax_scale(valid)?;
    let normed_ref = minmax_scale(valid_ref)?;
    wasserstein_distance(&normed, &normed_ref)
}

fn numeric_values(table: &DescriptorTable, column: &str, table_name: &str) -> Result<Vec<f64>, MetricsError> {
    match table.column(column) {
        Some(c) => c
            .present_values()
            .ok_or_else(|| MetricsError::ColumnType(column.to_string())),
        // An empty table may be built without any columns.
        None if table.is_empty() => Ok(Vec::new()),
        None => Err(MetricsError::MissingColumn(column.to_string(), table_name.to_string())),
    }
}

/// Computes per-feature Wasserstein distances between a batch of designs and a
/// reference population.
#[derive(Debug)]
pub struct BatchDescriptorAggregator {
    config: AggregatorConfig,
    pool: Option<ThreadPool>,
}

impl BatchDescriptorAggregator {
    /// Create an aggregator, building a dedicated thread pool when
    /// `num_threads` is set.
    pub fn new(config: AggregatorConfig) -> Result<Self, MetricsError> {
        let pool = match config.num_threads {
            Some(n) if config.parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| MetricsError::ThreadPool(e.to_string()))?,
            ),
            _ => None,
        };
        Ok(BatchDescriptorAggregator { config, pool })
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Compute aggregate statistics for a batch of samples compared to a reference.
    ///
    /// Missing values are dropped from each side independently, then each side
    /// is min-max scaled by its own range before the distance is computed. A
    /// feature that cannot be compared gets an infinite distance.
    ///
    /// * `batch` - Descriptors of the generated designs.
    /// * `reference` - Pre-computed reference descriptors.
    /// * `chain` - Type of input molecule.
    /// * `sink` - Receives recoverable conditions, such as an empty batch.
    pub fn aggregate(
        &self,
        batch: &DescriptorTable,
        reference: &DescriptorTable,
        chain: ChainCategory,
        sink: &dyn MetricEventSink,
    ) -> Result<BatchDescriptors, MetricsError> {
        let info = get_column_info(chain);

        let valid_proportion = if batch.is_empty() {
            sink.emit(MetricEvent::NoValidDesigns);
            0.0
        } else {
            let sample = batch
                .column(info.sample_column())
                .ok_or_else(|| MetricsError::MissingColumn(info.sample_column().to_string(), "batch".to_string()))?;
            sample.count_present() as f64 / batch.n_rows() as f64
        };

        let mut columns = Vec::with_capacity(info.feature_columns().len());
        for column in info.feature_columns() {
            let valid = numeric_values(batch, column, "batch")?;
            let valid_ref = numeric_values(reference, column, "reference")?;
            columns.push((column, valid, valid_ref));
        }

        let results: Vec<Result<f64, ScaleError>> = if self.config.parallel {
            let compute = || {
                columns
                    .par_iter()
                    .map(|(_, valid, valid_ref)| feature_distance(valid, valid_ref))
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(compute),
                None => compute(),
            }
        } else {
            columns
                .iter()
                .map(|(_, valid, valid_ref)| feature_distance(valid, valid_ref))
                .collect()
        };

        let mut distances = Vec::with_capacity(columns.len());
        for ((column, _, _), result) in columns.iter().zip(results) {
            let distance = match result {
                Ok(d) => d,
                Err(reason) => {
                    sink.emit(MetricEvent::DegenerateFeature {
                        column: column.to_string(),
                        reason,
                    });
                    f64::INFINITY
                }
            };
            debug!("{}: {}", column, distance);
            distances.push(FeatureDistance {
                column: column.to_string(),
                key: format!("{}{}", column, self.config.distance_suffix),
                distance,
            });
        }

        let total_distance: f64 = distances.iter().map(|d| d.distance).sum();
        let average_distance = total_distance / info.feature_columns().len() as f64;
        info!(
            "{} batch of {} designs, valid proportion {:.4}, average distance {:.4}, total distance {:.4}",
            chain,
            batch.n_rows(),
            valid_proportion,
            average_distance,
            total_distance
        );

        Ok(BatchDescriptors {
            distances: FeatureDistances(distances),
            average_distance,
            total_distance,
            valid_proportion,
        })
    }
}

/// Compute aggregate statistics with the default configuration, logging
/// recoverable conditions as warnings.
pub fn get_batch_descriptors(
    batch: &DescriptorTable,
    reference: &DescriptorTable,
    chain: ChainCategory,
) -> Result<BatchDescriptors, MetricsError> {
    BatchDescriptorAggregator::new(AggregatorConfig::default())?.aggregate(batch, reference, chain, &LogEventSink)
}
