//! Metrics
//!
//! Batch level comparison of generated designs against a reference population.
//! For each descriptor column of a chain category, both sides are min-max
//! scaled independently and compared with the 1-D Wasserstein distance.
pub mod batch;
pub mod column_info;
pub mod events;
pub mod scaling;
pub mod wasserstein;

pub use batch::{get_batch_descriptors, BatchDescriptorAggregator, BatchDescriptors, FeatureDistance, FeatureDistances};
pub use column_info::{get_column_info, ChainCategory, ColumnInfo};
pub use events::{CollectingEventSink, LogEventSink, MetricEvent, MetricEventSink};
pub use scaling::minmax_scale;
pub use wasserstein::wasserstein_distance;
