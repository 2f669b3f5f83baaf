/// Suffix appended to a feature column name to key its Wasserstein distance.
pub const DISTANCE_SUFFIX: &str = "_wd";
/// Suffix of the per-chain sample (aligned sequence) column.
pub const SAMPLE_COLUMN_SUFFIX: &str = "_aho";
/// Figure shape hint (rows, columns) for large molecule descriptor plots.
pub const LARGE_MOL_FIGSHAPE: (usize, usize) = (3, 5);
pub const NO_VALID_DESIGNS_WARNING: &str = "There were no valid designs.";
/// Ranges below this are treated as zero when min-max scaling.
pub const ZERO_RANGE_EPS: f64 = 10.0 * f64::EPSILON;
