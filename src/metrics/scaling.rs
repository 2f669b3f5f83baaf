use crate::constants::ZERO_RANGE_EPS;
use crate::errors::ScaleError;

/// Scale values into [0, 1] by their own minimum and maximum.
///
/// A (near) zero range is replaced by one, so a constant column scales to
/// all zeros.
///
/// * `values` - Values to scale, without missing entries.
pub fn minmax_scale(values: &[f64]) -> Result<Vec<f64>, ScaleError> {
    if values.is_empty() {
        return Err(ScaleError::Empty);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ScaleError::NonFinite);
    }
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    let scale = if range < ZERO_RANGE_EPS { 1.0 } else { range };
    Ok(values.iter().map(|v| (v - min) / scale).collect())
}
