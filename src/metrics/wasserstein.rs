use crate::errors::ScaleError;

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_unstable_by(f64::total_cmp);
    v
}

/// First Wasserstein (earth mover's) distance between two 1-D empirical
/// distributions with equal weights.
///
/// Integrates the absolute difference of the two empirical CDFs over the
/// merged support.
///
/// * `u_values` - Observed values of the first distribution.
/// * `v_values` - Observed values of the second distribution.
pub fn wasserstein_distance(u_values: &[f64], v_values: &[f64]) -> Result<f64, ScaleError> {
    if u_values.is_empty() || v_values.is_empty() {
        return Err(ScaleError::Empty);
    }
    if u_values.iter().chain(v_values).any(|v| !v.is_finite()) {
        return Err(ScaleError::NonFinite);
    }
    let u = sorted(u_values);
    let v = sorted(v_values);
    let mut all_values: Vec<f64> = u.iter().chain(&v).copied().collect();
    all_values.sort_unstable_by(f64::total_cmp);

    let n_u = u.len() as f64;
    let n_v = v.len() as f64;
    let distance = all_values
        .windows(2)
        .map(|w| {
            let delta = w[1] - w[0];
            if delta == 0.0 {
                return 0.0;
            }
            let u_cdf = u.partition_point(|&x| x <= w[0]) as f64 / n_u;
            let v_cdf = v.partition_point(|&x| x <= w[0]) as f64 / n_v;
            (u_cdf - v_cdf).abs() * delta
        })
        .sum();
    Ok(distance)
}
