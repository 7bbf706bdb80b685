//! Error metrics for the pitch fusion simulation

/// Root-mean-square error between an estimate and its ground truth
///
/// Computes the square root of the mean squared difference across the full
/// sequences. Pure function with no side effects.
///
/// # Panics
/// Debug builds assert that both slices have the same length.
///
/// # Example
/// ```
/// use pitch_fusion_sim::rmse;
///
/// let truth = [0.0, 1.0, 2.0];
/// let estimate = [0.0, 1.0, 2.0];
/// assert_eq!(rmse(&estimate, &truth), 0.0);
/// ```
pub fn rmse(estimate: &[f32], truth: &[f32]) -> f32 {
    debug_assert_eq!(estimate.len(), truth.len());

    let mse: f32 = estimate
        .iter()
        .zip(truth)
        .map(|(&est, &actual)| {
            let error = est - actual;
            error * error
        })
        .sum::<f32>()
        / estimate.len() as f32;

    mse.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identical_sequences_give_zero() {
        let values = [1.0f32, -2.5, 3.75, 0.0];
        assert_eq!(rmse(&values, &values), 0.0);
    }

    #[test]
    fn test_constant_offset() {
        let truth = [0.0f32, 0.0, 0.0, 0.0];
        let estimate = [2.0f32, 2.0, 2.0, 2.0];
        assert!((rmse(&estimate, &truth) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_known_value() {
        // Errors of 3 and 4 over two samples: sqrt((9 + 16) / 2) = sqrt(12.5)
        let truth = [0.0f32, 0.0];
        let estimate = [3.0f32, 4.0];
        assert!((rmse(&estimate, &truth) - 12.5f32.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn test_sign_of_error_does_not_matter() {
        let truth = [0.0f32, 0.0];
        assert_eq!(rmse(&[1.0, -1.0], &truth), rmse(&[-1.0, 1.0], &truth));
    }
}
