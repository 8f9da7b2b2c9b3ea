use std::num::NonZeroUsize;

use crate::config::DEFAULT_LEARNING_RATE;
use crate::data::{InMemoryDataset, validate};
use crate::error::{FitError, Result};
use crate::model::ops::derivative_of_point;

/// Performs one batch gradient-descent step on the full dataset.
///
/// The update rule minimizes the mean squared error of `y = w·x + b`:
/// every point's bias derivative is computed once, tabulated, and reused for
/// every weight coordinate's gradient sum, so the residual of each point is
/// evaluated exactly once per step.
///
/// The inputs are left untouched; the updated `(bias, weights)` pair is
/// returned and the caller decides whether to overwrite its own state.
///
/// # Args
/// * `dataset` - Points of length `weights.len() + 1` (features + target).
/// * `weights` - Current weight vector; its length fixes the dimensionality.
/// * `bias` - Current intercept.
/// * `alpha` - Learning rate. Not validated; any positive value is accepted.
///
/// # Errors
/// Returns `FitError::ShapeMismatch` (stating the expected per-point length)
/// if any point's length differs from `weights.len() + 1`, and
/// `FitError::InvalidInput` if the dataset is empty. No update is performed
/// on failure.
pub fn gradient_descent(
    dataset: &InMemoryDataset,
    weights: &[f64],
    bias: f64,
    alpha: f64,
) -> Result<(f64, Vec<f64>)> {
    if !validate(dataset, weights.len()) {
        return Err(shape_error(dataset, weights.len()));
    }

    let n = NonZeroUsize::new(dataset.len())
        .ok_or(FitError::InvalidInput("dataset must contain at least one point"))?;

    // Single pass: tabulate each point's bias derivative and accumulate the
    // bias gradient. The tabulation is reused below for every coordinate.
    let mut tabulated = Vec::with_capacity(dataset.len());
    let mut bias_gradient = 0.0;

    for point in dataset.points() {
        let d = derivative_of_point(point, weights, bias, n, None)?;
        bias_gradient += d;
        tabulated.push(d);
    }

    let new_bias = bias - alpha * bias_gradient;

    // tabulated[i] holds residual_i / n, so multiplying by feature j and
    // summing reproduces the coordinate's MSE-gradient component.
    let mut new_weights = Vec::with_capacity(weights.len());
    for (j, w) in weights.iter().enumerate() {
        let gradient: f64 = tabulated
            .iter()
            .zip(dataset.points())
            .map(|(d, point)| d * point.features()[j])
            .sum();

        new_weights.push(w - alpha * gradient);
    }

    Ok((new_bias, new_weights))
}

fn shape_error(dataset: &InMemoryDataset, weight_len: usize) -> FitError {
    let expected = weight_len + 1;

    match dataset.points().iter().find(|p| p.len() != expected) {
        Some(point) => FitError::ShapeMismatch {
            what: "point",
            got: point.len(),
            expected,
        },
        None => FitError::InvalidInput("dataset must contain at least one point"),
    }
}

/// Batch gradient descent with a configured learning rate.
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Args
    /// * `learning_rate` - The length of the steps taken on each update.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Runs one update step; see [`gradient_descent`].
    ///
    /// # Errors
    /// Same contract as [`gradient_descent`].
    pub fn step(
        &self,
        dataset: &InMemoryDataset,
        weights: &[f64],
        bias: f64,
    ) -> Result<(f64, Vec<f64>)> {
        gradient_descent(dataset, weights, bias, self.learning_rate)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE)
    }
}
