//! Math kernels for the linear model.

use std::num::NonZeroUsize;

use crate::data::Point;
use crate::error::{FitError, Result};
use crate::model::view::LinearModelView;

/// Computes the dot product of two equal-length sequences.
///
/// Consumption is strictly pairwise: mismatched lengths fail instead of
/// silently truncating to the shorter operand.
///
/// # Errors
/// Returns `FitError::ShapeMismatch` if the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(FitError::ShapeMismatch {
            what: "dot operands",
            got: b.len(),
            expected: a.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Squared prediction error of one point: `(b + w·x - target)^2`.
///
/// Always non-negative; zero exactly when the prediction equals the target.
///
/// # Errors
/// Returns `FitError::ShapeMismatch` if the point's feature count does not
/// match `weights`.
pub fn point_square_error(point: &Point, weights: &[f64], bias: f64) -> Result<f64> {
    let residual = LinearModelView::new(weights, bias).residual(point)?;
    Ok(residual * residual)
}

/// Per-point contribution to the mean-squared-error gradient.
///
/// `coord` selects the parameter: `None` is the bias, `Some(j)` is weight
/// coordinate `j`. Both cases share one formula - `residual * scale / n` -
/// where `scale` is `1` for the bias and `features[j]` otherwise, so the two
/// selectors cannot drift apart.
///
/// Summed over every point of a dataset of size `dataset_size`, this yields
/// the full gradient component for the selected parameter. Plain
/// floating-point accumulation; no compensated summation.
///
/// # Errors
/// Returns `FitError::ShapeMismatch` if the point does not match `weights`, or
/// if `coord` is out of range for the point's features.
pub fn derivative_of_point(
    point: &Point,
    weights: &[f64],
    bias: f64,
    dataset_size: NonZeroUsize,
    coord: Option<usize>,
) -> Result<f64> {
    let residual = LinearModelView::new(weights, bias).residual(point)?;

    let scale = match coord {
        None => 1.0,
        Some(j) if j < point.dim() => point.features()[j],
        Some(j) => {
            return Err(FitError::ShapeMismatch {
                what: "weight coordinate",
                got: j,
                expected: point.dim(),
            });
        }
    };

    Ok(residual * scale / dataset_size.get() as f64)
}
