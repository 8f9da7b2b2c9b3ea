use crate::data::InMemoryDataset;
use crate::error::{FitError, Result};
use crate::model::ops::point_square_error;

/// Residual sum of squares: total squared error of the model over a dataset.
///
/// Strictly observational - the descent step never consults it. Callers use
/// it to log a convergence curve between epochs.
///
/// # Errors
/// Returns `FitError::ShapeMismatch` if any point does not match `weights`.
pub fn residual_sum_of_squares(
    dataset: &InMemoryDataset,
    weights: &[f64],
    bias: f64,
) -> Result<f64> {
    dataset
        .points()
        .iter()
        .try_fold(0.0, |acc, point| Ok(acc + point_square_error(point, weights, bias)?))
}

/// Mean squared error: RSS averaged over the dataset.
///
/// # Errors
/// Returns `FitError::InvalidInput` on an empty dataset, and
/// `FitError::ShapeMismatch` if any point does not match `weights`.
pub fn mean_squared_error(dataset: &InMemoryDataset, weights: &[f64], bias: f64) -> Result<f64> {
    if dataset.is_empty() {
        return Err(FitError::InvalidInput(
            "dataset must contain at least one point",
        ));
    }

    Ok(residual_sum_of_squares(dataset, weights, bias)? / dataset.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_dataset() -> InMemoryDataset {
        InMemoryDataset::from_rows(vec![
            vec![0.022, 0.12, 0.01],
            vec![0.859, 4.963, 1.548],
            vec![13.324, 2.714, 19.352],
            vec![17.454, 26.582, 1.066],
            vec![10.907, 1.249, 34.12],
            vec![22.627, 36.543, 18.503],
            vec![26.145, 9.041, 34.738],
            vec![26.848, 36.133, 37.874],
            vec![31.201, 18.57, 33.332],
            vec![73.594, 44.598, 81.683],
            vec![82.6, 3.817, 91.421],
        ])
    }

    #[test]
    fn rss_of_zero_model_on_reference_dataset() {
        let rss = residual_sum_of_squares(&reference_dataset(), &[0.0, 0.0], 0.0).unwrap();
        assert!((rss - 20666.670547).abs() < 1e-6);
    }

    #[test]
    fn rss_is_zero_for_perfect_model() {
        // y = 2x + 1
        let ds = InMemoryDataset::from_rows(vec![
            vec![1.0, 3.0],
            vec![2.0, 5.0],
            vec![3.0, 7.0],
        ]);
        let rss = residual_sum_of_squares(&ds, &[2.0], 1.0).unwrap();
        assert_eq!(rss, 0.0);
    }

    #[test]
    fn rss_of_empty_dataset_is_zero() {
        let rss = residual_sum_of_squares(&InMemoryDataset::default(), &[0.0], 0.0).unwrap();
        assert_eq!(rss, 0.0);
    }

    #[test]
    fn mse_averages_rss() {
        let ds = reference_dataset();
        let rss = residual_sum_of_squares(&ds, &[0.0, 0.0], 0.0).unwrap();
        let mse = mean_squared_error(&ds, &[0.0, 0.0], 0.0).unwrap();
        assert!((mse - rss / 11.0).abs() < 1e-9);
    }

    #[test]
    fn mse_rejects_empty_dataset() {
        let err = mean_squared_error(&InMemoryDataset::default(), &[0.0], 0.0).unwrap_err();
        assert_eq!(
            err,
            FitError::InvalidInput("dataset must contain at least one point")
        );
    }

    #[test]
    fn rss_rejects_mismatched_weights() {
        assert!(residual_sum_of_squares(&reference_dataset(), &[0.0], 0.0).is_err());
    }
}
