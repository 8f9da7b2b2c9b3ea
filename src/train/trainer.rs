use log::debug;

use crate::config::FitConfig;
use crate::data::InMemoryDataset;
use crate::error::Result;
use crate::loss::residual_sum_of_squares;
use crate::train::descent::GradientDescent;

/// Final state of a fitting run.
///
/// Fields are private so the internal counters can evolve without breaking
/// the public API.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    bias: f64,
    weights: Vec<f64>,
    rss: f64,
    epochs: usize,
}

impl FitOutcome {
    /// Returns the fitted intercept.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Returns the fitted weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the residual sum of squares of the fitted model.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Returns the number of epochs that were run.
    pub fn epochs(&self) -> usize {
        self.epochs
    }
}

/// Runs repeated gradient-descent steps, observing the loss between epochs.
///
/// The trainer is plain driver glue around the step: it threads the
/// `(weights, bias)` state through successive calls and reads the RSS
/// objective between them for logging. The objective never feeds back into
/// the update rule.
pub struct Trainer {
    descent: GradientDescent,
    epochs: usize,
}

impl Trainer {
    /// Creates a trainer from a fit configuration.
    pub fn new(cfg: FitConfig) -> Self {
        Self {
            descent: GradientDescent::new(cfg.learning_rate()),
            epochs: cfg.epochs(),
        }
    }

    /// Fits the model for the configured number of epochs.
    ///
    /// # Args
    /// * `dataset` - Training points.
    /// * `weights` - Initial weight vector.
    /// * `bias` - Initial intercept.
    ///
    /// # Returns
    /// The fitted parameters and the final RSS.
    ///
    /// # Errors
    /// Same shape contract as [`gradient_descent`](crate::gradient_descent);
    /// fails before the first update if the dataset does not match `weights`.
    pub fn fit(
        &self,
        dataset: &InMemoryDataset,
        weights: &[f64],
        bias: f64,
    ) -> Result<FitOutcome> {
        let mut weights = weights.to_vec();
        let mut bias = bias;

        for epoch in 0..self.epochs {
            let rss = residual_sum_of_squares(dataset, &weights, bias)?;
            debug!(epoch = epoch, rss = rss; "starting epoch");

            (bias, weights) = self.descent.step(dataset, &weights, bias)?;
        }

        let rss = residual_sum_of_squares(dataset, &weights, bias)?;
        debug!(epochs = self.epochs, rss = rss; "fit finished");

        Ok(FitOutcome {
            bias,
            weights,
            rss,
            epochs: self.epochs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::train::descent::gradient_descent;

    fn line_dataset() -> InMemoryDataset {
        // y = 2x + 1, exactly
        InMemoryDataset::from_rows(vec![
            vec![1.0, 3.0],
            vec![2.0, 5.0],
            vec![3.0, 7.0],
            vec![4.0, 9.0],
        ])
    }

    #[test]
    fn fit_matches_manual_step_loop() {
        let ds = line_dataset();
        let cfg = FitConfig::new(0.01, NonZeroUsize::new(5).unwrap());
        let outcome = Trainer::new(cfg).fit(&ds, &[0.0], 0.0).unwrap();

        let (mut b, mut w) = (0.0, vec![0.0]);
        for _ in 0..5 {
            (b, w) = gradient_descent(&ds, &w, b, 0.01).unwrap();
        }

        assert_eq!(outcome.bias(), b);
        assert_eq!(outcome.weights(), &w[..]);
        assert_eq!(outcome.epochs(), 5);
    }

    #[test]
    fn fit_reduces_rss() {
        let ds = line_dataset();
        let initial = residual_sum_of_squares(&ds, &[0.0], 0.0).unwrap();

        let cfg = FitConfig::new(0.01, NonZeroUsize::new(100).unwrap());
        let outcome = Trainer::new(cfg).fit(&ds, &[0.0], 0.0).unwrap();

        assert!(outcome.rss() < initial);
    }

    #[test]
    fn fit_propagates_shape_errors_without_updating() {
        let ds = line_dataset();
        let cfg = FitConfig::new(0.01, NonZeroUsize::new(5).unwrap());
        let weights = vec![0.0, 0.0];

        assert!(Trainer::new(cfg).fit(&ds, &weights, 0.0).is_err());
        assert_eq!(weights, vec![0.0, 0.0]);
    }
}
