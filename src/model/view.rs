use crate::data::Point;
use crate::error::Result;
use crate::model::ops;

/// A read-only view over linear-model parameters.
///
/// The view *does not own* the weights; it pairs a caller-held weight slice
/// with a bias so that prediction and residual share one definition.
#[derive(Debug, Clone, Copy)]
pub struct LinearModelView<'a> {
    weights: &'a [f64],
    bias: f64,
}

impl<'a> LinearModelView<'a> {
    pub fn new(weights: &'a [f64], bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Number of features this model consumes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// y = w·x + b
    ///
    /// # Errors
    /// Returns `FitError::ShapeMismatch` if `features` does not match the
    /// weight vector's length.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        Ok(ops::dot(self.weights, features)? + self.bias)
    }

    /// Prediction minus target for one point.
    ///
    /// Every derivative and error kernel in this crate goes through this
    /// single residual definition.
    pub fn residual(&self, point: &Point) -> Result<f64> {
        Ok(self.predict(point.features())? - point.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_affine_combination() {
        let weights = [2.0, -1.0];
        let view = LinearModelView::new(&weights, 0.5);
        let y = view.predict(&[3.0, 4.0]).unwrap();
        assert!((y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn residual_subtracts_target() {
        let weights = [2.0];
        let view = LinearModelView::new(&weights, 1.0);
        let p = Point::new(vec![3.0, 10.0]);
        let r = view.residual(&p).unwrap();
        assert!((r - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn predict_rejects_wrong_feature_count() {
        let weights = [1.0, 2.0];
        let view = LinearModelView::new(&weights, 0.0);
        assert!(view.predict(&[1.0]).is_err());
    }
}
