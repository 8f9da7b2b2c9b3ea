//! Multivariate linear-regression fitting by batch gradient descent.
//!
//! The caller owns the `(weights, bias)` state and threads it through
//! successive calls; every operation here is a pure function over immutable
//! inputs and retains nothing between calls.

pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod model;
pub mod train;

pub use config::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, FitConfig, default_learning_rate};
pub use data::{InMemoryDataset, Point, validate};
pub use error::{FitError, Result};
pub use loss::{mean_squared_error, residual_sum_of_squares};
pub use model::{LinearModelView, derivative_of_point, dot, point_square_error};
pub use train::{FitOutcome, GradientDescent, Trainer, gradient_descent};
