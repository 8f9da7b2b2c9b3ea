pub mod descent;
pub mod trainer;

pub use descent::{GradientDescent, gradient_descent};
pub use trainer::{FitOutcome, Trainer};
