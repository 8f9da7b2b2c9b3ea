use std::num::NonZeroUsize;

/// Learning rate used when the caller does not tune one.
pub const DEFAULT_LEARNING_RATE: f64 = 1e-4;

/// Epochs run by a default-configured [`FitConfig`].
pub const DEFAULT_EPOCHS: usize = 1000;

/// Returns a learning rate that has worked well for datasets of the given
/// feature dimensionality.
///
/// These are tuning starting points, not a correctness requirement: any
/// positive rate is accepted by the descent step.
pub fn default_learning_rate(num_features: usize) -> f64 {
    if num_features <= 1 { 1e-4 } else { 5e-5 }
}

/// Immutable execution bounds for a fitting run.
///
/// The learning rate is deliberately not validated here: a non-positive or
/// oversized rate is a caller error, and the descent step accepts whatever it
/// is handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    learning_rate: f64,
    epochs: NonZeroUsize,
}

impl FitConfig {
    /// Creates a new fit configuration.
    ///
    /// # Args
    /// * `learning_rate` - Step size used by each parameter update.
    /// * `epochs` - Number of gradient-descent steps to run.
    pub fn new(learning_rate: f64, epochs: NonZeroUsize) -> Self {
        Self {
            learning_rate,
            epochs,
        }
    }

    /// Returns the configured learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the total number of epochs to run.
    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: NonZeroUsize::new(DEFAULT_EPOCHS).expect("DEFAULT_EPOCHS is nonzero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_documented_values() {
        let cfg = FitConfig::default();
        assert_eq!(cfg.learning_rate(), DEFAULT_LEARNING_RATE);
        assert_eq!(cfg.epochs(), DEFAULT_EPOCHS);
    }

    #[test]
    fn default_rate_shrinks_with_dimensionality() {
        assert_eq!(default_learning_rate(1), 1e-4);
        assert_eq!(default_learning_rate(2), 5e-5);
        assert_eq!(default_learning_rate(3), 5e-5);
    }
}
