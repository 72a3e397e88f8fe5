use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated iteration budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive,
    /// or if `max_iters` is zero.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance on consecutive-iterate displacement.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the step used by the central finite difference derivative.
    ///
    /// The step is one fifth of the tolerance, so tightening the tolerance
    /// also sharpens the approximated derivative.
    #[must_use]
    pub fn difference_step(&self) -> f64 {
        self.tolerance / 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_valid_values() {
        let config = Config::new(50, 1e-9).expect("valid config");

        assert_eq!(config.max_iters(), 50);
        assert_relative_eq!(config.tolerance(), 1e-9);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, -1e-6), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_zero_max_iters() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
    }

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.tolerance(), 1e-6);
    }

    #[test]
    fn difference_step_is_fifth_of_tolerance() {
        let config = Config::new(10, 5e-4).expect("valid config");

        assert_relative_eq!(config.difference_step(), 1e-4);
    }
}
