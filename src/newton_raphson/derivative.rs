/// Derivative strategy for the Newton-Raphson update.
#[derive(Debug, Clone, Copy)]
pub(super) enum Derivative<D> {
    /// Caller-supplied analytic derivative.
    Analytic(D),

    /// Central finite difference over the target:
    /// `(f(x + h) - f(x - h)) / (2h)`.
    CentralDifference { step: f64 },
}

impl<D> Derivative<D>
where
    D: Fn(f64) -> f64,
{
    /// Evaluates the derivative at `x`.
    ///
    /// The central difference variant evaluates the target twice.
    pub(super) fn eval<F>(&self, target: &F, x: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Analytic(derivative) => derivative(x),
            Self::CentralDifference { step } => {
                (target(x + step) - target(x - step)) / (2.0 * step)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) - 2.0 * x
    }

    fn cubic_derivative(x: f64) -> f64 {
        3.0 * x.powi(2) - 2.0
    }

    #[test]
    fn analytic_passes_through() {
        let derivative = Derivative::Analytic(cubic_derivative);

        assert_relative_eq!(derivative.eval(&cubic, 2.0), 10.0);
    }

    #[test]
    fn central_difference_matches_analytic() {
        let derivative: Derivative<fn(f64) -> f64> =
            Derivative::CentralDifference { step: 1e-5 };

        // Central differences are second order: the error on a cubic is
        // exactly step^2 times the third-derivative term.
        assert_relative_eq!(
            derivative.eval(&cubic, 2.0),
            cubic_derivative(2.0),
            epsilon = 1e-8
        );
    }

    #[test]
    fn central_difference_is_exact_on_quadratics() {
        let derivative: Derivative<fn(f64) -> f64> =
            Derivative::CentralDifference { step: 1e-3 };
        let quadratic = |x: f64| x * x - 4.0;

        assert_relative_eq!(derivative.eval(&quadratic, 3.0), 6.0, epsilon = 1e-9);
    }
}
