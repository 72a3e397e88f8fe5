use crate::Observer;

use super::{Config, Event, Root, derivative::Derivative};

/// A configured Newton-Raphson solver for a scalar target function.
///
/// A `RootFinder` is immutable once constructed: solving mutates only a
/// local iterate, so repeated [`solve`](Self::solve) calls on the same
/// instance yield identical results.
#[derive(Debug, Clone, Copy)]
pub struct RootFinder<F, D> {
    target: F,
    derivative: Derivative<D>,
    initial_guess: f64,
    config: Config,
}

impl<F> RootFinder<F, fn(f64) -> f64>
where
    F: Fn(f64) -> f64,
{
    /// Creates a solver that approximates the derivative with a central
    /// finite difference.
    ///
    /// The difference step is tied to the configured tolerance
    /// (see [`Config::difference_step`]), and each derivative evaluation
    /// costs two extra target evaluations.
    pub fn central_difference(target: F, initial_guess: f64, config: Config) -> Self {
        let step = config.difference_step();
        Self {
            target,
            derivative: Derivative::CentralDifference { step },
            initial_guess,
            config,
        }
    }
}

impl<F, D> RootFinder<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a solver with a caller-supplied analytic derivative.
    pub fn new(target: F, derivative: D, initial_guess: f64, config: Config) -> Self {
        Self {
            target,
            derivative: Derivative::Analytic(derivative),
            initial_guess,
            config,
        }
    }

    /// Runs the iteration until the displacement between consecutive
    /// iterates drops below the tolerance.
    ///
    /// Returns `None` if the iteration budget is spent without converging.
    /// A zero derivative is not trapped: the resulting non-finite iterate
    /// propagates and fails every subsequent displacement test, so the
    /// solver exhausts its budget and returns `None`.
    pub fn solve(&self) -> Option<Root> {
        self.solve_observed(())
    }

    /// Runs the iteration, reporting each step to the observer.
    ///
    /// One [`Event`] is emitted per iteration, before the convergence
    /// test. See the [module docs](super) for details on event timing.
    pub fn solve_observed<Obs>(&self, mut observer: Obs) -> Option<Root>
    where
        Obs: Observer<Event>,
    {
        let mut x = self.initial_guess;

        for iter in 1..=self.config.max_iters() {
            let y = (self.target)(x);
            let dy = self.derivative.eval(&self.target, x);
            let next_x = x - y / dy;

            observer.observe(&Event {
                iter,
                x,
                y,
                dy,
                next_x,
            });

            if (x - next_x).abs() < self.config.tolerance() {
                return Some(Root {
                    x: next_x,
                    iters: iter,
                });
            }

            x = next_x;
        }

        None
    }
}
