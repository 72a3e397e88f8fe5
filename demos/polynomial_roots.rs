//! Finds the real roots of a quartic polynomial, first without an analytic
//! derivative and then with one.
//!
//! The initial guesses are chosen near the roots; Newton-Raphson performs
//! no bracketing, so a guess far from any root may not converge.

use rootfinder::newton_raphson::{Config, ConfigError, Root, RootFinder};

/// f(x) = -2x⁴ - 8x³ + 2x² + 3x
fn f(x: f64) -> f64 {
    -2.0 * x.powi(4) - 8.0 * x.powi(3) + 2.0 * x.powi(2) + 3.0 * x
}

/// f'(x) = -8x³ - 24x² + 4x + 3
fn df(x: f64) -> f64 {
    -8.0 * x.powi(3) - 24.0 * x.powi(2) + 4.0 * x + 3.0
}

const GUESSES: [f64; 4] = [-5.0, -1.0, 0.0, 1.0];

fn main() -> Result<(), ConfigError> {
    println!("Roots with a central difference derivative:");
    let config = Config::new(100, 5e-4)?;
    for guess in GUESSES {
        report(guess, RootFinder::central_difference(f, guess, config).solve());
    }

    println!("\nRoots with the analytic derivative:");
    let config = Config::new(100, 5e-5)?;
    for guess in GUESSES {
        report(guess, RootFinder::new(f, df, guess, config).solve());
    }

    Ok(())
}

fn report(guess: f64, result: Option<Root>) {
    match result {
        Some(root) => println!("  x0 = {guess:>4}  ->  x = {:<12.8}  ({} iterations)", root.x, root.iters),
        None => println!("  x0 = {guess:>4}  ->  no root found"),
    }
}
