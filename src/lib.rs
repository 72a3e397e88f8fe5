//! Root finding for scalar functions.
//!
//! This crate finds zeros of differentiable functions `f: f64 -> f64`.
//! It defines a small set of shared abstractions and one solver:
//!
//! - [`Observer`] — receives solver events as iteration progresses
//! - [`newton_raphson`] — the Newton-Raphson iteration, with an analytic
//!   or finite-difference derivative
//!
//! # Example
//!
//! ```
//! use rootfinder::newton_raphson::{Config, RootFinder};
//!
//! let solver = RootFinder::new(
//!     |x| x * x - 4.0,
//!     |x| 2.0 * x,
//!     1.0,
//!     Config::default(),
//! );
//!
//! let root = solver.solve().expect("should converge");
//! assert!((root.x - 2.0).abs() < 1e-6);
//! ```

mod observer;

pub use observer::Observer;

pub mod newton_raphson;
