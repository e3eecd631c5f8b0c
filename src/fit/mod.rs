//! Decline-curve fitting and model selection.
//!
//! Responsibilities:
//!
//! - closed-form log-linear exponential fit
//! - Levenberg–Marquardt hyperbolic fit (seeded from the exponential fit)
//! - selection of the better model by R² with a simplicity margin

pub mod exponential;
pub mod hyperbolic;
pub mod selection;

pub use exponential::*;
pub use hyperbolic::*;
pub use selection::*;
