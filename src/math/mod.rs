//! Small numerical helpers.
//!
//! Responsibilities:
//!
//! - solve the fixed-size 3×3 damped normal equations of the LM step
//! - goodness-of-fit statistics (R², AIC)

pub mod linalg;
pub mod stats;

pub use linalg::*;
pub use stats::*;
