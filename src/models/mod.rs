//! Arps decline-model evaluation.

pub mod model;

pub use model::*;
