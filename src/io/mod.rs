//! Input/output: text ingest, CSV export, saved-model JSON.

pub mod curve;
pub mod export;
pub mod parse;
