//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and forecasting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons
//!
//! Every pipeline stage produces one of these and hands it to the next stage;
//! nothing here is mutated after creation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single observed production record: calendar date + non-negative rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub date: NaiveDate,
    pub rate: f64,
}

/// A parsed, time-ordered production series.
///
/// `time[i]` is the whole number of calendar months between the earliest
/// record's date and record `i`'s date (`year*12 + month` difference; the
/// day-of-month is ignored), so `time[0] == 0` and `time` is non-decreasing.
/// Records on the same month are kept as duplicates.
///
/// Invariant: `records`, `time` and `rates` always share one length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedProduction {
    pub records: Vec<ProductionRecord>,
    pub time: Vec<f64>,
    pub rates: Vec<f64>,
}

impl ParsedProduction {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the earliest record, if any.
    ///
    /// The parser never produces an empty series, but the fields are public,
    /// so consumers go through this accessor instead of indexing.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Month offset of the last observed record (the default forecast seed).
    pub fn last_month(&self) -> u32 {
        self.time.last().map(|t| *t as u32).unwrap_or(0)
    }
}

/// Which decline model(s) to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelSpec {
    /// Fit both models and select the better one.
    Auto,
    Exponential,
    Hyperbolic,
}

/// A fitted Arps decline model.
///
/// Closed sum type on purpose: callers must exhaustively handle exactly these
/// two shapes, and no further decline families are anticipated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeclineModel {
    /// `rate(t) = qi * exp(-di * t)`
    Exponential { qi: f64, di: f64 },
    /// `rate(t) = qi / (1 + b * di * t)^(1/b)`
    Hyperbolic { qi: f64, di: f64, b: f64 },
}

impl DeclineModel {
    /// Human-readable label for terminal and CSV output.
    pub fn display_name(self) -> &'static str {
        match self {
            DeclineModel::Exponential { .. } => "exponential",
            DeclineModel::Hyperbolic { .. } => "hyperbolic",
        }
    }

    pub fn qi(self) -> f64 {
        match self {
            DeclineModel::Exponential { qi, .. } | DeclineModel::Hyperbolic { qi, .. } => qi,
        }
    }

    pub fn di(self) -> f64 {
        match self {
            DeclineModel::Exponential { di, .. } | DeclineModel::Hyperbolic { di, .. } => di,
        }
    }

    /// The b-factor; `None` for the exponential model (its limiting case `b=0`).
    pub fn b(self) -> Option<f64> {
        match self {
            DeclineModel::Exponential { .. } => None,
            DeclineModel::Hyperbolic { b, .. } => Some(b),
        }
    }

    /// Parameter count for information criteria.
    pub fn param_count(self) -> usize {
        match self {
            DeclineModel::Exponential { .. } => 2,
            DeclineModel::Hyperbolic { .. } => 3,
        }
    }
}

/// Fit output for a single model.
///
/// `eur` is `None` when the estimated ultimate recovery is undefined (the
/// fitted decline rate is non-positive, so the rate never reaches the
/// economic limit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub model: DeclineModel,
    pub r_squared: f64,
    pub aic: f64,
    pub eur: Option<f64>,
}

/// A single forecast step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: u32,
    pub rate: f64,
    pub cumulative: f64,
}

/// A forward projection of the selected model.
///
/// The first point is the seed month with `cumulative = 0`; `cumulative` is
/// non-decreasing across the sequence and `eur_at_end` equals the last
/// point's cumulative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    pub points: Vec<ForecastPoint>,
    pub eur_at_end: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input_path: PathBuf,
    pub model_spec: ModelSpec,

    /// Forecast horizon in months (conventional presets: 12, 24, 60).
    pub forecast_months: u32,
    /// Minimum rate below which forecasting stops.
    pub economic_limit: f64,
    /// Forecast seed month; defaults to the last observed month.
    pub start_month: Option<u32>,

    pub export_results: Option<PathBuf>,
    pub export_forecast: Option<PathBuf>,
    pub export_model: Option<PathBuf>,
}

/// A saved fitted-model file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub first_date: NaiveDate,
    pub last_month: u32,
    pub fit: FitResult,
    pub grid: ModelGrid,
}

/// A precomputed fitted grid for quick plotting elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelGrid {
    pub months: Vec<u32>,
    pub rates: Vec<f64>,
}
