//! Error type shared across the engine and the CLI.
//!
//! Every failure carries a human-readable message and maps to a stable process
//! exit code:
//!
//! - 2: I/O or usage problems (bad paths, unwritable exports)
//! - 3: data problems (nothing parsed, too few usable points)
//! - 4: numerical problems (degenerate regression input)
//!
//! Numerical non-convergence inside the Levenberg–Marquardt loop is *not* an
//! error; the fitter accepts its best-so-far parameters instead (see
//! `fit::hyperbolic`).

#[derive(Clone)]
pub enum AppError {
    /// File or usage failure (exit 2).
    Io(String),
    /// No valid records survived parsing (exit 3).
    Parse(String),
    /// Fewer usable positive-rate points than the fit requires (exit 3).
    InsufficientData(String),
    /// Regression input with zero time-variance (exit 4).
    DegenerateData(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 2,
            AppError::Parse(_) | AppError::InsufficientData(_) => 3,
            AppError::DegenerateData(_) => 4,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Io(m)
            | AppError::Parse(m)
            | AppError::InsufficientData(m)
            | AppError::DegenerateData(m) => m,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            AppError::Io(_) => "Io",
            AppError::Parse(_) => "Parse",
            AppError::InsufficientData(_) => "InsufficientData",
            AppError::DegenerateData(_) => "DegenerateData",
        };
        f.debug_struct("AppError")
            .field("kind", &kind)
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for AppError {}
