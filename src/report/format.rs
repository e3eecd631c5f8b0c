//! Formatted terminal output for a fit run.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::FitResult;

/// Format the full run summary (dataset stats + fit diagnostics + forecast).
pub fn format_summary(out: &RunOutput) -> String {
    let mut s = String::new();

    s.push_str("=== dca - Arps Decline-Curve Fit ===\n");
    s.push_str(&format!(
        "Data: n={} | first={} | months=[0, {}]\n",
        out.parsed.len(),
        out.parsed
            .first_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        out.parsed.last_month(),
    ));
    let (q_min, q_max) = rate_range(&out.parsed.rates);
    s.push_str(&format!("Rates: [{q_min:.2}, {q_max:.2}]\n"));

    s.push_str("\nModel diagnostics:\n");
    match &out.selection {
        Some(selection) => {
            for fit in [&selection.exponential, &selection.hyperbolic] {
                let chosen = if fit.model.display_name() == out.fit.model.display_name() {
                    "*"
                } else {
                    " "
                };
                s.push_str(&format_diagnostic_line(chosen, fit));
            }
        }
        None => {
            s.push_str(&format_diagnostic_line("*", &out.fit));
            s.push_str("  (selection skipped: model forced)\n");
        }
    }

    s.push_str("\nChosen model:\n");
    s.push_str(&format!("- type: {}\n", out.fit.model.display_name()));
    s.push_str(&format!("- qi  : {:.2}\n", out.fit.model.qi()));
    s.push_str(&format!("- Di  : {:.4} /month\n", out.fit.model.di()));
    if let Some(b) = out.fit.model.b() {
        s.push_str(&format!("- b   : {b:.4}\n"));
    }
    s.push_str(&format!("- EUR : {}\n", fmt_eur(out.fit.eur)));

    let points = &out.forecast.points;
    s.push_str("\nForecast:\n");
    s.push_str(&format!(
        "- months {}..{} ({} points)\n",
        points.first().map(|p| p.month).unwrap_or(0),
        points.last().map(|p| p.month).unwrap_or(0),
        points.len(),
    ));
    s.push_str(&format!("- cumulative at end: {:.2}\n", out.forecast.eur_at_end));
    s.push('\n');

    s
}

fn format_diagnostic_line(chosen: &str, fit: &FitResult) -> String {
    format!(
        "{chosen} {:<12} R²={:.4} AIC={:.2} EUR={}\n",
        fit.model.display_name(),
        fit.r_squared,
        fit.aic,
        fmt_eur(fit.eur),
    )
}

fn fmt_eur(eur: Option<f64>) -> String {
    match eur {
        Some(v) if v.is_finite() => format!("{v:.1}"),
        _ => "N/A".to_string(),
    }
}

fn rate_range(rates: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &r in rates {
        min = min.min(r);
        max = max.max(r);
    }
    (min, max)
}
