//! Numeric column statistics
//!
//! Reproduces the five-number-plus-mean summary of the usual dataframe
//! describe() routines: count, mean, sample standard deviation, min,
//! quartiles by linear interpolation, max. Only numeric columns appear in
//! the output.

use std::collections::BTreeMap;

use datalens_core::models::ColumnStats;

/// Compute per-column statistics for the numeric columns.
pub(crate) fn describe(
    columns: &[String],
    column_values: &[Vec<String>],
) -> BTreeMap<String, ColumnStats> {
    let mut summary = BTreeMap::new();
    for (name, values) in columns.iter().zip(column_values) {
        if let Some(numeric) = numeric_column(values) {
            summary.insert(name.clone(), column_stats(&numeric));
        }
    }
    summary
}

/// A column is numeric when every non-empty cell parses as a float and at
/// least one cell is non-empty. Blank cells count as missing, not as zero.
fn numeric_column(values: &[String]) -> Option<Vec<f64>> {
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => parsed.push(number),
            Err(_) => return None,
        }
    }
    if parsed.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

fn column_stats(values: &[f64]) -> ColumnStats {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    // Sample standard deviation (ddof = 1); undefined for a single value.
    let std = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    ColumnStats {
        count,
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Quantile by linear interpolation between closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
