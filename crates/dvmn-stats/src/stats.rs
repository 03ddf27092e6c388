//! Module Aggregator
//!
//! Descriptive statistics over first-review durations: per-module mean and
//! median, plus a global summary.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::{HistorySummary, ModuleStats, ReviewDuration};

/// No lesson produced a first-review duration.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no completed first reviews in history")]
pub struct EmptyHistoryError;

/// Per-module mean and median, modules in lexical order.
pub fn build_module_stats(durations: &[ReviewDuration]) -> Vec<ModuleStats> {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for duration in durations {
        grouped
            .entry(duration.key.module.as_str())
            .or_default()
            .push(duration.hours);
    }

    grouped
        .into_iter()
        .map(|(module, hours)| ModuleStats {
            module: module.to_string(),
            mean_hours: mean(&hours),
            median_hours: median(hours),
        })
        .collect()
}

/// Global summary across all durations.
///
/// An empty input is a user-visible "no data" condition, not a crash.
pub fn summarize(durations: &[ReviewDuration]) -> Result<HistorySummary, EmptyHistoryError> {
    if durations.is_empty() {
        return Err(EmptyHistoryError);
    }

    let mut shortest = &durations[0];
    let mut longest = &durations[0];
    for duration in durations {
        if duration.hours < shortest.hours {
            shortest = duration;
        }
        if duration.hours > longest.hours {
            longest = duration;
        }
    }

    let hours: Vec<f64> = durations.iter().map(|duration| duration.hours).collect();

    Ok(HistorySummary {
        total: durations.len(),
        shortest: shortest.clone(),
        longest: longest.clone(),
        mean_hours: mean(&hours),
        median_hours: median(hours),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
