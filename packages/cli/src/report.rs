//! Terminal summary and CSV report for computed review durations.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use dvmn_stats::{HistorySummary, ModuleStats, ReviewDuration};

/// CSV row shape: composite lesson label plus first-review hours.
#[derive(Debug, Serialize)]
struct CsvRecord {
    lesson: String,
    review_time: f64,
}

/// Prints the summary lines in the wording of the original report.
pub fn print_summary(
    out: &mut impl Write,
    summary: &HistorySummary,
    modules: &[ModuleStats],
) -> std::io::Result<()> {
    writeln!(out, "Всего первых проверок: {}", summary.total)?;
    writeln!(out, "Минимальное время проверки: {}", summary.shortest)?;
    writeln!(out, "Максимальное время проверки: {}", summary.longest)?;
    writeln!(out, "Среднее время проверки: {:.2} ч.", summary.mean_hours)?;
    writeln!(out, "Медианное время проверки: {:.2} ч.", summary.median_hours)?;
    writeln!(out, "Время проверки по модулям:")?;
    for module in modules {
        writeln!(out, "{module}")?;
    }
    Ok(())
}

/// Writes the two-column `lesson,review_time` report.
pub fn write_csv(path: &Path, durations: &[ReviewDuration]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for duration in durations {
        writer.serialize(CsvRecord {
            lesson: duration.key.to_string(),
            review_time: duration.hours,
        })?;
    }
    writer.flush()?;
    Ok(())
}
