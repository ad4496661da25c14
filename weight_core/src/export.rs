//! CSV export of a projected timeline.
//!
//! The writer is generic over [`std::io::Write`]; opening files is up to the
//! caller.

use crate::health::BmiCategory;
use crate::validation::format_date;
use crate::{Result, TimelineEntry, WeightChangeResult};
use std::io::Write;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    day: u32,
    date: String,
    weight_kg: f64,
    bmi: f64,
    bmi_category: &'static str,
}

impl From<TimelineEntry> for CsvRow {
    fn from(entry: TimelineEntry) -> Self {
        CsvRow {
            day: entry.day,
            date: format_date(entry.date),
            weight_kg: entry.weight,
            bmi: entry.bmi,
            bmi_category: BmiCategory::from_bmi(entry.bmi).label(),
        }
    }
}

/// Write one CSV row per timeline day (with a header) and return the row count
pub fn write_timeline_csv<W: Write>(result: &WeightChangeResult, writer: W) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut rows = 0;
    for entry in result.timeline() {
        writer.serialize(CsvRow::from(entry))?;
        rows += 1;
    }

    writer.flush()?;
    tracing::info!("Wrote {} timeline rows to CSV", rows);

    Ok(rows)
}
