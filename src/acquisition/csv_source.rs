//! Traffic counts CSV loader.
//!
//! Expected layout: `timestamp,total_vehicles[,heavy_vehicles]` with an
//! optional header row. When the heavy column is absent the split is
//! derived from the configured heavy-vehicle fraction, matching how the
//! road operator's exports only carry totals.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::Path;

use super::AcquisitionError;
use crate::types::TrafficSample;

/// Load a traffic series from a CSV file.
///
/// Malformed rows fail the whole load; a silently skipped row would shift
/// the window and corrupt the fatigue metric without any visible sign.
pub fn load_traffic_csv(
    path: &Path,
    heavy_fraction: f64,
) -> Result<Vec<TrafficSample>, AcquisitionError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AcquisitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Header row is optional.
        if line_no == 0 && line.to_ascii_lowercase().starts_with("timestamp") {
            continue;
        }
        samples.push(parse_row(line, line_no + 1, heavy_fraction)?);
    }

    Ok(samples)
}

fn parse_row(
    line: &str,
    line_no: usize,
    heavy_fraction: f64,
) -> Result<TrafficSample, AcquisitionError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(row_error(line_no, "expected 2 or 3 columns"));
    }

    let timestamp = parse_timestamp(fields[0])
        .ok_or_else(|| row_error(line_no, "unrecognized timestamp format"))?;

    let total_vehicles: u32 = fields[1]
        .parse()
        .map_err(|_| row_error(line_no, "total_vehicles is not a non-negative integer"))?;

    let heavy_vehicles: u32 = match fields.get(2) {
        Some(raw) => raw
            .parse()
            .map_err(|_| row_error(line_no, "heavy_vehicles is not a non-negative integer"))?,
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        None => (f64::from(total_vehicles) * heavy_fraction).round() as u32,
    };

    if heavy_vehicles > total_vehicles {
        return Err(row_error(line_no, "heavy_vehicles exceeds total_vehicles"));
    }

    Ok(TrafficSample {
        timestamp,
        total_vehicles,
        heavy_vehicles,
    })
}

/// Accept RFC 3339 or a plain `YYYY-MM-DD HH:MM[:SS]` (taken as UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

fn row_error(line_no: usize, message: &str) -> AcquisitionError {
    AcquisitionError::Parse {
        context: format!("traffic CSV line {line_no}"),
        message: message.to_string(),
    }
}
