mod error;
mod record;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use record::{NOISE_LABEL, PointRecord};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Input file used when none is given on the command line
pub const DEFAULT_INPUT: &str = "dbscan_results.csv";

/// Suffix appended to the input stem to name the rendered figure
pub const OUTPUT_SUFFIX: &str = "_comprehensive.png";

/// Read a results file into memory and parse it.
///
/// The file handle is released before parsing starts.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<PointRecord>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let records = parse_records(&text)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "parsed results file");
    Ok(records)
}

/// Parse `x,y,label` rows, skipping the first (header) line.
///
/// Blank lines are ignored. Line numbers in errors count the header as line 1.
pub fn parse_records(text: &str) -> Result<Vec<PointRecord>, LoadError> {
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(LoadError::Malformed {
                line,
                reason: format!("expected 3 columns (x,y,label), found {}", fields.len()),
            });
        }

        let x = parse_coord(fields[0], "x", line)?;
        let y = parse_coord(fields[1], "y", line)?;
        let label: i32 = fields[2].parse().map_err(|_| LoadError::Malformed {
            line,
            reason: format!("label '{}' is not an integer", fields[2]),
        })?;

        if label < NOISE_LABEL {
            return Err(LoadError::Malformed {
                line,
                reason: format!("label {} is below the noise label {}", label, NOISE_LABEL),
            });
        }

        records.push(PointRecord { x, y, label });
    }

    Ok(records)
}

fn parse_coord(field: &str, name: &str, line: usize) -> Result<f64, LoadError> {
    let value: f64 = field.parse().map_err(|_| LoadError::Malformed {
        line,
        reason: format!("{} '{}' is not a number", name, field),
    })?;

    if !value.is_finite() {
        return Err(LoadError::Malformed {
            line,
            reason: format!("{} '{}' is not finite", name, field),
        });
    }

    Ok(value)
}

/// Derive the figure path for an input file: `data.csv` -> `data_comprehensive.png`.
///
/// Inputs without a `.csv` extension keep their full name, so the figure
/// never replaces the input.
pub fn output_path_for(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();

    let is_csv = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let base = if is_csv {
        input.file_stem()
    } else {
        input.file_name()
    };
    let base = base.map(|s| s.to_string_lossy()).unwrap_or_default();

    input.with_file_name(format!("{}{}", base, OUTPUT_SUFFIX))
}
