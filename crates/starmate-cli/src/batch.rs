//! CSV batch validation.
//!
//! Each data row is one profile form. Columns are matched by header name
//! (`name`, `birthday`, `height`, `weight`, `interests`, `gender`); missing
//! columns count as empty fields and unknown columns are ignored.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use starmate_model::{InterestsInput, ProfileInput};
use starmate_validate::{ValidationOptions, validate_profile};
use tracing::{debug, info, info_span};

use crate::logging::redact_value;
use crate::types::{BatchReport, RowOutcome};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BatchRow {
    name: String,
    birthday: String,
    height: String,
    weight: String,
    interests: String,
    gender: String,
}

impl From<BatchRow> for ProfileInput {
    fn from(row: BatchRow) -> Self {
        Self {
            name: row.name,
            birthday: row.birthday,
            height: row.height,
            weight: row.weight,
            interests: InterestsInput::Text(row.interests),
            gender: row.gender,
        }
    }
}

/// Validate every row of a CSV file.
pub fn validate_csv(path: &Path, options: &ValidationOptions) -> Result<BatchReport> {
    let span = info_span!("batch", path = %path.display());
    let _guard = span.enter();
    let file =
        std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rows = validate_reader(file, options)
        .with_context(|| format!("read {}", path.display()))?;
    let report = BatchReport {
        source: path.to_path_buf(),
        rows,
    };
    info!(
        rows = report.rows.len(),
        valid = report.valid_count(),
        invalid = report.invalid_count(),
        "batch validated"
    );
    Ok(report)
}

/// Validate every row read from `reader`.
///
/// Rows that are not valid CSV abort the batch; rows that fail profile
/// validation are reported in their [`RowOutcome`].
pub fn validate_reader<R: Read>(reader: R, options: &ValidationOptions) -> Result<Vec<RowOutcome>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    for (index, result) in reader.deserialize::<BatchRow>().enumerate() {
        let row = index + 1;
        let record = result.with_context(|| format!("row {row}"))?;
        debug!(row, name = redact_value(&record.name), "validating row");
        let input = ProfileInput::from(record);
        outcomes.push(RowOutcome {
            row,
            result: validate_profile(&input, options),
        });
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use starmate_model::Field;

    fn options() -> ValidationOptions {
        ValidationOptions::default().with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_columns_by_header_name() {
        let csv = "gender,name,birthday,height,weight,interests\n\
                   female,Jane,15 08 2000,165,55,\"music, art\"\n";
        let rows = validate_reader(csv.as_bytes(), &options()).unwrap();
        assert_eq!(rows.len(), 1);
        let record = rows[0].result.as_ref().unwrap();
        assert_eq!(record.name, "Jane");
        assert_eq!(record.interests, vec!["music", "art"]);
        assert_eq!(record.age, 23);
    }

    #[test]
    fn test_missing_column_is_empty_field() {
        let csv = "name,birthday,height,weight,gender\nJane,15 08 2000,165,55,female\n";
        let rows = validate_reader(csv.as_bytes(), &options()).unwrap();
        let errors = rows[0].result.as_ref().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Interests));
    }
}
