use std::path::PathBuf;

use starmate_model::{FormValidationError, ProfileRecord, Zodiac};

/// Outcome of one CSV data row.
#[derive(Debug)]
pub struct RowOutcome {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub result: Result<ProfileRecord, FormValidationError>,
}

/// Outcome of a whole batch file.
#[derive(Debug)]
pub struct BatchReport {
    pub source: PathBuf,
    pub rows: Vec<RowOutcome>,
}

impl BatchReport {
    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|row| row.result.is_ok()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.len() - self.valid_count()
    }

    pub fn has_errors(&self) -> bool {
        self.invalid_count() > 0
    }

    /// Valid rows per sign, in `Zodiac::ALL` order, signs without rows omitted.
    pub fn zodiac_counts(&self) -> Vec<(Zodiac, usize)> {
        Zodiac::ALL
            .iter()
            .filter_map(|sign| {
                let count = self
                    .rows
                    .iter()
                    .filter(|row| matches!(&row.result, Ok(record) if record.zodiac == *sign))
                    .count();
                (count > 0).then_some((*sign, count))
            })
            .collect()
    }
}
