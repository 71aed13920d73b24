use crate::error::{Result, TimesheetError};
use crate::schema::TableLayout;
use crate::table::{Cell, RawTable};
use crate::utils::{date_from_serial, parse_date_text};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed project code assigned to internal "Office" rows.
const OFFICE_PROJECT_NUMBER: &str = "992024";

/// Header marker that terminates both the column scan and the row scan.
const TOTAL_MARKER: &str = "total";

/// A header column that parsed to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    pub column_index: usize,
    pub date: NaiveDate,
}

/// One normalized time entry: a (row, date column) intersection with
/// strictly positive hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub project_number: String,
    pub notes: String,
    pub hours: f64,
    pub original_tag: String,
    pub aux_tag2: String,
    pub aux_tag3: String,
}

/// Non-fatal anomalies observed while unpivoting. Logged as they occur and
/// returned to the caller; they never abort the run and never change the
/// documented fallback value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnpivotWarning {
    UnparseableHeader { column: usize, value: String },
    NonDigitProjectNumber { row: usize, extracted: String },
    ShortTag { row: usize, tag: String },
}

impl fmt::Display for UnpivotWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpivotWarning::UnparseableHeader { column, value } => {
                write!(
                    f,
                    "Header column {} has unparseable date value '{}'; column skipped",
                    column, value
                )
            }
            UnpivotWarning::NonDigitProjectNumber { row, extracted } => {
                write!(
                    f,
                    "Row {}: extracted project number '{}' is not 6 digits; using as-is",
                    row, extracted
                )
            }
            UnpivotWarning::ShortTag { row, tag } => {
                write!(
                    f,
                    "Row {}: tag '{}' is shorter than 6 characters; using whole tag as project number",
                    row, tag
                )
            }
        }
    }
}

/// Everything produced by one unpivot pass.
#[derive(Debug, Clone)]
pub struct UnpivotOutcome {
    pub entries: Vec<TimeEntry>,
    pub date_columns: Vec<DateColumn>,
    pub warnings: Vec<UnpivotWarning>,
}

pub struct Unpivoter<'a> {
    layout: &'a TableLayout,
}

impl<'a> Unpivoter<'a> {
    pub fn new(layout: &'a TableLayout) -> Self {
        Self { layout }
    }

    /// Scans the header for date columns, then walks the data rows and
    /// emits one entry per intersection with positive hours. The table is
    /// never mutated.
    pub fn unpivot(&self, table: &RawTable) -> Result<UnpivotOutcome> {
        let header = table.header().ok_or(TimesheetError::NoData)?;

        let mut warnings = Vec::new();
        let date_columns = self.scan_date_columns(header, &mut warnings);

        if date_columns.is_empty() {
            return Err(TimesheetError::NoDateColumns);
        }

        debug!(
            "Found {} date columns spanning {} to {}",
            date_columns.len(),
            date_columns[0].date,
            date_columns[date_columns.len() - 1].date
        );

        let mut entries = Vec::new();

        for (offset, row) in table.data_rows().iter().enumerate() {
            let row_index = offset + 1;
            let tag1 = row.first().map(|c| c.as_text()).unwrap_or_default();
            let tag1 = tag1.trim().to_string();

            // Row scan halts permanently at the totals row or first blank tag.
            if tag1.is_empty() || tag1.eq_ignore_ascii_case(TOTAL_MARKER) {
                debug!("Row scan stopped at row {}", row_index);
                break;
            }

            let project_number = derive_project_number(&tag1, row_index, &mut warnings);
            let aux_tag2 = self.role_column_text(row, self.layout.tag2_column);
            let aux_tag3 = self.role_column_text(row, self.layout.tag3_column);
            let notes = self.role_column_text(row, self.layout.notes_column);

            for date_column in &date_columns {
                let hours = row
                    .get(date_column.column_index)
                    .map(Cell::as_hours)
                    .unwrap_or(0.0);

                if hours > 0.0 {
                    entries.push(TimeEntry {
                        date: date_column.date,
                        project_number: project_number.clone(),
                        notes: notes.clone(),
                        hours,
                        original_tag: tag1.clone(),
                        aux_tag2: aux_tag2.clone(),
                        aux_tag3: aux_tag3.clone(),
                    });
                }
            }
        }

        Ok(UnpivotOutcome {
            entries,
            date_columns,
            warnings,
        })
    }

    /// Candidate date columns run from `date_column_start` up to (but
    /// excluding) the first "total" header; nothing past that marker is
    /// considered, parseable or not.
    fn scan_date_columns(
        &self,
        header: &[Cell],
        warnings: &mut Vec<UnpivotWarning>,
    ) -> Vec<DateColumn> {
        let mut columns = Vec::new();

        for (index, cell) in header.iter().enumerate().skip(self.layout.date_column_start) {
            if let Cell::Text(text) = cell {
                if text.trim().eq_ignore_ascii_case(TOTAL_MARKER) {
                    break;
                }
            }

            let parsed = match cell {
                Cell::Number(serial) => date_from_serial(*serial),
                Cell::Text(text) => parse_date_text(text),
                Cell::Empty => None,
            };

            match parsed {
                Some(date) => columns.push(DateColumn {
                    column_index: index,
                    date,
                }),
                None => {
                    if !cell.is_empty() {
                        let warning = UnpivotWarning::UnparseableHeader {
                            column: index,
                            value: cell.as_text(),
                        };
                        warn!("{}", warning);
                        warnings.push(warning);
                    }
                }
            }
        }

        columns
    }

    fn role_column_text(&self, row: &[Cell], column: Option<usize>) -> String {
        column
            .and_then(|i| row.get(i))
            .map(|c| c.as_text().trim().to_string())
            .unwrap_or_default()
    }
}

/// Maps a trimmed tag-1 value to a project number: "Office" rows get the
/// fixed internal code, long tags contribute their last 6 characters, and
/// anything shorter passes through whole.
fn derive_project_number(
    tag: &str,
    row_index: usize,
    warnings: &mut Vec<UnpivotWarning>,
) -> String {
    if tag.eq_ignore_ascii_case("office") {
        return OFFICE_PROJECT_NUMBER.to_string();
    }

    let chars: Vec<char> = tag.chars().collect();
    if chars.len() >= 6 {
        let extracted: String = chars[chars.len() - 6..].iter().collect();
        if !extracted.chars().all(|c| c.is_ascii_digit()) {
            let warning = UnpivotWarning::NonDigitProjectNumber {
                row: row_index,
                extracted: extracted.clone(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }
        extracted
    } else {
        let warning = UnpivotWarning::ShortTag {
            row: row_index,
            tag: tag.to_string(),
        };
        warn!("{}", warning);
        warnings.push(warning);
        tag.to_string()
    }
}
