//! # Timesheet Normalizer
//!
//! A library for converting a wide-format time-tracking export (one row per
//! tag combination, one column per date) into a normalized, long-format
//! timesheet with derived fiscal-period fields.
//!
//! ## Core Concepts
//!
//! - **Wide table**: header row with fixed tag columns followed by date
//!   columns, terminated by a "Total" column
//! - **Unpivot**: one normalized entry per (row, date) intersection with
//!   positive hours
//! - **Fiscal period**: May-to-April fiscal calendar (fiscal month 1 = May)
//! - **Output records**: deterministic, sorted, fixed-arity rows handed to a
//!   downstream sheet renderer
//!
//! ## Example
//!
//! ```rust,ignore
//! use timesheet_normalizer::*;
//!
//! let table = RawTable::new(vec![
//!     vec![
//!         Cell::text("Tag 1"), Cell::text("Tag 2"), Cell::text("Tag 3"),
//!         Cell::text("Notes"), Cell::Number(45473.0), Cell::text("Total"),
//!     ],
//!     vec![
//!         Cell::text("ABC123456"), Cell::text("DEV"), Cell::text("J1"),
//!         Cell::text("feature work"), Cell::Number(3.5), Cell::Number(3.5),
//!     ],
//! ]);
//!
//! let config = TimesheetConfig {
//!     identity: Identity {
//!         employee_number: "10042".to_string(),
//!         employee_name: "Jane Doe".to_string(),
//!     },
//!     layout: TableLayout::extended(),
//! };
//!
//! let normalized = normalize_timesheet(&table, &config).unwrap();
//! println!("{}", normalized.period_label); // "July 2024"
//! ```

pub mod assemble;
pub mod error;
pub mod export;
pub mod fiscal;
pub mod schema;
pub mod table;
pub mod unpivot;
pub mod utils;

pub use assemble::{assemble, OutputRecord, PeriodLabel};
pub use error::{Result, TimesheetError};
pub use export::{records_to_csv, summary_markdown};
pub use fiscal::{fiscal_period, FiscalPeriod};
pub use schema::{Identity, TableLayout, TimesheetConfig};
pub use table::{Cell, RawTable};
pub use unpivot::{DateColumn, TimeEntry, UnpivotOutcome, UnpivotWarning, Unpivoter};

use log::{debug, info};

/// Complete result of one normalization run.
#[derive(Debug, Clone)]
pub struct NormalizedTimesheet {
    pub records: Vec<OutputRecord>,
    pub period_label: PeriodLabel,
    pub date_columns: Vec<DateColumn>,
    pub warnings: Vec<UnpivotWarning>,
}

pub struct TimesheetProcessor;

impl TimesheetProcessor {
    /// Runs the full pipeline: layout validation, unpivot, fiscal-period
    /// derivation, and record assembly. A single linear pass; any failure
    /// aborts the run with no partial output.
    pub fn process(table: &RawTable, config: &TimesheetConfig) -> Result<NormalizedTimesheet> {
        validate_layout(&config.layout)?;

        info!(
            "Normalizing timesheet for {} ({} rows)",
            config.identity.employee_name,
            table.row_count()
        );

        let outcome = Unpivoter::new(&config.layout).unpivot(table)?;

        debug!(
            "Unpivoted {} entries from {} date columns ({} warnings)",
            outcome.entries.len(),
            outcome.date_columns.len(),
            outcome.warnings.len()
        );

        let (records, period_label) = assemble(outcome.entries, &config.identity)?;

        Ok(NormalizedTimesheet {
            records,
            period_label,
            date_columns: outcome.date_columns,
            warnings: outcome.warnings,
        })
    }
}

/// Convenience wrapper around [`TimesheetProcessor::process`].
pub fn normalize_timesheet(
    table: &RawTable,
    config: &TimesheetConfig,
) -> Result<NormalizedTimesheet> {
    TimesheetProcessor::process(table, config)
}

fn validate_layout(layout: &TableLayout) -> Result<()> {
    if layout.tag_column_count == 0 {
        return Err(TimesheetError::InvalidLayout(
            "tag_column_count must be at least 1".to_string(),
        ));
    }

    if layout.date_column_start < layout.tag_column_count {
        return Err(TimesheetError::InvalidLayout(format!(
            "date_column_start ({}) must not be less than tag_column_count ({})",
            layout.date_column_start, layout.tag_column_count
        )));
    }

    for (name, column) in [
        ("tag2_column", layout.tag2_column),
        ("tag3_column", layout.tag3_column),
        ("notes_column", layout.notes_column),
    ] {
        if let Some(index) = column {
            if index >= layout.tag_column_count {
                return Err(TimesheetError::InvalidLayout(format!(
                    "{} ({}) must fall within the {} fixed columns",
                    name, index, layout.tag_column_count
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> TimesheetConfig {
        TimesheetConfig {
            identity: Identity {
                employee_number: "10042".to_string(),
                employee_name: "Jane Doe".to_string(),
            },
            layout: TableLayout::extended(),
        }
    }

    fn sample_table() -> RawTable {
        RawTable::new(vec![
            vec![
                Cell::text("Tag 1"),
                Cell::text("Tag 2"),
                Cell::text("Tag 3"),
                Cell::text("Notes"),
                Cell::Number(45473.0),
                Cell::Number(45474.0),
                Cell::text("Total"),
            ],
            vec![
                Cell::text("ABC123456"),
                Cell::text("DEV"),
                Cell::text("J1"),
                Cell::text("feature work"),
                Cell::Number(3.5),
                Cell::Number(4.0),
                Cell::Number(7.5),
            ],
            vec![
                Cell::text("Office"),
                Cell::Empty,
                Cell::Empty,
                Cell::text("admin"),
                Cell::Number(1.0),
                Cell::Empty,
                Cell::Number(1.0),
            ],
        ])
    }

    #[test]
    fn test_end_to_end_processing() {
        let normalized = normalize_timesheet(&sample_table(), &config()).unwrap();

        assert_eq!(normalized.records.len(), 3);
        assert_eq!(normalized.period_label.to_string(), "July 2024");
        assert_eq!(normalized.date_columns.len(), 2);
        assert!(normalized.warnings.is_empty());

        // Sorted by date, then tag: ABC and Office on the 1st, ABC on the 2nd.
        assert_eq!(normalized.records[0].original_tag, "ABC123456");
        assert_eq!(normalized.records[1].original_tag, "Office");
        assert_eq!(normalized.records[1].project, "992024");
        assert_eq!(
            normalized.records[2].date,
            NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()
        );
    }

    #[test]
    fn test_idempotence() {
        let first = normalize_timesheet(&sample_table(), &config()).unwrap();
        let second = normalize_timesheet(&sample_table(), &config()).unwrap();

        assert_eq!(first.records, second.records);
        assert_eq!(first.period_label, second.period_label);
        assert_eq!(records_to_csv(&first.records), records_to_csv(&second.records));
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let mut bad = config();
        bad.layout.date_column_start = 1;

        let result = normalize_timesheet(&sample_table(), &bad);
        assert!(matches!(result, Err(TimesheetError::InvalidLayout(_))));
    }

    #[test]
    fn test_all_zero_hours_aborts() {
        let table = RawTable::new(vec![
            vec![
                Cell::text("Tag 1"),
                Cell::text("Tag 2"),
                Cell::text("Tag 3"),
                Cell::text("Notes"),
                Cell::Number(45473.0),
            ],
            vec![
                Cell::text("ABC123456"),
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Number(0.0),
            ],
        ]);

        let result = normalize_timesheet(&table, &config());
        assert!(matches!(
            result,
            Err(TimesheetError::CannotDeterminePeriod)
        ));
    }
}
