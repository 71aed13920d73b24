use crate::error::{Result, TimesheetError};
use crate::fiscal::fiscal_period;
use crate::schema::Identity;
use crate::unpivot::TimeEntry;
use crate::utils::month_name;
use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fully-populated output row.
///
/// Field order here is the column order of the rendered sheet. The trailing
/// lookup fields (descriptions, task, job code, running total, shading) are
/// filled in by the downstream renderer; the core emits them empty so the
/// column arity never varies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub employee_number: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub project: String,
    pub hours: f64,
    pub comment: String,
    /// Fiscal month, 1 = May through 12 = April.
    pub period: u32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub fiscal_year: i32,
    pub original_tag: String,
    pub aux_tag2: String,
    pub aux_tag3: String,
    pub project_description: String,
    pub task: String,
    pub task_description: String,
    pub job_code: String,
    pub job_code_description: String,
    pub running_total: String,
    pub alternate_shading: String,
}

impl OutputRecord {
    /// Rendered column headers, in field order.
    pub const HEADERS: [&'static str; 20] = [
        "Employee Number",
        "Employee Name",
        "Date",
        "Project",
        "Hours",
        "Comment",
        "Period",
        "Period Start",
        "Period End",
        "Fiscal Year",
        "Original Tag",
        "Tag 2",
        "Tag 3",
        "Project Description",
        "Task",
        "Task Description",
        "Job Code",
        "Job Code Description",
        "Running Total",
        "Alternate Shading",
    ];
}

/// Human-readable label of the period the sheet covers, taken from the
/// first record in sorted order (e.g. "July 2024").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabel {
    pub month_name: String,
    pub year: i32,
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name, self.year)
    }
}

/// Sorts the entries into their final total order, derives the period
/// label, and merges fiscal fields and identity into output records.
pub fn assemble(
    mut entries: Vec<TimeEntry>,
    identity: &Identity,
) -> Result<(Vec<OutputRecord>, PeriodLabel)> {
    if entries.is_empty() {
        return Err(TimesheetError::CannotDeterminePeriod);
    }

    // Stable sort: equal (date, tag) pairs keep their scan order, which
    // downstream running totals depend on.
    entries.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.original_tag.cmp(&b.original_tag))
    });

    let first_date = entries[0].date;
    let period_label = PeriodLabel {
        month_name: month_name(first_date),
        year: first_date.year(),
    };

    let records = entries
        .into_iter()
        .map(|entry| {
            let fiscal = fiscal_period(entry.date);
            OutputRecord {
                employee_number: identity.employee_number.clone(),
                employee_name: identity.employee_name.clone(),
                date: entry.date,
                project: entry.project_number,
                hours: entry.hours,
                comment: entry.notes,
                period: fiscal.fiscal_month,
                period_start: fiscal.period_start,
                period_end: fiscal.period_end,
                fiscal_year: fiscal.fiscal_year,
                original_tag: entry.original_tag,
                aux_tag2: entry.aux_tag2,
                aux_tag3: entry.aux_tag3,
                project_description: String::new(),
                task: String::new(),
                task_description: String::new(),
                job_code: String::new(),
                job_code_description: String::new(),
                running_total: String::new(),
                alternate_shading: String::new(),
            }
        })
        .collect::<Vec<_>>();

    info!(
        "Assembled {} records for period {}",
        records.len(),
        period_label
    );

    Ok((records, period_label))
}
