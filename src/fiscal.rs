use crate::utils::{first_day_of_month, last_day_of_month};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fiscal-period fields for one calendar date under the May-to-April
/// fiscal calendar (fiscal month 1 = May, 12 = April).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// 1-based month index within the fiscal year.
    pub fiscal_month: u32,
    /// First day of the calendar month this date maps to.
    pub period_start: NaiveDate,
    /// Last day of that month.
    pub period_end: NaiveDate,
    /// Label year of the fiscal year, i.e. the calendar year it ends in.
    pub fiscal_year: i32,
}

/// First calendar month of the fiscal year, 0-based (May).
const FISCAL_START_MONTH0: u32 = 4;

/// Derives the fiscal period for a calendar date. Pure and total.
pub fn fiscal_period(date: NaiveDate) -> FiscalPeriod {
    let month0 = date.month0();
    let year = date.year();

    let fiscal_month = ((month0 + 12 - FISCAL_START_MONTH0) % 12) + 1;

    // Calendar year in which the fiscal year containing this date begins.
    let fiscal_year_for_start = if month0 >= FISCAL_START_MONTH0 {
        year
    } else {
        year - 1
    };

    let period_month0 = (fiscal_month - 1 + FISCAL_START_MONTH0) % 12;
    let period_start = first_day_of_month(fiscal_year_for_start, period_month0);
    let period_end = last_day_of_month(fiscal_year_for_start, period_month0);

    let fiscal_year = if month0 >= FISCAL_START_MONTH0 {
        year + 1
    } else {
        year
    };

    FiscalPeriod {
        fiscal_month,
        period_start,
        period_end,
        fiscal_year,
    }
}
