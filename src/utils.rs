use chrono::{Days, Duration, NaiveDate};

/// Day-count serial corresponding to 1970-01-01 in the spreadsheet
/// serial-date system (1900 date system).
pub const UNIX_EPOCH_SERIAL: i64 = 25569;

/// Decodes a spreadsheet serial-date number into a calendar date.
/// Fractional time-of-day components are discarded.
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    let days = serial.floor() as i64 - UNIX_EPOCH_SERIAL;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    epoch.checked_add_signed(Duration::days(days))
}

/// Tries a fixed list of calendar-date formats in order; first match wins.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y", "%b %d, %Y"];

    let trimmed = text.trim();
    for fmt in formats.iter() {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    None
}

pub fn first_day_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap()
}

/// Last calendar day of the given month, computed as the day before the
/// first of the next month so leap years come out right.
pub fn last_day_of_month(year: i32, month0: u32) -> NaiveDate {
    let month = month0 + 1;
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
