//! Dataset recency filter
//!
//! Partitions catalog records into "newly released" and "recently updated"
//! sets against a day window. The two passes are independent: a record with a
//! qualifying release date and a qualifying update date shows up in both
//! outputs, and input order is preserved.

use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::types::DatasetRecord;

/// Result of one filter pass over the catalog.
#[derive(Debug, Clone, Default)]
pub struct RecentDatasets {
    pub newest: Vec<DatasetRecord>,
    pub updated: Vec<DatasetRecord>,
}

/// Parse a catalog date string into a calendar date.
///
/// The portal has served RFC 3339 timestamps, bare ISO dates, ISO date-times
/// without offset, and German `DD.MM.YYYY` dates. Anything else is `None`.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok()
}

/// Select records released or updated within the last `days` days, measured
/// from the local calendar date.
pub fn select_recent(records: &[DatasetRecord], days: i64) -> RecentDatasets {
    select_recent_as_of(records, days, Local::now().date_naive())
}

/// Like [`select_recent`], with an explicit reference date.
///
/// The threshold is `today - days`, inclusive on the lower bound and without
/// an upper bound, so future-dated entries pass. `days` is taken as-is; zero
/// or negative windows shift the threshold arithmetically. A record whose
/// `date_released` is missing or unparseable never qualifies as new; an
/// unparseable `date_updated` is logged and the record skipped for the
/// updated pass.
pub fn select_recent_as_of(records: &[DatasetRecord], days: i64, today: NaiveDate) -> RecentDatasets {
    let threshold = shift_date(today, -days);

    let mut selected = RecentDatasets::default();
    for record in records {
        let released = record.date_released.as_deref().and_then(parse_record_date);
        if matches!(released, Some(date) if date >= threshold) {
            selected.newest.push(record.clone());
        }

        match record.date_updated.as_deref() {
            Some(raw) => match parse_record_date(raw) {
                Some(date) if date >= threshold => selected.updated.push(record.clone()),
                Some(_) => {}
                None => {
                    debug!(
                        title = record.display_title(),
                        date_updated = raw,
                        "skipping record with unparseable date_updated"
                    );
                }
            },
            None => {}
        }
    }

    selected
}

/// Shift a date by a signed number of days, saturating at the calendar
/// limits instead of panicking on extreme windows.
fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}
