//! Inclusive date-window selection and source ordering.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, warn};

use crate::conf::C_DATE_FORMAT;
use crate::spec::{SpecDateWindow, SpecMaterialExit};

/// Records selected by one window, plus data-quality diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter<'a> {
    /// Selected records, in input order.
    pub records: Vec<&'a SpecMaterialExit>,
    /// Records dropped for an unparseable `exitDate`.
    pub cnt_malformed: usize,
    /// One message per dropped record.
    pub warnings: Vec<String>,
}

impl ReportFilter<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse an `exitDate`; accepts `YYYY-MM-DD` or a timestamp starting with one.
///
/// A timestamp yields the calendar day it is written in (its own offset, not
/// UTC), so it matches the window for that whole day.
pub fn parse_exit_date(value: &str) -> Option<NaiveDate> {
    let c_value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(c_value, C_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(c_value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(c_value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Select records whose `exitDate` lies inside `window` (both ends inclusive).
///
/// Order is preserved. Records with an unparseable date are excluded and
/// counted in [`ReportFilter::cnt_malformed`]; this never fails.
pub fn filter_by_window<'a>(
    records: &'a [SpecMaterialExit],
    window: &SpecDateWindow,
) -> ReportFilter<'a> {
    let mut report_filter = ReportFilter::default();

    for record in records {
        let Some(date_exit) = parse_exit_date(&record.exit_date) else {
            warn!(
                id = %record.id,
                exit_date = %record.exit_date,
                "excluding exit with malformed date"
            );
            report_filter.cnt_malformed += 1;
            report_filter.warnings.push(format!(
                "Exit {:?} has malformed exitDate {:?}; excluded.",
                record.id, record.exit_date
            ));
            continue;
        };
        if window.contains(date_exit) {
            report_filter.records.push(record);
        }
    }

    debug!(
        n_input = records.len(),
        n_selected = report_filter.len(),
        n_malformed = report_filter.cnt_malformed,
        "filtered exits by window"
    );
    report_filter
}

/// Order a freshly loaded collection newest-first by `createdAt`.
///
/// Unparseable timestamps go last; ties keep their relative order.
pub fn order_by_created_desc(records: &mut [SpecMaterialExit]) {
    records.sort_by_cached_key(|record| Reverse(parse_created_at(&record.created_at)));
}

fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    let c_value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(c_value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(c_value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(c_value, C_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
