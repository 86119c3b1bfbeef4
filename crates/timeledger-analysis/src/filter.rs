//! Date-range filtering
//!
//! Keeps events that fall strictly inside a calendar date range, matching
//! the analysis convention of comparing event timestamps against midnight
//! on the bound dates.

use crate::error::Result;
use crate::event::{parse_date, Event};
use chrono::NaiveTime;

/// Filter events to those strictly inside a calendar date range
///
/// Keeps events whose `start_time` is strictly after midnight on
/// `date_start` and whose `end_time` is strictly before midnight on
/// `date_end`. Both bounds are month/day/year strings.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::InvalidDate`] when either bound fails to
/// parse; malformed bounds are a caller bug, not recoverable input.
///
/// # Examples
///
/// ```
/// use timeledger_analysis::{filter_by_date, Event, parse_timestamp};
///
/// let events = vec![Event {
///     summary: "Study math".to_string(),
///     start_time: parse_timestamp("1/8/2020 10:00")?,
///     end_time: parse_timestamp("1/8/2020 11:00")?,
/// }];
///
/// let week_one = filter_by_date(&events, "1/6/2020", "1/13/2020")?;
/// assert_eq!(week_one.len(), 1);
/// # Ok::<(), timeledger_analysis::AnalysisError>(())
/// ```
pub fn filter_by_date(events: &[Event], date_start: &str, date_end: &str) -> Result<Vec<Event>> {
    let start = parse_date(date_start)?.and_time(NaiveTime::MIN);
    let end = parse_date(date_end)?.and_time(NaiveTime::MIN);

    Ok(events
        .iter()
        .filter(|event| event.start_time > start && event.end_time < end)
        .cloned()
        .collect())
}
