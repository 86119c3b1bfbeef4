//! Typed events and record loading
//!
//! Converts persisted record rows (text columns) into typed events with
//! `chrono` timestamps. Timestamp parsing is strict: a rendering outside the
//! supported set is a caller bug and fails the whole load.

use crate::error::{AnalysisError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Timestamp renderings that occur in calendar exports
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Calendar date rendering used by the date-range filter
const DATE_FORMAT: &str = "%m/%d/%Y";

/// A record row as persisted on disk
///
/// The text column is `Event` in analysis exports, `Summary` straight out of
/// the extractor; both headers are accepted.
#[derive(Debug, Clone, serde::Deserialize)]
struct RawEvent {
    #[serde(rename = "Event", alias = "Summary")]
    summary: String,
    #[serde(rename = "Start_time")]
    start_time: String,
    #[serde(rename = "End_time")]
    end_time: String,
}

/// A calendar event with parsed timestamps
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Event {
    /// Event summary/title
    pub summary: String,

    /// Event start timestamp
    pub start_time: NaiveDateTime,

    /// Event end timestamp
    pub end_time: NaiveDateTime,
}

impl Event {
    /// Total length of the event, in hours
    #[inline]
    #[must_use = "returns the event duration in hours"]
    pub fn total_hours(&self) -> f64 {
        let seconds = (self.end_time - self.start_time).num_seconds();
        seconds as f64 / 3600.0
    }
}

/// Parse an event timestamp
///
/// Tries each supported rendering in turn.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidTimestamp`] when no rendering matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    Err(AnalysisError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Parse a calendar date in month/day/year format
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidDate`] when the string does not parse.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AnalysisError::InvalidDate {
        value: value.to_string(),
    })
}

/// Load typed events from a delimited record file
///
/// Expects a header row with columns `Event` (or `Summary`), `Start_time`,
/// and `End_time`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row does not match the
/// column layout, or any timestamp fails to parse.
///
/// # Examples
///
/// ```no_run
/// use timeledger_analysis::load_events;
///
/// let events = load_events("data/exercise.csv")?;
/// for event in &events {
///     println!("{}: {:.1}h", event.summary, event.total_hours());
/// }
/// # Ok::<(), timeledger_analysis::AnalysisError>(())
/// ```
#[must_use = "this function returns loaded events that should be processed"]
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AnalysisError::read_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut events = Vec::new();
    for row in reader.deserialize() {
        let raw: RawEvent = row?;
        events.push(Event {
            start_time: parse_timestamp(&raw.start_time)?,
            end_time: parse_timestamp(&raw.end_time)?,
            summary: raw.summary,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_parse_timestamp_renderings() {
        assert_eq!(
            ts("1/1/2020 10:00"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        // Zero-padded, with seconds, 12-hour, and ISO renderings
        assert_eq!(ts("01/01/2020 10:00:30").time().second(), 30);
        assert_eq!(ts("1/1/2020 6:30 PM").time().hour(), 18);
        assert_eq!(ts("2020-01-01 10:00:00"), ts("1/1/2020 10:00"));
        assert_eq!(ts("2020-01-01T10:00:00"), ts("1/1/2020 10:00"));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let result = parse_timestamp("yesterday at noon");
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("1/6/2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 6).unwrap()
        );
        assert!(matches!(
            parse_date("2020-01-06"),
            Err(AnalysisError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_total_hours() {
        let event = Event {
            summary: "Study math".to_string(),
            start_time: ts("1/1/2020 10:00"),
            end_time: ts("1/1/2020 11:30"),
        };
        assert!((event.total_hours() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_events_with_event_header() {
        let file = create_temp_csv(
            "Event,Start_time,End_time\n\
             Study math,1/1/2020 10:00,1/1/2020 11:00\n\
             Evening 5 mile run,1/1/2020 18:00,1/1/2020 19:00\n",
        );
        let events = load_events(file.path()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].summary, "Study math");
        assert_eq!(events[1].start_time, ts("1/1/2020 18:00"));
    }

    #[test]
    fn test_load_events_with_summary_header() {
        let file = create_temp_csv(
            "Summary,Start_time,End_time\nStudy math,1/1/2020 10:00,1/1/2020 11:00\n",
        );
        let events = load_events(file.path()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Study math");
    }

    #[test]
    fn test_load_events_bad_timestamp_is_hard_failure() {
        let file =
            create_temp_csv("Event,Start_time,End_time\nStudy math,whenever,1/1/2020 11:00\n");
        assert!(matches!(
            load_events(file.path()),
            Err(AnalysisError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_load_events_missing_file() {
        assert!(matches!(
            load_events("/nonexistent/never.csv"),
            Err(AnalysisError::ReadError { .. })
        ));
    }
}
