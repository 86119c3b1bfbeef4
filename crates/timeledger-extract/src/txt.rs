//! Plain-text calendar export parser
//!
//! Parses the line-oriented text rendering of calendar entries produced by
//! calendar export tools. Each entry is a block of `Name: content` field
//! lines; a block opens at a `Summary` line and closes at a `Created` line,
//! with `Start` and `End` lines in between.
//!
//! ## Example
//!
//! ```no_run
//! use timeledger_extract::parse_export;
//!
//! let records = parse_export("txt-files/exercise.txt")?;
//! for record in &records {
//!     println!("{}: {} -> {}", record.summary, record.start, record.end);
//! }
//! # Ok::<(), timeledger_extract::ExtractError>(())
//! ```

use crate::error::{ExtractError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Field-line pattern: `Name: content` with optional whitespace after the colon
static RE_FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.*)$").expect("valid field line regex"));

/// A single extracted calendar record
///
/// `Start` and `End` are kept as the raw strings from the export; timestamp
/// parsing happens downstream in `timeledger-analysis`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventRecord {
    /// Event summary/title
    pub summary: String,

    /// Event start date/time, as rendered in the export
    pub start: String,

    /// Event end date/time, as rendered in the export
    pub end: String,
}

impl EventRecord {
    /// A record is emitted only when all three fields were present in its block
    #[inline]
    #[must_use = "checks whether the record qualifies for emission"]
    pub fn is_complete(&self) -> bool {
        !self.summary.is_empty() && !self.start.is_empty() && !self.end.is_empty()
    }
}

/// Parse a line into `(field, content)`
///
/// Lines that do not match the field-line pattern yield a pair of empty
/// strings, so the scan can treat them uniformly as "nothing of interest".
fn parse_field_line(line: &str) -> (&str, &str) {
    match RE_FIELD_LINE.captures(line) {
        Some(caps) => {
            let field = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2).map_or("", |m| m.as_str());
            (field, content)
        }
        None => ("", ""),
    }
}

/// Extract records from pre-trimmed export lines
///
/// Single forward scan. A `Summary` line opens a record; an inner scan then
/// collects `Start`/`End` content (last occurrence wins) until a `Created`
/// line closes the block. The record is emitted only if the block closed and
/// all three fields are non-empty. Blocks still open at end of input are
/// discarded rather than read past the end.
///
/// Note: a block whose `Created` line precedes its `Start`/`End` lines is
/// dropped, because the inner scan stops at `Created` before seeing them.
/// Real exports always place `Start`/`End` first.
#[must_use = "this function returns the extracted records"]
pub fn extract_records(lines: &[&str]) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let mut x = 0;

    while x < lines.len() {
        let (field, content) = parse_field_line(lines[x]);

        if field == "Summary" {
            let mut record = EventRecord {
                summary: content.to_string(),
                ..EventRecord::default()
            };

            // Inner scan: consume lines up to and including the Created line
            let mut closed = false;
            while !closed {
                x += 1;
                let Some(&line) = lines.get(x) else {
                    // Block never closed before end of input; discard it
                    break;
                };
                match parse_field_line(line) {
                    ("Start", value) => record.start = value.to_string(),
                    ("End", value) => record.end = value.to_string(),
                    ("Created", _) => closed = true,
                    _ => {}
                }
            }

            if closed && record.is_complete() {
                records.push(record);
            }
        }

        x += 1;
    }

    records
}

/// Parse a calendar export file and extract its records
///
/// Reads the whole file into memory (exports are small), trims each line,
/// and runs the block scan.
///
/// # Errors
///
/// Returns [`ExtractError::ReadError`] if the file cannot be read. Malformed
/// lines and incomplete blocks inside the file are not errors; they are
/// skipped per the extraction contract.
///
/// # Examples
///
/// ```no_run
/// use timeledger_extract::parse_export;
///
/// let records = parse_export("txt-files/work.txt")?;
/// println!("Extracted {} records", records.len());
/// # Ok::<(), timeledger_extract::ExtractError>(())
/// ```
#[must_use = "this function returns extracted records that should be processed"]
pub fn parse_export<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ExtractError::read_error(path, e))?;
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    Ok(extract_records(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_export(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_field_line() {
        assert_eq!(
            parse_field_line("Summary: Morning swim"),
            ("Summary", "Morning swim")
        );
        assert_eq!(parse_field_line("Start:1/6/2020 08:00"), ("Start", "1/6/2020 08:00"));
        assert_eq!(parse_field_line("Created:   x"), ("Created", "x"));
    }

    #[test]
    fn test_parse_field_line_no_match() {
        assert_eq!(parse_field_line(""), ("", ""));
        assert_eq!(parse_field_line("not a field line"), ("", ""));
        assert_eq!(parse_field_line(": missing name"), ("", ""));
        // Field names are word characters only
        assert_eq!(parse_field_line("Two words: x"), ("", ""));
    }

    #[test]
    fn test_extract_complete_block() {
        let lines = vec![
            "Summary: Study math",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
            "Created: x",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].summary, "Study math");
        assert_eq!(records[0].start, "1/1/2020 10:00");
        assert_eq!(records[0].end, "1/1/2020 11:00");
    }

    #[test]
    fn test_extract_multiple_blocks_in_order() {
        let lines = vec![
            "Summary: Study math",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
            "Created: x",
            "Summary: Evening 5 mile run",
            "Start: 1/1/2020 18:00",
            "End: 1/1/2020 19:00",
            "Created: x",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].summary, "Study math");
        assert_eq!(records[1].summary, "Evening 5 mile run");
    }

    #[test]
    fn test_no_blocks_yields_no_records() {
        let lines = vec!["", "random text", "Location: gym", "End: 1/1/2020 11:00"];
        assert!(extract_records(&lines).is_empty());
        assert!(extract_records(&[]).is_empty());
    }

    #[test]
    fn test_block_missing_start_is_dropped() {
        let lines = vec!["Summary: Study math", "End: 1/1/2020 11:00", "Created: x"];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_block_missing_end_is_dropped() {
        let lines = vec!["Summary: Study math", "Start: 1/1/2020 10:00", "Created: x"];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_block_missing_both_is_dropped() {
        let lines = vec!["Summary: Study math", "Created: x"];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_unterminated_block_discarded_without_panic() {
        // All three fields present but no Created line before end of input
        let lines = vec![
            "Summary: Study math",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
        ];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_created_before_start_drops_record() {
        // The inner scan stops at Created before it can capture Start/End.
        // Real exports always place Start/End first; this pins the quirk.
        let lines = vec![
            "Summary: Study math",
            "Created: x",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
        ];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_duplicate_start_keeps_last_occurrence() {
        let lines = vec![
            "Summary: Study math",
            "Start: 1/1/2020 09:00",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
            "Created: x",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start, "1/1/2020 10:00");
    }

    #[test]
    fn test_unrelated_fields_inside_block_ignored() {
        let lines = vec![
            "Summary: Mock trial scrimmage",
            "Location: courtroom B",
            "Start: 2/8/2020 09:00",
            "Description: practice round",
            "End: 2/8/2020 17:00",
            "Created: x",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].summary, "Mock trial scrimmage");
    }

    #[test]
    fn test_lines_between_blocks_skipped() {
        let lines = vec![
            "exported 2020-03-01",
            "",
            "Summary: Workout",
            "Start: 1/2/2020 07:00",
            "End: 1/2/2020 08:00",
            "Created: x",
            "trailing junk",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].summary, "Workout");
    }

    #[test]
    fn test_empty_summary_content_drops_record() {
        let lines = vec![
            "Summary:",
            "Start: 1/1/2020 10:00",
            "End: 1/1/2020 11:00",
            "Created: x",
        ];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_parse_export_file() {
        let file = create_temp_export(
            "Summary: Study chemistry\n  Start: 1/7/2020 14:00  \nEnd: 1/7/2020 16:30\nCreated: x\n",
        );
        let records = parse_export(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        // Lines are trimmed before scanning
        assert_eq!(records[0].start, "1/7/2020 14:00");
        assert_eq!(records[0].end, "1/7/2020 16:30");
    }

    #[test]
    fn test_parse_export_missing_file() {
        let result = parse_export("/nonexistent/never.txt");
        assert!(matches!(result, Err(ExtractError::ReadError { .. })));
    }
}
