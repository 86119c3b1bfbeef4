//! # timeledger-extract
//!
//! Calendar-export text parser for timeledger.
//!
//! This crate converts plain-text renderings of calendar entries (one
//! `Name: content` field line per attribute) into tabular records for
//! personal time-use analysis.
//!
//! ## Supported Format
//!
//! | Format | Extension | Description |
//! |--------|-----------|-------------|
//! | Calendar export text | `.txt` | Line-oriented `Summary`/`Start`/`End`/`Created` blocks |
//! | Record file | `.csv` | `Summary,Start,End` rows, comma-separated |
//!
//! ## Block Structure
//!
//! A calendar entry block is a contiguous run of field lines, opened by a
//! `Summary` line and closed by a `Created` line:
//!
//! ```text
//! Summary: Study math
//! Start: 1/1/2020 10:00
//! End: 1/1/2020 11:00
//! Created: 12/28/2019 09:12
//! ```
//!
//! A record is emitted if and only if `Summary`, `Start`, and `End` were all
//! non-empty when the block closed. Records keep their source order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use timeledger_extract::{parse_export, write_records};
//!
//! let records = parse_export("txt-files/exercise.txt")?;
//! println!("Extracted {} records", records.len());
//!
//! write_records("data/exercise.csv", &records)?;
//! # Ok::<(), timeledger_extract::ExtractError>(())
//! ```
//!
//! ## Error Handling
//!
//! Anomalies inside an export (malformed lines, incomplete blocks, blocks
//! missing `Start` or `End`) are absorbed by the scan: the affected record
//! is silently dropped and extraction continues. Only file-level failures
//! surface as [`ExtractError`].

pub mod csv;
pub mod error;
pub mod txt;

pub use crate::csv::{read_records, write_records};
pub use crate::error::{ExtractError, Result};
pub use crate::txt::{extract_records, parse_export, EventRecord};
