//! # timeledger-analysis
//!
//! Time-use aggregation helpers for timeledger.
//!
//! This crate consumes the tabular records produced by `timeledger-extract`
//! and answers the questions the toolkit exists for: hours spent studying a
//! subject, workout habits, mock trial commitments, and how any of those
//! distribute over the weeks of a quarter or the days of the week.
//!
//! Every helper is a stateless function over already-loaded events; there is
//! no pipeline object and no shared state.
//!
//! ## Input
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `Event` (or `Summary`) | text | Event summary |
//! | `Start_time` | timestamp | Event start |
//! | `End_time` | timestamp | Event end |
//!
//! ## Quick Start
//!
//! ```no_run
//! use timeledger_analysis::{
//!     filter_by_date, group_by_week, is_studying, load_events, parse_date, Reduction,
//! };
//!
//! let events = load_events("data/exams.csv")?;
//!
//! // Hours spent studying math during winter quarter, per week
//! let quarter = filter_by_date(&events, "1/6/2020", "3/20/2020")?;
//! let samples: Vec<_> = quarter
//!     .iter()
//!     .filter(|e| is_studying(&e.summary, "math"))
//!     .map(|e| (e.start_time.date(), e.total_hours()))
//!     .collect();
//!
//! let per_week = group_by_week(&samples, parse_date("1/6/2020")?, Reduction::Sum);
//! for (week, hours) in &per_week {
//!     println!("week {week}: {hours:.1}h");
//! }
//! # Ok::<(), timeledger_analysis::AnalysisError>(())
//! ```
//!
//! ## Error Handling
//!
//! Malformed dates and timestamps here are caller bugs, not messy input:
//! they surface immediately as [`AnalysisError`] rather than being skipped.

pub mod classify;
pub mod error;
pub mod event;
pub mod filter;
pub mod group;

pub use crate::classify::{is_mock_related, is_studying, is_tournament, is_workout, run_length};
pub use crate::error::{AnalysisError, Result};
pub use crate::event::{load_events, parse_date, parse_timestamp, Event};
pub use crate::filter::filter_by_date;
pub use crate::group::{group_by_week, group_by_weekday, Reduction};
