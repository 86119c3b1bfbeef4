//! Week and weekday bucketing
//!
//! Groups dated samples (a date plus a value, e.g. hours spent) by calendar
//! week relative to a reference start date, or by weekday, then reduces each
//! bucket by count, sum, or mean.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// English weekday names, Monday first
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// How to reduce a bucket of values to a single number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// Number of samples in the bucket
    #[default]
    Count,
    /// Sum of the sample values
    Sum,
    /// Arithmetic mean of the sample values
    Mean,
}

impl Reduction {
    /// Reduce a non-empty bucket of values
    fn apply(self, values: &[f64]) -> f64 {
        match self {
            Self::Count => values.len() as f64,
            Self::Sum => values.iter().sum(),
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

/// Group samples by ISO week offset from a reference start date
///
/// The bucket key is the sample's ISO week number minus the reference
/// date's ISO week number, so the week containing the reference date is
/// week 0, the next is week 1, and so on. Only week numbers are compared;
/// the analysis window is assumed to sit within one calendar year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timeledger_analysis::{group_by_week, Reduction};
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
/// let samples = vec![
///     (NaiveDate::from_ymd_opt(2020, 1, 7).unwrap(), 1.5),
///     (NaiveDate::from_ymd_opt(2020, 1, 8).unwrap(), 2.0),
///     (NaiveDate::from_ymd_opt(2020, 1, 14).unwrap(), 1.0),
/// ];
///
/// let hours = group_by_week(&samples, start, Reduction::Sum);
/// assert_eq!(hours[&0], 3.5);
/// assert_eq!(hours[&1], 1.0);
/// ```
#[must_use = "returns the reduced per-week buckets"]
pub fn group_by_week(
    samples: &[(NaiveDate, f64)],
    reference_start: NaiveDate,
    reduction: Reduction,
) -> BTreeMap<i64, f64> {
    let week_0 = i64::from(reference_start.iso_week().week());

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for &(date, value) in samples {
        let offset = i64::from(date.iso_week().week()) - week_0;
        buckets.entry(offset).or_default().push(value);
    }

    buckets
        .into_iter()
        .map(|(offset, values)| (offset, reduction.apply(&values)))
        .collect()
}

/// Group samples by weekday name
///
/// Returns one `(day name, reduced value)` pair per populated weekday, in
/// Monday..Sunday order.
#[must_use = "returns the reduced per-weekday buckets"]
pub fn group_by_weekday(
    samples: &[(NaiveDate, f64)],
    reduction: Reduction,
) -> Vec<(&'static str, f64)> {
    let mut buckets: [Vec<f64>; 7] = Default::default();
    for &(date, value) in samples {
        buckets[date.weekday().num_days_from_monday() as usize].push(value);
    }

    DAY_NAMES
        .iter()
        .zip(buckets.iter())
        .filter(|(_, values)| !values.is_empty())
        .map(|(&name, values)| (name, reduction.apply(values)))
        .collect()
}
