//! Event text classifiers
//!
//! Case-insensitive pattern tests over event summaries, used to slice the
//! record set by activity (study subject, workout type, mock trial).

use regex::Regex;
use std::sync::LazyLock;

/// Leading-number pattern for run events, e.g. "Evening 5 mile run"
static RE_RUN_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?).*run").expect("valid run length regex"));

/// Mock-trial keywords, including practice sessions
static RE_MOCK_RELATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Mock|MT|Invitational|Tournament|Regionals|ORCS|Direct|Equal")
        .expect("valid mock trial regex")
});

/// Tournament keywords only
static RE_TOURNAMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Invitational|Tournament|Regionals|ORCS").expect("valid tournament regex")
});

/// Case-insensitive match of a caller-supplied keyword within a pattern
/// template. The keyword is escaped, so an invalid final pattern cannot
/// occur; a failed compile conservatively reports no match.
fn keyword_match(template: &str, keyword: &str, summary: &str) -> bool {
    let pattern = template.replace("{}", &regex::escape(keyword));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(summary))
}

/// Whether an event is studying the given subject
///
/// Matches "study" followed (anywhere later in the summary) by the subject,
/// case-insensitively: "Study for math final" matches subject "math".
#[must_use = "returns whether the event matches the study subject"]
pub fn is_studying(summary: &str, subject: &str) -> bool {
    keyword_match("(?i)study.*{}", subject, summary)
}

/// Whether an event is a workout of the given type (e.g. "run", "swim")
#[must_use = "returns whether the event matches the workout type"]
pub fn is_workout(summary: &str, workout_type: &str) -> bool {
    keyword_match("(?i){}", workout_type, summary)
}

/// Length of a run in miles, taken from the leading number in the summary
///
/// Returns 0.0 when the summary is not a run or carries no distance.
#[must_use = "returns the run distance in miles"]
pub fn run_length(summary: &str) -> f64 {
    RE_RUN_LENGTH
        .captures(summary)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Whether an event is mock trial related (practice, rounds, tournaments)
#[must_use = "returns whether the event is mock trial related"]
pub fn is_mock_related(summary: &str) -> bool {
    RE_MOCK_RELATED.is_match(summary)
}

/// Whether an event is a mock trial tournament
#[must_use = "returns whether the event is a tournament"]
pub fn is_tournament(summary: &str) -> bool {
    RE_TOURNAMENT.is_match(summary)
}
