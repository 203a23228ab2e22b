//! Natural-language date and time resolution.
//!
//! Converts colloquial Korean/English fragments ("내일 저녁 7시", "다음주
//! 2시") into an absolute calendar date and wall-clock time, given a
//! reference instant and a timezone. Resolution never fails: input with no
//! recognizable expression degrades to the reference date at 09:00.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::{Captures, Regex};

/// Fallback hour when no time pattern matches, or a resolved value is out of
/// range.
const DEFAULT_HOUR: u32 = 9;

static HOUR_MINUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})시\s*(\d{1,2})분").expect("valid regex"));
static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})시").expect("valid regex"));
static COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("valid regex"));
static HALF_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})시반").expect("valid regex"));
static PM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"오후|[pP][mM]").expect("valid regex"));
static AM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"오전|[aA][mM]").expect("valid regex"));

/// A resolved date and wall-clock time in the interpreter's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Resolve a natural-language fragment into an absolute (date, time) pair.
pub fn resolve(text: &str, reference: DateTime<Utc>, tz: Tz) -> Resolved {
    Resolved {
        date: resolve_relative_date(text, reference, tz),
        time: resolve_time(text),
    }
}

/// Relative date keywords, additive over the reference date.
pub fn resolve_relative_date(text: &str, reference: DateTime<Utc>, tz: Tz) -> NaiveDate {
    let today = reference.with_timezone(&tz).date_naive();

    if text.contains("내일") || text.contains("tomorrow") {
        today + Duration::days(1)
    } else if text.contains("모레") {
        today + Duration::days(2)
    } else if text.contains("다음주") || text.contains("next week") {
        today + Duration::days(7)
    } else {
        today
    }
}

/// Explicit time patterns followed by the time-of-day keyword chain.
fn resolve_time(text: &str) -> NaiveTime {
    let mut hour = DEFAULT_HOUR;
    let mut minute = 0;
    let mut matched = false;

    // First pattern wins; later patterns are not tried once one succeeds.
    // `H시반` is shadowed by the bare `H시` pattern above it. The order is
    // load-bearing and kept as-is.
    if let Some(caps) = HOUR_MINUTE_RE.captures(text) {
        hour = cap_u32(&caps, 1);
        minute = cap_u32(&caps, 2);
        matched = true;
    } else if let Some(caps) = HOUR_RE.captures(text) {
        hour = cap_u32(&caps, 1);
        matched = true;
    } else if let Some(caps) = COLON_RE.captures(text) {
        hour = cap_u32(&caps, 1);
        minute = cap_u32(&caps, 2);
        matched = true;
    } else if let Some(caps) = HALF_HOUR_RE.captures(text) {
        hour = cap_u32(&caps, 1);
        minute = 30;
        matched = true;
    }

    // Mutually exclusive, in precedence order.
    if text.contains("저녁") {
        if hour <= 12 {
            hour = hour % 12 + 12;
        }
    } else if text.contains("아침") {
        if hour == 12 {
            hour = 0;
        }
    } else if text.contains("점심") && !matched {
        hour = 12;
        minute = 0;
    } else if PM_RE.is_match(text) {
        if hour < 12 {
            hour += 12;
        }
    } else if AM_RE.is_match(text) {
        if hour == 12 {
            hour = 0;
        }
    } else if !text.contains("새벽") && (1..=7).contains(&hour) {
        // Bare low hours default to the afternoon/evening.
        hour += 12;
    }

    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_else(default_time)
}

/// The literal bare-hour path used when building create commands: the
/// low-hour bias applies, the sentence-level keyword chain does not.
pub fn resolve_bare_hour(hour: u32) -> u32 {
    if (1..=7).contains(&hour) {
        hour + 12
    } else {
        hour
    }
}

/// First `H시` occurrence in the text, unadjusted.
pub fn extract_bare_hour(text: &str) -> Option<u32> {
    HOUR_RE
        .captures(text)
        .and_then(|caps| caps.get(1)?.as_str().parse().ok())
}

pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap()
}

/// Map a local wall time in `tz` to a UTC instant.
///
/// DST gaps resolve to the earliest valid instant; an empty mapping falls
/// back to reading the wall time as UTC.
pub fn to_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

/// UTC bounds of the local calendar day containing `date` in `tz`.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = to_instant(date, NaiveTime::MIN, tz);
    let end = to_instant(date + Duration::days(1), NaiveTime::MIN, tz);
    (start, end)
}

fn cap_u32(caps: &Captures<'_>, index: usize) -> u32 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
