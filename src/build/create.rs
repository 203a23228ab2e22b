use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use regex::Captures;

use haru_core::CommandKind;

use crate::temporal;

/// Index of the quoted-title pattern within the create group.
const QUOTED_PATTERN: usize = 0;

/// Extract a title, an optional relative-day keyword and an optional hour.
///
/// The hour is read literally through the bare-hour path: "3시" becomes
/// 15:00 under the low-hour bias, but 저녁/아침/오후 keywords are not
/// consulted here, unlike full temporal resolution.
pub(super) fn build(
    captures: &Captures<'_>,
    text: &str,
    pattern_index: usize,
    reference: DateTime<Utc>,
    tz: Tz,
) -> CommandKind {
    let raw_title = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let title = if pattern_index == QUOTED_PATTERN {
        raw_title.trim().to_string()
    } else {
        super::clean_title(raw_title)
    };
    let title = if title.is_empty() {
        "새 일정".to_string()
    } else {
        title
    };

    let date = temporal::resolve_relative_date(text, reference, tz);
    let time = match temporal::extract_bare_hour(text) {
        Some(hour) => NaiveTime::from_hms_opt(temporal::resolve_bare_hour(hour), 0, 0)
            .unwrap_or_else(temporal::default_time),
        None => temporal::default_time(),
    };

    CommandKind::Create { title, date, time }
}
