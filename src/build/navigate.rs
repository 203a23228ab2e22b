use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use regex::Captures;

use haru_core::CommandKind;

/// Resolve the navigation target: a relative keyword or an explicit
/// month/day in the reference year. Invalid month/day combinations degrade
/// to the reference date.
pub(super) fn build(captures: &Captures<'_>, reference: DateTime<Utc>, tz: Tz) -> CommandKind {
    let today = reference.with_timezone(&tz).date_naive();

    // The explicit month/day form carries a second numeric capture.
    if let Some(day) = captures.get(2) {
        let month: u32 = captures
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let day: u32 = day.as_str().parse().unwrap_or(0);
        let date = NaiveDate::from_ymd_opt(today.year(), month, day).unwrap_or(today);
        return CommandKind::Navigate { date };
    }

    let keyword = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let date = match keyword {
        "내일" | "tomorrow" => today + Duration::days(1),
        k if k.starts_with("다음") || k == "next week" => today + Duration::days(7),
        _ => today,
    };

    CommandKind::Navigate { date }
}
