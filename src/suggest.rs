//! Quick-action suggestion generation.
//!
//! A pure, read-only consumer of the context: two fixed strings keyed by the
//! local hour bucket, two selection-specific entries when a selection
//! resolves, one or two view-specific entries, and the generic add-event
//! entry, concatenated in that order and truncated to four.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use haru_core::{CalendarView, ChatContext};

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 4;

pub fn suggest(context: &ChatContext, reference: DateTime<Utc>, tz: Tz) -> Vec<String> {
    let hour = reference.with_timezone(&tz).hour();

    let mut suggestions: Vec<String> =
        time_bucket(hour).iter().map(|s| s.to_string()).collect();

    if let Some(event) = context.selected() {
        suggestions.push(format!("'{}' 30분 연장", event.summary));
        suggestions.push(format!("'{}' 삭제", event.summary));
    }

    suggestions.extend(
        view_suggestions(context.current_view)
            .iter()
            .map(|s| s.to_string()),
    );
    suggestions.push("새 일정 추가".to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn time_bucket(hour: u32) -> [&'static str; 2] {
    match hour {
        0..=8 => ["오늘 일정 요약", "오늘 빈 시간 찾아줘"],
        9..=11 => ["오늘 빈 시간 찾아줘", "주간 보기"],
        12..=17 => ["오늘 일정 요약", "내일로 이동"],
        _ => ["내일로 이동", "이번 주 일정 요약"],
    }
}

fn view_suggestions(view: CalendarView) -> &'static [&'static str] {
    match view {
        CalendarView::Day => &["주간 보기", "월간 보기"],
        CalendarView::Week => &["월간 보기"],
        CalendarView::Month => &["일간 보기"],
        CalendarView::Line => &["플로우 보기"],
        CalendarView::Flow => &["라인 보기"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use haru_core::{Event, EventStatus, EventTime};

    use crate::temporal;

    const SEOUL: Tz = chrono_tz::Asia::Seoul;

    fn at_hour(hour: u32) -> DateTime<Utc> {
        temporal::to_instant(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            SEOUL,
        )
    }

    fn event(id: &str, summary: &str) -> Event {
        Event {
            id: id.to_string(),
            summary: summary.to_string(),
            description: None,
            location: None,
            start: EventTime::DateTime(at_hour(10)),
            end: EventTime::DateTime(at_hour(11)),
            status: EventStatus::Confirmed,
            recurrence: None,
            attendees: vec![],
        }
    }

    #[test]
    fn test_at_most_four_suggestions() {
        let mut ctx = ChatContext::new(vec![event("a", "팀 회의")]);
        ctx.selected_event = Some("a".to_string());

        let suggestions = suggest(&ctx, at_hour(10), SEOUL);
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn test_selection_entries_follow_the_time_bucket() {
        let mut ctx = ChatContext::new(vec![event("a", "팀 회의")]);
        ctx.selected_event = Some("a".to_string());

        let suggestions = suggest(&ctx, at_hour(14), SEOUL);
        assert_eq!(
            suggestions,
            vec![
                "오늘 일정 요약",
                "내일로 이동",
                "'팀 회의' 30분 연장",
                "'팀 회의' 삭제",
            ]
        );
    }

    #[test]
    fn test_without_selection_view_and_generic_entries_fit() {
        let ctx = ChatContext::new(vec![]);

        let suggestions = suggest(&ctx, at_hour(14), SEOUL);
        assert_eq!(
            suggestions,
            vec!["오늘 일정 요약", "내일로 이동", "주간 보기", "월간 보기"]
        );
    }

    #[test]
    fn test_single_view_suggestion_leaves_room_for_the_generic_entry() {
        let mut ctx = ChatContext::new(vec![]);
        ctx.current_view = CalendarView::Week;

        let suggestions = suggest(&ctx, at_hour(14), SEOUL);
        assert_eq!(
            suggestions,
            vec!["오늘 일정 요약", "내일로 이동", "월간 보기", "새 일정 추가"]
        );
    }

    #[test]
    fn test_hour_buckets_pick_distinct_base_pairs() {
        let ctx = ChatContext::new(vec![]);

        assert_eq!(
            suggest(&ctx, at_hour(7), SEOUL)[..2],
            ["오늘 일정 요약".to_string(), "오늘 빈 시간 찾아줘".to_string()]
        );
        assert_eq!(
            suggest(&ctx, at_hour(10), SEOUL)[..2],
            ["오늘 빈 시간 찾아줘".to_string(), "주간 보기".to_string()]
        );
        assert_eq!(
            suggest(&ctx, at_hour(20), SEOUL)[..2],
            ["내일로 이동".to_string(), "이번 주 일정 요약".to_string()]
        );
    }

    #[test]
    fn test_identical_input_yields_identical_output() {
        let ctx = ChatContext::new(vec![]);
        assert_eq!(suggest(&ctx, at_hour(10), SEOUL), suggest(&ctx, at_hour(10), SEOUL));
    }

    #[test]
    fn test_stale_selection_contributes_nothing() {
        let mut ctx = ChatContext::new(vec![]);
        ctx.selected_event = Some("gone".to_string());

        let suggestions = suggest(&ctx, at_hour(14), SEOUL);
        assert!(suggestions.iter().all(|s| !s.contains("삭제")));
    }
}
