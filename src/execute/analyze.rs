use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use haru_core::{
    AnalyzeAction, AnalyzePeriod, BusyReport, ChatContext, CommandResult, Event, EventTime,
    FreeSlot, ResultData, ScheduleSummary,
};

use crate::config::InterpreterConfig;
use crate::temporal;

pub(super) fn handle(
    period: AnalyzePeriod,
    action: AnalyzeAction,
    context: &ChatContext,
    reference: DateTime<Utc>,
    config: &InterpreterConfig,
) -> CommandResult {
    let tz = config.timezone;
    let today = reference.with_timezone(&tz).date_naive();
    let span_days = match period {
        AnalyzePeriod::Today => 1,
        AnalyzePeriod::Week => 7,
    };
    let (window_start, _) = temporal::day_bounds(today, tz);
    let (_, window_end) = temporal::day_bounds(today + Duration::days(span_days - 1), tz);

    // Events without a recognizable start are skipped, not surfaced as
    // errors.
    let in_period: Vec<&Event> = context
        .events
        .iter()
        .filter(|e| match &e.start {
            EventTime::DateTime(dt) => *dt >= window_start && *dt < window_end,
            EventTime::Date(d) => *d >= today && *d < today + Duration::days(span_days),
        })
        .collect();

    let period_label = match period {
        AnalyzePeriod::Today => "오늘",
        AnalyzePeriod::Week => "이번 주",
    };

    match action {
        AnalyzeAction::Summary => summary(&in_period, period_label),
        AnalyzeAction::FreeTime => free_time(&in_period, today, tz, config),
        AnalyzeAction::BusyAnalysis => busy_analysis(&in_period, today, tz, config, period_label),
    }
}

/// Event count plus total scheduled hours; all-day events count toward the
/// total but not the hour sum.
fn summary(events: &[&Event], period_label: &str) -> CommandResult {
    let event_count = events.len();
    let total_minutes: i64 = events.iter().filter_map(|e| e.duration_minutes()).sum();

    CommandResult {
        data: Some(ResultData::Summary(ScheduleSummary {
            event_count,
            total_minutes,
        })),
        ..CommandResult::ok(format!(
            "{} 일정은 {}개, 총 {:.1}시간입니다.",
            period_label,
            event_count,
            total_minutes as f64 / 60.0,
        ))
    }
}

/// Gaps between busy intervals inside the working window, anchored to the
/// reference date.
fn free_time(
    events: &[&Event],
    today: chrono::NaiveDate,
    tz: Tz,
    config: &InterpreterConfig,
) -> CommandResult {
    let window_start = temporal::to_instant(today, config.work_start, tz);
    let window_end = temporal::to_instant(today, config.work_end, tz);

    let mut slots = Vec::new();
    let mut cursor = window_start;
    for (start, end) in busy_intervals(events, window_start, window_end) {
        if start > cursor {
            slots.push(FreeSlot {
                start: cursor.with_timezone(&tz).time(),
                end: start.with_timezone(&tz).time(),
            });
        }
        cursor = cursor.max(end);
    }
    if cursor < window_end {
        slots.push(FreeSlot {
            start: cursor.with_timezone(&tz).time(),
            end: window_end.with_timezone(&tz).time(),
        });
    }

    let message = if slots.is_empty() {
        "오늘은 빈 시간이 없습니다.".to_string()
    } else {
        let listed: Vec<String> = slots
            .iter()
            .map(|s| format!("{}~{}", s.start.format("%H:%M"), s.end.format("%H:%M")))
            .collect();
        format!("빈 시간 {}개를 찾았습니다: {}", slots.len(), listed.join(", "))
    };

    CommandResult {
        data: Some(ResultData::FreeSlots(slots)),
        ..CommandResult::ok(message)
    }
}

/// Load ratio over the working window, with a tiered verdict.
fn busy_analysis(
    events: &[&Event],
    today: chrono::NaiveDate,
    tz: Tz,
    config: &InterpreterConfig,
    period_label: &str,
) -> CommandResult {
    let window_start = temporal::to_instant(today, config.work_start, tz);
    let window_end = temporal::to_instant(today, config.work_end, tz);
    let window_minutes = (window_end - window_start).num_minutes();

    // Walk the sorted intervals so overlaps are not double counted.
    let mut busy_minutes = 0;
    let mut cursor = window_start;
    for (start, end) in busy_intervals(events, window_start, window_end) {
        let from = start.max(cursor);
        if end > from {
            busy_minutes += (end - from).num_minutes();
        }
        cursor = cursor.max(end);
    }

    let percent = if window_minutes > 0 {
        busy_minutes * 100 / window_minutes
    } else {
        0
    };
    let verdict = if percent < 30 {
        "여유로운 편입니다."
    } else if percent < 70 {
        "적당히 바쁩니다."
    } else {
        "매우 바쁜 하루입니다."
    };

    CommandResult {
        data: Some(ResultData::Busy(BusyReport {
            event_count: events.len(),
            busy_minutes,
            window_minutes,
        })),
        ..CommandResult::ok(format!(
            "{} 일정 {}개, 근무 시간의 {}%가 차 있습니다. {}",
            period_label,
            events.len(),
            percent,
            verdict,
        ))
    }
}

/// Timed events clipped to the window, sorted by start.
fn busy_intervals(
    events: &[&Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = events
        .iter()
        .filter_map(|e| {
            let start = e.start.to_utc()?.max(window_start);
            let end = e.end.to_utc()?.min(window_end);
            (start < end).then_some((start, end))
        })
        .collect();
    intervals.sort_by_key(|(start, _)| *start);
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use haru_core::EventStatus;

    const SEOUL: Tz = chrono_tz::Asia::Seoul;

    fn seoul_event(id: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
        let start = temporal::to_instant(
            date,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            SEOUL,
        );
        let end = temporal::to_instant(
            date,
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            SEOUL,
        );
        Event {
            id: id.to_string(),
            summary: format!("일정 {}", id),
            description: None,
            location: None,
            start: EventTime::DateTime(start),
            end: EventTime::DateTime(end),
            status: EventStatus::Confirmed,
            recurrence: None,
            attendees: vec![],
        }
    }

    fn reference() -> DateTime<Utc> {
        temporal::to_instant(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            SEOUL,
        )
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_free_time_splits_around_one_meeting() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ctx = ChatContext::new(vec![seoul_event("a", today, (10, 0), (11, 0))]);

        let result = handle(
            AnalyzePeriod::Today,
            AnalyzeAction::FreeTime,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        assert!(result.success);
        match result.data {
            Some(ResultData::FreeSlots(slots)) => {
                assert_eq!(
                    slots,
                    vec![
                        FreeSlot {
                            start: time(9, 0),
                            end: time(10, 0)
                        },
                        FreeSlot {
                            start: time(11, 0),
                            end: time(18, 0)
                        },
                    ]
                );
            }
            other => panic!("expected free slots, got {:?}", other),
        }
    }

    #[test]
    fn test_free_time_with_empty_day_is_the_whole_window() {
        let ctx = ChatContext::new(vec![]);
        let result = handle(
            AnalyzePeriod::Today,
            AnalyzeAction::FreeTime,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        match result.data {
            Some(ResultData::FreeSlots(slots)) => {
                assert_eq!(
                    slots,
                    vec![FreeSlot {
                        start: time(9, 0),
                        end: time(18, 0)
                    }]
                );
            }
            other => panic!("expected free slots, got {:?}", other),
        }
    }

    #[test]
    fn test_free_time_with_overlapping_meetings_merges_busy_blocks() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ctx = ChatContext::new(vec![
            seoul_event("a", today, (10, 0), (12, 0)),
            seoul_event("b", today, (11, 0), (13, 0)),
        ]);

        let result = handle(
            AnalyzePeriod::Today,
            AnalyzeAction::FreeTime,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        match result.data {
            Some(ResultData::FreeSlots(slots)) => {
                assert_eq!(
                    slots,
                    vec![
                        FreeSlot {
                            start: time(9, 0),
                            end: time(10, 0)
                        },
                        FreeSlot {
                            start: time(13, 0),
                            end: time(18, 0)
                        },
                    ]
                );
            }
            other => panic!("expected free slots, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_counts_events_and_sums_timed_hours() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut all_day = seoul_event("c", today, (0, 0), (0, 0));
        all_day.start = EventTime::Date(today);
        all_day.end = EventTime::Date(today + Duration::days(1));

        let ctx = ChatContext::new(vec![
            seoul_event("a", today, (10, 0), (11, 0)),
            seoul_event("b", today, (14, 0), (15, 30)),
            all_day,
        ]);

        let result = handle(
            AnalyzePeriod::Today,
            AnalyzeAction::Summary,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        assert!(result.success);
        assert_eq!(result.message, "오늘 일정은 3개, 총 2.5시간입니다.");
        match result.data {
            Some(ResultData::Summary(summary)) => {
                assert_eq!(summary.event_count, 3);
                assert_eq!(summary.total_minutes, 150);
            }
            other => panic!("expected summary, got {:?}", other),
        }
    }

    #[test]
    fn test_week_period_includes_later_days() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let in_week = today + Duration::days(5);
        let next_month = today + Duration::days(20);

        let ctx = ChatContext::new(vec![
            seoul_event("a", today, (10, 0), (11, 0)),
            seoul_event("b", in_week, (10, 0), (11, 0)),
            seoul_event("c", next_month, (10, 0), (11, 0)),
        ]);

        let result = handle(
            AnalyzePeriod::Week,
            AnalyzeAction::Summary,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        match result.data {
            Some(ResultData::Summary(summary)) => assert_eq!(summary.event_count, 2),
            other => panic!("expected summary, got {:?}", other),
        }
    }

    #[test]
    fn test_busy_analysis_reports_window_load() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        // 4.5 of 9 working hours are busy
        let ctx = ChatContext::new(vec![
            seoul_event("a", today, (9, 0), (12, 0)),
            seoul_event("b", today, (13, 0), (14, 30)),
        ]);

        let result = handle(
            AnalyzePeriod::Today,
            AnalyzeAction::BusyAnalysis,
            &ctx,
            reference(),
            &InterpreterConfig::default(),
        );

        assert!(result.success);
        assert_eq!(
            result.message,
            "오늘 일정 2개, 근무 시간의 50%가 차 있습니다. 적당히 바쁩니다."
        );
        match result.data {
            Some(ResultData::Busy(report)) => {
                assert_eq!(report.busy_minutes, 270);
                assert_eq!(report.window_minutes, 540);
            }
            other => panic!("expected busy report, got {:?}", other),
        }
    }
}
