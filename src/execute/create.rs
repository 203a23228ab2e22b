use chrono::{Datelike, NaiveDate, NaiveTime};

use haru_core::{Animation, AnimationKind, ChatContext, CommandResult, Event, ResultData};

use crate::config::InterpreterConfig;
use crate::temporal;

/// Creation always succeeds: the new event gets a temporary id that the
/// backing store replaces once it persists the collection.
pub(super) fn handle(
    title: &str,
    date: NaiveDate,
    time: NaiveTime,
    context: &ChatContext,
    config: &InterpreterConfig,
) -> CommandResult {
    let start = temporal::to_instant(date, time, config.timezone);
    let event = Event::new_temporary(title, start, config.default_event_minutes);

    let mut updated = context.events.clone();
    updated.push(event.clone());

    CommandResult {
        data: Some(ResultData::Event(event)),
        updated_events: Some(updated),
        animation: Some(Animation {
            kind: AnimationKind::Zoom,
            duration_ms: config.zoom_duration_ms,
        }),
        ..CommandResult::ok(format!(
            "'{}' 일정을 {}월 {}일 {}에 추가했습니다.",
            title,
            date.month(),
            date.day(),
            time.format("%H:%M"),
        ))
    }
}
