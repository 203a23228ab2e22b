use chrono::Duration;

use haru_core::{ChatContext, CommandResult, EditAction, Event, EventTarget, EventTime, ResultData};

/// Resolve the target event and apply the edit, rebuilding the collection
/// with the modified copy in place. A target that resolves to nothing fails
/// without touching the collection.
pub(super) fn handle(
    target: &EventTarget,
    action: &EditAction,
    context: &ChatContext,
) -> CommandResult {
    let found = match target {
        EventTarget::Selected => context.selected(),
        EventTarget::TitleContains(query) => find_by_title(&context.events, query),
    };

    let Some(event) = found else {
        return CommandResult::rejected(not_found_message(target));
    };

    let (edited, message) = match action {
        EditAction::Rename { title } => {
            let mut edited = event.clone();
            let message = format!(
                "'{}' 일정의 이름을 '{}'(으)로 변경했습니다.",
                edited.summary, title
            );
            edited.summary = title.clone();
            (edited, message)
        }
        EditAction::Extend { minutes } => {
            let Some(end) = event.end.to_utc() else {
                return CommandResult::rejected(ALL_DAY_MESSAGE);
            };
            let mut edited = event.clone();
            edited.end = EventTime::DateTime(end + Duration::minutes(*minutes));
            let message = format!("'{}' 일정을 {}분 연장했습니다.", edited.summary, minutes);
            (edited, message)
        }
        EditAction::Postpone { minutes } => match shift(event, *minutes) {
            Some(edited) => {
                let message =
                    format!("'{}' 일정을 {}분 뒤로 미뤘습니다.", edited.summary, minutes);
                (edited, message)
            }
            None => return CommandResult::rejected(ALL_DAY_MESSAGE),
        },
        EditAction::Prepone { minutes } => match shift(event, -*minutes) {
            Some(edited) => {
                let message = format!("'{}' 일정을 {}분 앞당겼습니다.", edited.summary, minutes);
                (edited, message)
            }
            None => return CommandResult::rejected(ALL_DAY_MESSAGE),
        },
    };

    let updated = context
        .events
        .iter()
        .map(|e| if e.id == edited.id { edited.clone() } else { e.clone() })
        .collect();

    CommandResult {
        data: Some(ResultData::Event(edited)),
        updated_events: Some(updated),
        ..CommandResult::ok(message)
    }
}

const ALL_DAY_MESSAGE: &str = "시간이 지정된 일정만 옮길 수 있습니다.";

/// Move start and end together, preserving the duration. None for all-day
/// events, which have no wall-clock boundaries to shift.
fn shift(event: &Event, minutes: i64) -> Option<Event> {
    let start = event.start.to_utc()?;
    let end = event.end.to_utc()?;

    let mut edited = event.clone();
    edited.start = EventTime::DateTime(start + Duration::minutes(minutes));
    edited.end = EventTime::DateTime(end + Duration::minutes(minutes));
    Some(edited)
}

fn find_by_title<'a>(events: &'a [Event], query: &str) -> Option<&'a Event> {
    if query.is_empty() {
        return None;
    }
    let q = query.to_lowercase();
    events.iter().find(|e| e.summary.to_lowercase().contains(&q))
}

fn not_found_message(target: &EventTarget) -> String {
    match target {
        EventTarget::Selected => "선택한 일정을 찾을 수 없습니다.".to_string(),
        EventTarget::TitleContains(query) if query.is_empty() => {
            "수정할 일정을 찾지 못했습니다.".to_string()
        }
        EventTarget::TitleContains(query) => {
            format!("'{}'에 해당하는 일정을 찾지 못했습니다.", query)
        }
    }
}
