use chrono::{DateTime, Utc};

use haru_core::{ChatContext, CommandResult, DeleteTarget, Event};

use crate::config::InterpreterConfig;

/// Remove every event the target names. Zero removals is a failed command,
/// not an error, and the collection stays untouched.
pub(super) fn handle(
    target: &DeleteTarget,
    context: &ChatContext,
    reference: DateTime<Utc>,
    config: &InterpreterConfig,
) -> CommandResult {
    let keep: Vec<Event> = match target {
        DeleteTarget::Selected => match context.selected() {
            Some(selected) => {
                let id = selected.id.clone();
                context
                    .events
                    .iter()
                    .filter(|e| e.id != id)
                    .cloned()
                    .collect()
            }
            None => context.events.clone(),
        },
        DeleteTarget::AllToday => {
            let today = reference.with_timezone(&config.timezone).date_naive();
            context
                .events
                .iter()
                .filter(|e| !e.starts_on(today, config.timezone))
                .cloned()
                .collect()
        }
        DeleteTarget::TitleContains(query) if !query.is_empty() => {
            let q = query.to_lowercase();
            context
                .events
                .iter()
                .filter(|e| !e.summary.to_lowercase().contains(&q))
                .cloned()
                .collect()
        }
        DeleteTarget::TitleContains(_) => context.events.clone(),
    };

    let removed = context.events.len() - keep.len();
    if removed == 0 {
        return CommandResult::rejected("삭제할 일정을 찾지 못했습니다.");
    }

    CommandResult {
        updated_events: Some(keep),
        ..CommandResult::ok(format!("일정 {}개를 삭제했습니다.", removed))
    }
}
