use regex::Captures;

use haru_core::{ChatContext, CommandKind, EditAction, EventTarget};

/// Determine the sub-action from keyword presence, the magnitude from the
/// captured amount and unit, and the target from the selection reference or
/// the text preceding the match.
pub(super) fn build(captures: &Captures<'_>, text: &str, context: &ChatContext) -> CommandKind {
    let action = if text.contains("연장") || text.contains("늘려") {
        EditAction::Extend {
            minutes: magnitude(captures),
        }
    } else if text.contains("미뤄") || text.contains("연기") || text.contains("늦춰") {
        EditAction::Postpone {
            minutes: magnitude(captures),
        }
    } else if text.contains("당겨") || text.contains("앞당겨") {
        EditAction::Prepone {
            minutes: magnitude(captures),
        }
    } else {
        EditAction::Rename {
            title: captures
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        }
    };

    CommandKind::Edit {
        target: resolve_target(captures, text, context),
        action,
    }
}

/// Amount converted to minutes; 시간 units are scaled by 60.
fn magnitude(captures: &Captures<'_>) -> i64 {
    let amount: i64 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(30);
    let unit = captures.get(2).map(|m| m.as_str()).unwrap_or("분");

    if unit == "시간" { amount * 60 } else { amount }
}

fn resolve_target(captures: &Captures<'_>, text: &str, context: &ChatContext) -> EventTarget {
    let lower = text.to_lowercase();
    if (text.contains("선택") || lower.contains("selected")) && context.selected().is_some() {
        return EventTarget::Selected;
    }

    // Everything before the matched fragment names the event.
    let prefix_end = captures.get(0).map(|m| m.start()).unwrap_or(0);
    EventTarget::TitleContains(super::clean_target(&text[..prefix_end]))
}
