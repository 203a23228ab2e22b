use regex::Captures;

use haru_core::{ChatContext, CommandKind, DeleteTarget};

/// Targets, in specificity order: the selection, all events today, then a
/// title substring.
pub(super) fn build(captures: &Captures<'_>, text: &str, context: &ChatContext) -> CommandKind {
    let lower = text.to_lowercase();

    let target = if text.contains("선택") || lower.contains("selected") {
        if context.selected().is_some() {
            DeleteTarget::Selected
        } else {
            // A selection reference without a live selection deletes nothing
            DeleteTarget::TitleContains(String::new())
        }
    } else if captures.get(1).is_none() && text.contains("오늘") {
        DeleteTarget::AllToday
    } else {
        let title = captures
            .get(1)
            .map(|m| super::clean_target(m.as_str()))
            .unwrap_or_default();
        DeleteTarget::TitleContains(title)
    };

    CommandKind::Delete { target }
}
