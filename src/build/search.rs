use regex::Captures;

use haru_core::CommandKind;

/// Extract the free-text query; matching is the executor's job.
pub(super) fn build(captures: &Captures<'_>) -> CommandKind {
    let query = captures
        .get(1)
        .map(|m| super::clean_target(m.as_str()))
        .unwrap_or_default();

    CommandKind::Search { query }
}
