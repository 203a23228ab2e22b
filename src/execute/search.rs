use haru_core::{ChatContext, CommandResult, Event, ResultData};

/// Case-insensitive substring match over summary, description and location.
/// The collection is never changed by a search.
pub(super) fn handle(query: &str, context: &ChatContext) -> CommandResult {
    let matches: Vec<Event> = context
        .events
        .iter()
        .filter(|e| e.matches_query(query))
        .cloned()
        .collect();

    let message = if matches.is_empty() {
        format!("'{}' 검색 결과가 없습니다.", query)
    } else {
        format!("'{}' 검색 결과 {}건을 찾았습니다.", query, matches.len())
    };

    CommandResult {
        data: Some(ResultData::Events(matches)),
        ..CommandResult::ok(message)
    }
}
