use regex::Captures;

use haru_core::{CalendarView, CommandKind};

/// Map a view synonym to the fixed view enumeration. Unrecognized
/// combinations default to the day view.
pub(super) fn build(captures: &Captures<'_>) -> CommandKind {
    let view = captures
        .get(1)
        .map(|m| match m.as_str() {
            "주간" | "위클리" | "week" => CalendarView::Week,
            "월간" | "먼슬리" | "month" => CalendarView::Month,
            "라인" | "line" => CalendarView::Line,
            "플로우" | "흐름" | "flow" => CalendarView::Flow,
            _ => CalendarView::Day,
        })
        .unwrap_or(CalendarView::Day);

    CommandKind::ChangeView { view }
}
