//! Ambient per-call state supplied by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Calendar presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    Week,
    Month,
    Line,
    Flow,
}

impl CalendarView {
    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "일간",
            CalendarView::Week => "주간",
            CalendarView::Month => "월간",
            CalendarView::Line => "라인",
            CalendarView::Flow => "플로우",
        }
    }
}

/// Ambient state for one interpretation call.
///
/// Constructed fresh by the caller for every command. The interpreter never
/// mutates it; all effects come back as `updated_events` in the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatContext {
    pub current_view: CalendarView,
    /// Id of the event currently selected in the UI, if any
    pub selected_event: Option<String>,
    pub selected_date: Option<NaiveDate>,
    /// The full current event collection, owned by the caller's store
    pub events: Vec<Event>,
}

impl ChatContext {
    pub fn new(events: Vec<Event>) -> Self {
        ChatContext {
            current_view: CalendarView::Day,
            selected_event: None,
            selected_date: None,
            events,
        }
    }

    /// Resolve the selected id against the event collection.
    pub fn selected(&self) -> Option<&Event> {
        let id = self.selected_event.as_deref()?;
        self.events.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventStatus, EventTime};
    use chrono::{TimeZone, Utc};

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            summary: "회의".to_string(),
            description: None,
            location: None,
            start: EventTime::DateTime(Utc.with_ymd_and_hms(2025, 1, 1, 1, 0, 0).unwrap()),
            end: EventTime::DateTime(Utc.with_ymd_and_hms(2025, 1, 1, 2, 0, 0).unwrap()),
            status: EventStatus::Confirmed,
            recurrence: None,
            attendees: vec![],
        }
    }

    #[test]
    fn test_selected_resolves_id() {
        let mut ctx = ChatContext::new(vec![event("a"), event("b")]);
        ctx.selected_event = Some("b".to_string());
        assert_eq!(ctx.selected().map(|e| e.id.as_str()), Some("b"));
    }

    #[test]
    fn test_selected_is_none_for_stale_id() {
        let mut ctx = ChatContext::new(vec![event("a")]);
        ctx.selected_event = Some("gone".to_string());
        assert!(ctx.selected().is_none());
    }
}
