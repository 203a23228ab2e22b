//! Provider-neutral calendar event types.
//!
//! These types represent calendar events the way the surrounding application
//! stores them. The interpreter only reads them and returns transformed
//! copies; nothing here touches a backing store.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub status: EventStatus,

    /// RRULE lines for recurring events, carried opaquely
    #[serde(default)]
    pub recurrence: Option<Vec<String>>,

    /// Event attendees/participants
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

/// An event attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Response status: "accepted", "declined", "tentative", "needsAction"
    pub response_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
}

impl EventTime {
    /// The instant of a timed event; None for all-day dates.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            EventTime::DateTime(dt) => Some(*dt),
            EventTime::Date(_) => None,
        }
    }

    /// The calendar date of this time in the given zone.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        match self {
            EventTime::DateTime(dt) => dt.with_timezone(&tz).date_naive(),
            EventTime::Date(d) => *d,
        }
    }
}

impl Event {
    /// Build the synthetic event a create command appends: confirmed, with a
    /// temporary identifier the backing store replaces on persist.
    pub fn new_temporary(summary: &str, start: DateTime<Utc>, duration_minutes: i64) -> Event {
        Event {
            id: format!("temp-{}", Uuid::new_v4()),
            summary: summary.to_string(),
            description: None,
            location: None,
            start: EventTime::DateTime(start),
            end: EventTime::DateTime(start + Duration::minutes(duration_minutes)),
            status: EventStatus::Confirmed,
            recurrence: None,
            attendees: vec![],
        }
    }

    /// Scheduled length in minutes; None when either side is an all-day date.
    pub fn duration_minutes(&self) -> Option<i64> {
        match (self.start.to_utc(), self.end.to_utc()) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }

    /// Whether the event starts on the given calendar date in the given zone.
    pub fn starts_on(&self, date: NaiveDate, tz: Tz) -> bool {
        self.start.local_date(tz) == date
    }

    /// Case-insensitive substring match over summary, description and
    /// location. An empty query never matches.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        let q = query.to_lowercase();
        self.summary.to_lowercase().contains(&q)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&q))
            || self
                .location
                .as_ref()
                .is_some_and(|l| l.to_lowercase().contains(&q))
    }
}
