//! Executor output types.
//!
//! A `CommandResult` carries everything the surrounding application needs to
//! react to one interpreted command: display text, an optional payload, the
//! replacement event collection when the set changed, and the navigation and
//! animation directives the rendering layer consumes.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::context::CalendarView;
use crate::event::Event;

/// The outcome of one interpreted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    /// Display-ready confirmation or rejection text
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultData>,
    /// New full event collection; present only when the set changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_events: Option<Vec<Event>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>) -> CommandResult {
        CommandResult {
            success: true,
            message: message.into(),
            data: None,
            updated_events: None,
            navigation: None,
            animation: None,
        }
    }

    /// A rejected command: nothing changed, the message says why.
    pub fn rejected(message: impl Into<String>) -> CommandResult {
        CommandResult {
            success: false,
            ..CommandResult::ok(message)
        }
    }

    /// Serialize for the UI-facing message channel.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Command-specific payload; the consumer branches on the command kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultData {
    Event(Event),
    Events(Vec<Event>),
    FreeSlots(Vec<FreeSlot>),
    Summary(ScheduleSummary),
    Busy(BusyReport),
}

/// A gap between busy intervals, as wall-clock times on the analyzed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub event_count: usize,
    /// Sum of timed event durations; all-day events are excluded
    pub total_minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyReport {
    pub event_count: usize,
    /// Overlap-free busy minutes within the working window
    pub busy_minutes: i64,
    pub window_minutes: i64,
}

/// Where the UI should move after this command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<CalendarView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Transition hint consumed by the rendering layer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Slide,
    Fade,
    Zoom,
}
