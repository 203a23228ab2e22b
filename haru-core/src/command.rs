//! The interpreter's structured command contract.
//!
//! `Command` is what the classifier and builders hand to the executor: a
//! tagged union keyed by intent and sub-action, with a distinct payload per
//! variant, plus the matched pattern's confidence constant. Every command is
//! traceable to exactly one matched pattern.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::context::CalendarView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    /// Static match-specificity score in [0, 1]. Advisory only, never a gate.
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandKind {
    Navigate {
        date: NaiveDate,
    },
    ChangeView {
        view: CalendarView,
    },
    Create {
        title: String,
        date: NaiveDate,
        time: NaiveTime,
    },
    Edit {
        target: EventTarget,
        action: EditAction,
    },
    Delete {
        target: DeleteTarget,
    },
    Search {
        query: String,
    },
    Analyze {
        period: AnalyzePeriod,
        action: AnalyzeAction,
    },
}

impl CommandKind {
    /// Stable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::Navigate { .. } => "navigate",
            CommandKind::ChangeView { .. } => "view",
            CommandKind::Create { .. } => "create",
            CommandKind::Edit { .. } => "edit",
            CommandKind::Delete { .. } => "delete",
            CommandKind::Search { .. } => "search",
            CommandKind::Analyze { .. } => "analyze",
        }
    }
}

/// How an edit command finds its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTarget {
    /// The event currently selected in the UI
    Selected,
    /// First event whose title contains this substring (case-insensitive)
    TitleContains(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    /// Push the end later, keeping the start
    Extend { minutes: i64 },
    /// Shift start and end later, keeping the duration
    Postpone { minutes: i64 },
    /// Shift start and end earlier, keeping the duration
    Prepone { minutes: i64 },
    /// Replace the summary
    Rename { title: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteTarget {
    Selected,
    AllToday,
    TitleContains(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzePeriod {
    Today,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzeAction {
    Summary,
    FreeTime,
    BusyAnalysis,
}
