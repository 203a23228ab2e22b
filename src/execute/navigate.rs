use chrono::{Datelike, NaiveDate};

use haru_core::{Animation, AnimationKind, CommandResult, Navigation};

use crate::config::InterpreterConfig;

pub(super) fn handle(date: NaiveDate, config: &InterpreterConfig) -> CommandResult {
    CommandResult {
        navigation: Some(Navigation {
            view: None,
            date: Some(date),
        }),
        animation: Some(Animation {
            kind: AnimationKind::Slide,
            duration_ms: config.slide_duration_ms,
        }),
        ..CommandResult::ok(format!("{}월 {}일로 이동합니다.", date.month(), date.day()))
    }
}
