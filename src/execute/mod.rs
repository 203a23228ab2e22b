//! Command execution against the caller's event collection.
//!
//! Handlers are pure: `context.events` is never mutated in place; whenever
//! the event set changes, a fresh collection comes back in
//! `updated_events` so callers can rely on change detection.

mod analyze;
mod create;
mod delete;
mod edit;
mod navigate;
mod search;
mod view;

use chrono::{DateTime, Utc};
use tracing::debug;

use haru_core::{ChatContext, Command, CommandKind, CommandResult};

use crate::config::InterpreterConfig;

pub fn execute(
    command: &Command,
    context: &ChatContext,
    reference: DateTime<Utc>,
    config: &InterpreterConfig,
) -> CommandResult {
    let result = match &command.kind {
        CommandKind::Navigate { date } => navigate::handle(*date, config),
        CommandKind::ChangeView { view } => view::handle(*view, config),
        CommandKind::Create { title, date, time } => {
            create::handle(title, *date, *time, context, config)
        }
        CommandKind::Edit { target, action } => edit::handle(target, action, context),
        CommandKind::Delete { target } => delete::handle(target, context, reference, config),
        CommandKind::Search { query } => search::handle(query, context),
        CommandKind::Analyze { period, action } => {
            analyze::handle(*period, *action, context, reference, config)
        }
    };

    debug!(
        command = command.kind.label(),
        success = result.success,
        "executed command"
    );
    result
}
