//! The interpretation pipeline: classify, build, execute.

use chrono::{DateTime, Utc};
use tracing::debug;

use haru_core::{ChatContext, CommandResult};

use crate::config::InterpreterConfig;
use crate::{build, classify, execute, suggest};

/// The natural-language command interpreter.
///
/// An ordinary stateless value: construct one wherever the calling layer
/// lives and share it freely. All per-call state arrives through the
/// `ChatContext`, and all effects leave through the `CommandResult`.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Interpreter {
        Interpreter { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret one command synchronously.
    ///
    /// Never returns an error: unrecognized input comes back as a rejected
    /// result with a could-not-understand message.
    pub fn interpret(
        &self,
        text: &str,
        context: &ChatContext,
        now: DateTime<Utc>,
    ) -> CommandResult {
        let text = text.trim();

        let Some(classification) = classify::classify(text) else {
            return CommandResult::rejected("명령을 이해하지 못했어요. 다시 한 번 말씀해 주세요.");
        };

        let command = build::build(&classification, text, context, now, self.config.timezone);
        debug!(
            command = command.kind.label(),
            confidence = command.confidence,
            "built command"
        );

        execute::execute(&command, context, now, &self.config)
    }

    /// Async boundary for call-signature consistency with the surrounding
    /// application. The core performs no I/O and has no suspension points.
    pub async fn process_command(
        &self,
        text: &str,
        context: &ChatContext,
        now: DateTime<Utc>,
    ) -> CommandResult {
        self.interpret(text, context, now)
    }

    /// Likely next commands for the current context, at most four.
    pub fn suggestions(&self, context: &ChatContext, now: DateTime<Utc>) -> Vec<String> {
        suggest::suggest(context, now, self.config.timezone)
    }
}
