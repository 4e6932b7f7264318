//! Pure state transition function
//!
//! Given the same state and command this always produces the same result,
//! with no I/O.

use super::command::{CommandKind, COMMANDS};
use super::{Command, Effect, ShellState};
use std::fmt::Write;
use thiserror::Error;

pub const GREETING: &str = "Hello, player!";
pub const GAME_STARTED: &str = "Game started!";
pub const FAREWELL: &str = "Goodbye!";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ShellState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ShellState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Session has terminated")]
    Terminated,
}

pub fn transition(state: ShellState, command: Command) -> Result<TransitionResult, TransitionError> {
    let ShellState::Running { started } = state else {
        return Err(TransitionError::Terminated);
    };

    let result = match command {
        Command::Hello => {
            let result = TransitionResult::new(ShellState::Running { started: true });
            if started {
                result.with_effect(Effect::reply(GREETING))
            } else {
                result
                    .with_effect(Effect::reply(GAME_STARTED))
                    .with_effect(Effect::reply(GREETING))
            }
        }

        Command::Help => TransitionResult::new(ShellState::Running { started: false })
            .with_effect(Effect::reply(help_text())),

        Command::Exit => {
            TransitionResult::new(ShellState::Terminated).with_effect(Effect::reply(FAREWELL))
        }

        Command::Track {
            subject,
            category,
            note,
        } => TransitionResult::new(state).with_effect(Effect::RecordEntry {
            subject,
            category,
            note,
        }),

        Command::Advice { category } => {
            TransitionResult::new(state).with_effect(Effect::ShowAdvice { category })
        }

        Command::History { subject, limit } => {
            TransitionResult::new(state).with_effect(Effect::ShowHistory { subject, limit })
        }

        Command::Subjects => TransitionResult::new(state).with_effect(Effect::ListSubjects),

        Command::Stats => TransitionResult::new(state).with_effect(Effect::ShowStats),

        Command::Usage(kind) => TransitionResult::new(state)
            .with_effect(Effect::reply(format!("Usage: {}", kind.spec().usage))),

        // Unknown input only produces a hint; it never alters state or the
        // next line read
        Command::Unknown(token) => {
            TransitionResult::new(state).with_effect(Effect::reply(unknown_hint(&token)))
        }
    };

    Ok(result)
}

fn unknown_hint(token: &str) -> String {
    if token.is_empty() {
        format!(
            "Unknown command. Type '{}' for a list of commands.",
            CommandKind::Help.spec().name
        )
    } else {
        format!(
            "Unknown command '{token}'. Type '{}' for a list of commands.",
            CommandKind::Help.spec().name
        )
    }
}

pub fn help_text() -> String {
    let mut text = String::from("Help: This is a simple mood tracking shell.\nAvailable commands:");
    for spec in COMMANDS {
        let _ = write!(text, "\n  {:<32} {}", spec.usage, spec.summary);
    }
    text
}
