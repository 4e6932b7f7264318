//! Command dispatcher for the interactive shell
//!
//! Pure state transitions produce effects; the [`Shell`] executes them
//! against the session store and advice table.

pub mod command;
mod effect;
mod shell;
mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use command::{Command, CommandKind, COMMANDS};
pub use effect::Effect;
pub use shell::{Shell, ShellError, ShellStatus, PROMPT};
pub use state::ShellState;
pub use transition::{transition, TransitionError, TransitionResult};
