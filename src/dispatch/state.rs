//! Shell state

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellState {
    /// Accepting commands. `started` tracks whether the game greeting has
    /// been shown since the last `help`.
    Running { started: bool },
    Terminated,
}

impl ShellState {
    pub fn is_terminated(self) -> bool {
        matches!(self, ShellState::Terminated)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        ShellState::Running { started: true }
    }
}
