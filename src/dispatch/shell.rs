//! Line-oriented shell that executes transition effects

use super::{transition, Command, Effect, ShellState, TransitionError};
use crate::advice::AdviceTable;
use crate::analytics::summarize;
use crate::mood::{emoji_for, label_for};
use crate::session::{SessionError, SessionStore};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;

pub const PROMPT: &str = "Enter a command (type 'exit' to quit): ";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    Running,
    Terminated,
}

pub struct Shell<W> {
    state: ShellState,
    store: SessionStore,
    advice: Arc<AdviceTable>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(store: SessionStore, advice: Arc<AdviceTable>, out: W) -> Self {
        Self {
            state: ShellState::default(),
            store,
            advice,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Handle one line of input
    pub fn submit(&mut self, line: &str) -> Result<ShellStatus, ShellError> {
        let command = Command::parse(line);
        tracing::debug!(kind = ?command.kind(), "Dispatching shell command");

        let result = transition(self.state, command)?;
        self.state = result.new_state;

        for effect in result.effects {
            self.execute(effect)?;
        }
        self.out.flush()?;

        Ok(if self.state.is_terminated() {
            ShellStatus::Terminated
        } else {
            ShellStatus::Running
        })
    }

    fn execute(&mut self, effect: Effect) -> std::io::Result<()> {
        match effect {
            Effect::Reply(text) => writeln!(self.out, "{text}"),

            Effect::RecordEntry {
                subject,
                category,
                note,
            } => match self.store.record(&subject, &category, &note) {
                Ok(entry) => {
                    writeln!(self.out, "✅ Mood tracked successfully for {}!", entry.subject_id)?;
                    writeln!(self.out, "💡 {}", self.advice.advice_for(&entry.category))
                }
                Err(SessionError::EmptySubject) => {
                    writeln!(self.out, "⚠️ Please enter your name to continue.")
                }
            },

            Effect::ShowAdvice { category } => writeln!(
                self.out,
                "{} {}",
                emoji_for(&category),
                self.advice.advice_for(&category)
            ),

            Effect::ShowHistory { subject, limit } => {
                let entries = self.store.entries_for(&subject);
                if entries.is_empty() {
                    return writeln!(self.out, "📝 No mood data yet for {subject}.");
                }
                writeln!(self.out, "Recent mood entries for {subject}:")?;
                for entry in entries.iter().take(limit) {
                    let note = if entry.note.is_empty() {
                        "*No notes*"
                    } else {
                        entry.note.as_str()
                    };
                    writeln!(
                        self.out,
                        "  {} {} — {note}",
                        entry.date.format("%Y-%m-%d"),
                        label_for(&entry.category)
                    )?;
                }
                Ok(())
            }

            Effect::ListSubjects => {
                let mut subjects: Vec<_> = self.store.list_subjects().into_iter().collect();
                if subjects.is_empty() {
                    return writeln!(self.out, "📝 No mood data yet. Start by tracking your mood!");
                }
                subjects.sort();
                writeln!(self.out, "{}", subjects.join(", "))
            }

            Effect::ShowStats => {
                let summary = summarize(&self.store.snapshot());
                writeln!(
                    self.out,
                    "Total subjects: {}, Total entries: {}, Avg entries/subject: {:.1}",
                    summary.total_subjects, summary.total_entries, summary.avg_entries_per_subject
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::transition::{FAREWELL, GAME_STARTED, GREETING};
    use chrono::NaiveDate;

    fn shell() -> Shell<Vec<u8>> {
        Shell::new(SessionStore::new(), Arc::new(AdviceTable::builtin()), Vec::new())
    }

    fn run(shell: &mut Shell<Vec<u8>>, lines: &[&str]) -> Vec<ShellStatus> {
        lines.iter().map(|line| shell.submit(line).unwrap()).collect()
    }

    fn output(shell: Shell<Vec<u8>>) -> String {
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_unknown_then_hello_is_literal_hello() {
        let mut shell = shell();
        run(&mut shell, &["dance", "hello"]);
        let out = output(shell);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Unknown command 'dance'. Type 'help' for a list of commands.",
                GREETING,
            ]
        );
    }

    #[test]
    fn test_commands_with_extra_words_are_unknown() {
        let mut shell = shell();
        let statuses = run(&mut shell, &["exit now", "hello world"]);
        assert_eq!(statuses, vec![ShellStatus::Running, ShellStatus::Running]);
        let out = output(shell);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Unknown command 'exit now'. Type 'help' for a list of commands.",
                "Unknown command 'hello world'. Type 'help' for a list of commands.",
            ]
        );
    }

    #[test]
    fn test_exit_after_unknowns() {
        let mut shell = shell();
        let statuses = run(&mut shell, &["foo", "bar", "", "exit"]);
        assert_eq!(
            statuses,
            vec![
                ShellStatus::Running,
                ShellStatus::Running,
                ShellStatus::Running,
                ShellStatus::Terminated,
            ]
        );
        assert!(matches!(
            shell.submit("exit"),
            Err(ShellError::Transition(TransitionError::Terminated))
        ));
        assert!(output(shell).ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn test_game_flow() {
        let mut shell = shell();
        run(&mut shell, &["help", "hello", "hello"]);
        let out = output(shell);
        assert!(out.starts_with("Help:"));
        assert_eq!(out.matches(GAME_STARTED).count(), 1);
        assert_eq!(out.matches(GREETING).count(), 2);
    }

    #[test]
    fn test_track_then_history() {
        let store = SessionStore::new();
        let mut shell = Shell::new(store.clone(), Arc::new(AdviceTable::builtin()), Vec::new());
        run(&mut shell, &["track alice stressed exam week", "history alice"]);

        assert_eq!(store.entries_for("alice")[0].note, "exam week");
        let out = output(shell);
        assert!(out.contains("✅ Mood tracked successfully for alice!"));
        assert!(out.contains("📚 Take a short break, revise with flashcards."));
        assert!(out.contains("😰 Stressed — exam week"));
    }

    #[test]
    fn test_history_respects_limit_and_missing_notes() {
        let store = SessionStore::new();
        for d in 1..=4 {
            let date = NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
            store.record_on(date, "bob", "calm", "").unwrap();
        }
        let mut shell = Shell::new(store, Arc::new(AdviceTable::builtin()), Vec::new());
        run(&mut shell, &["history bob 2"]);

        let out = output(shell);
        assert!(out.contains("2024-02-04"));
        assert!(out.contains("2024-02-03"));
        assert!(!out.contains("2024-02-02"));
        assert!(out.contains("*No notes*"));
    }

    #[test]
    fn test_empty_store_messages() {
        let mut shell = shell();
        run(&mut shell, &["subjects", "history nobody", "stats"]);
        let out = output(shell);
        assert!(out.contains("No mood data yet. Start by tracking your mood!"));
        assert!(out.contains("No mood data yet for nobody."));
        assert!(out.contains("Total subjects: 0, Total entries: 0, Avg entries/subject: 0.0"));
    }

    #[test]
    fn test_advice_and_subjects() {
        let mut shell = shell();
        run(
            &mut shell,
            &["track zoe happy", "track adam tired", "subjects", "advice bored"],
        );
        let out = output(shell);
        assert!(out.contains("adam, zoe"));
        assert!(out.contains("😐 🙂 Stay balanced and plan your day wisely."));
    }

    #[test]
    fn test_usage_hint() {
        let mut shell = shell();
        run(&mut shell, &["track alice"]);
        assert_eq!(output(shell).trim(), "Usage: track <name> <mood> [notes...]");
    }
}
