//! Interactive mood tracking shell

use mood_tracker::advice::AdviceTable;
use mood_tracker::dispatch::{Shell, ShellStatus, PROMPT};
use mood_tracker::session::SessionStore;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut shell = Shell::new(
        SessionStore::new(),
        Arc::new(AdviceTable::builtin()),
        io::stdout(),
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            tracing::debug!("stdin closed");
            break;
        }

        if shell.submit(line.trim_end_matches(['\r', '\n']))? == ShellStatus::Terminated {
            break;
        }
    }

    Ok(())
}
