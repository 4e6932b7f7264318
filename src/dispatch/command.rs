//! Shell commands and the table that names them

/// Default number of entries shown by `history`
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Known command names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Help,
    Exit,
    Track,
    Advice,
    History,
    Subjects,
    Stats,
}

/// Entry in the command table
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    pub usage: &'static str,
    pub summary: &'static str,
}

/// Every command the shell accepts, matched by exact name
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        kind: CommandKind::Hello,
        usage: "hello",
        summary: "greet the player",
    },
    CommandSpec {
        name: "help",
        kind: CommandKind::Help,
        usage: "help",
        summary: "show this list",
    },
    CommandSpec {
        name: "exit",
        kind: CommandKind::Exit,
        usage: "exit",
        summary: "quit the shell",
    },
    CommandSpec {
        name: "track",
        kind: CommandKind::Track,
        usage: "track <name> <mood> [notes...]",
        summary: "record today's mood",
    },
    CommandSpec {
        name: "advice",
        kind: CommandKind::Advice,
        usage: "advice <mood>",
        summary: "get advice for a mood",
    },
    CommandSpec {
        name: "history",
        kind: CommandKind::History,
        usage: "history <name> [limit]",
        summary: "show recent entries, newest first",
    },
    CommandSpec {
        name: "subjects",
        kind: CommandKind::Subjects,
        usage: "subjects",
        summary: "list everyone with entries",
    },
    CommandSpec {
        name: "stats",
        kind: CommandKind::Stats,
        usage: "stats",
        summary: "show totals",
    },
];

impl CommandKind {
    pub fn spec(self) -> &'static CommandSpec {
        COMMANDS
            .iter()
            .find(|spec| spec.kind == self)
            .unwrap_or(&COMMANDS[1])
    }

    pub fn from_token(token: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == token)
            .map(|spec| spec.kind)
    }
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Track {
        subject: String,
        category: String,
        note: String,
    },
    Advice {
        category: String,
    },
    History {
        subject: String,
        limit: usize,
    },
    Subjects,
    Stats,
    /// A known command with missing or malformed arguments
    Usage(CommandKind),
    /// Anything not in the command table
    Unknown(String),
}

impl Command {
    /// Parse one line of input. The first word selects the command by exact
    /// match; the rest are its arguments. Commands without arguments must be
    /// the whole line, so `exit now` is unknown rather than an exit.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let token = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let Some(kind) = CommandKind::from_token(token) else {
            return Command::Unknown(token.to_string());
        };

        match (kind, args.as_slice()) {
            (CommandKind::Hello, []) => Command::Hello,
            (CommandKind::Help, []) => Command::Help,
            (CommandKind::Exit, []) => Command::Exit,
            (CommandKind::Subjects, []) => Command::Subjects,
            (CommandKind::Stats, []) => Command::Stats,
            (
                CommandKind::Hello
                | CommandKind::Help
                | CommandKind::Exit
                | CommandKind::Subjects
                | CommandKind::Stats,
                _,
            ) => Command::Unknown(line.trim().to_string()),
            (CommandKind::Track, [subject, category, note @ ..]) => Command::Track {
                subject: (*subject).to_string(),
                category: (*category).to_string(),
                note: note.join(" "),
            },
            (CommandKind::Advice, [category]) => Command::Advice {
                category: (*category).to_string(),
            },
            (CommandKind::History, [subject]) => Command::History {
                subject: (*subject).to_string(),
                limit: DEFAULT_HISTORY_LIMIT,
            },
            (CommandKind::History, [subject, limit]) => match limit.parse() {
                Ok(limit) if limit > 0 => Command::History {
                    subject: (*subject).to_string(),
                    limit,
                },
                _ => Command::Usage(kind),
            },
            (kind, _) => Command::Usage(kind),
        }
    }

    pub fn kind(&self) -> Option<CommandKind> {
        match self {
            Command::Hello => Some(CommandKind::Hello),
            Command::Help => Some(CommandKind::Help),
            Command::Exit => Some(CommandKind::Exit),
            Command::Track { .. } => Some(CommandKind::Track),
            Command::Advice { .. } => Some(CommandKind::Advice),
            Command::History { .. } => Some(CommandKind::History),
            Command::Subjects => Some(CommandKind::Subjects),
            Command::Stats => Some(CommandKind::Stats),
            Command::Usage(kind) => Some(*kind),
            Command::Unknown(_) => None,
        }
    }
}
