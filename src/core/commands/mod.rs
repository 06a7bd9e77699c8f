use std::collections::BTreeMap;

mod cal;
mod cd;
mod date;
mod echo;
mod exit;
mod ls;

pub use cal::{render_month, CalCommand};
pub use cd::CdCommand;
pub use date::{format_timestamp, DateCommand};
pub use echo::EchoCommand;
pub use exit::{ExitCommand, FAREWELL};
pub use ls::{LsCommand, REAL_FLAG};

use crate::core::Session;
use crate::output::OutputSink;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    RealIo(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "unknown command: {}", cmd),
            CommandError::RealIo(err) => write!(f, "error reading real directory: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::RealIo(err)
    }
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError>;

    /// Flags offered by tab completion.
    fn flags(&self) -> &'static [&'static str] {
        &[]
    }
}

#[derive(Clone)]
pub enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Date(DateCommand),
    Echo(EchoCommand),
    Cal(CalCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(args, session, out),
            CommandType::Cd(cmd) => cmd.execute(args, session, out),
            CommandType::Date(cmd) => cmd.execute(args, session, out),
            CommandType::Echo(cmd) => cmd.execute(args, session, out),
            CommandType::Cal(cmd) => cmd.execute(args, session, out),
            CommandType::Exit(cmd) => cmd.execute(args, session, out),
        }
    }

    fn flags(&self) -> &'static [&'static str] {
        match self {
            CommandType::Ls(cmd) => cmd.flags(),
            CommandType::Cd(cmd) => cmd.flags(),
            CommandType::Date(cmd) => cmd.flags(),
            CommandType::Echo(cmd) => cmd.flags(),
            CommandType::Cal(cmd) => cmd.flags(),
            CommandType::Exit(cmd) => cmd.flags(),
        }
    }
}

/// The fixed name to handler table.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor.register("ls", CommandType::Ls(LsCommand::new()));
        executor.register("cd", CommandType::Cd(CdCommand::new()));
        executor.register("date", CommandType::Date(DateCommand::new()));
        executor.register("echo", CommandType::Echo(EchoCommand::new()));
        executor.register("cal", CommandType::Cal(CalCommand::new()));
        executor.register("exit", CommandType::Exit(ExitCommand::new()));

        executor
    }

    /// Installs `command` under `name`, replacing any previous handler.
    pub fn register(&mut self, name: &str, command: CommandType) {
        self.commands.insert(name.to_string(), command);
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(args, session, out),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Command names in sorted order.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Command names paired with the flags they complete.
    pub fn completions(&self) -> Vec<(String, &'static [&'static str])> {
        self.commands
            .iter()
            .map(|(name, cmd)| (name.clone(), cmd.flags()))
            .collect()
    }
}
