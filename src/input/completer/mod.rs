mod command;
mod shell;

pub use command::CommandCompleter;
pub use shell::ShellCompleter;
