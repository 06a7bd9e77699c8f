use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;

pub const FAREWELL: &str = "[exit] leaving the emulator. Bye!";

/// Says goodbye and marks the session ended. Tearing down the window is up
/// to the host.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        out.output(FAREWELL);
        session.end();
        log::info!("session ended by exit");
        Ok(())
    }
}
