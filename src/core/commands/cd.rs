use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;

/// Moves the virtual working directory. Targets are never checked against
/// real storage.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        out.output(&format!("[cd] args: {:?}", args));

        // extra arguments are ignored
        let target = match args.first() {
            Some(path) => session.resolve(path),
            None => session.home().clone(),
        };
        log::debug!("cd {} -> {}", session.cwd(), target);
        session.set_cwd(target);
        Ok(())
    }
}
