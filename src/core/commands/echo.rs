use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;

#[derive(Clone, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        out.output(&args.join(" "));
        Ok(())
    }
}
