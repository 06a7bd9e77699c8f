use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;
use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Clone, Default)]
pub struct DateCommand;

impl DateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for DateCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        out.output(&format_timestamp(&Local::now()));
        Ok(())
    }
}
