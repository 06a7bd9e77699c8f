use super::{Command, CommandError};
use crate::core::Session;
use crate::output::OutputSink;
use std::fs;
use std::path::PathBuf;

/// The one flag `ls` gives meaning to. Every other argument is only echoed.
pub const REAL_FLAG: &str = "--real";

/// There is no virtual filesystem to list, so `ls` reports its arguments.
/// With `--real` it also lists the process's actual working directory.
#[derive(Clone)]
pub struct LsCommand {
    real_dir: PathBuf,
}

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self::with_real_dir(".")
    }

    /// Lists `real_dir` instead of the process working directory.
    pub fn with_real_dir(real_dir: impl Into<PathBuf>) -> Self {
        Self {
            real_dir: real_dir.into(),
        }
    }

    fn read_real_dir(&self) -> Result<Vec<String>, CommandError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.real_dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        args: &[String],
        _session: &mut Session,
        out: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        out.output(&format!("[ls] args: {:?}", args));

        if args.first().map(String::as_str) != Some(REAL_FLAG) {
            return Ok(());
        }

        match self.read_real_dir() {
            Ok(names) => {
                out.output("Contents of the real local directory:");
                for name in names {
                    out.output(&format!("  {}", name));
                }
            }
            Err(e) => {
                log::warn!("listing {} failed: {}", self.real_dir.display(), e);
                out.diagnostic(&e.to_string());
            }
        }
        Ok(())
    }

    fn flags(&self) -> &'static [&'static str] {
        &[REAL_FLAG]
    }
}
