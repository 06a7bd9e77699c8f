use crate::flags::Flags;
use log::LevelFilter;
use std::time::Duration;

/// How long the farewell stays visible after `exit`.
pub const EXIT_DELAY: Duration = Duration::from_millis(200);

/// Runtime settings, gathered from command-line flags and the environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub quiet: bool,
    pub color: bool,
    pub log_level: Option<LevelFilter>,
    pub command: Option<String>,
    pub exit_delay: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            color: true,
            log_level: None,
            command: None,
            exit_delay: EXIT_DELAY,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        Self::from_parts(flags, |name| std::env::var_os(name).is_some())
    }

    /// Like `from_flags`, with `has_var` answering whether an environment
    /// variable is set.
    pub fn from_parts<F>(flags: &Flags, has_var: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            quiet: flags.is_set("quiet"),
            color: !flags.is_set("no-color") && !has_var("NO_COLOR"),
            // None leaves the level to RUST_LOG
            log_level: flags.is_set("debug").then_some(LevelFilter::Debug),
            command: flags.get_value("command").cloned(),
            exit_delay: EXIT_DELAY,
        }
    }

    /// Builds the logger: `RUST_LOG` if present, `warn` otherwise, and
    /// `--debug` overrides both.
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or("warn");
        let mut builder = env_logger::Builder::from_env(env);
        if let Some(level) = self.log_level {
            builder.filter_level(level);
        }
        // a logger may already be installed when embedded
        let _ = builder.try_init();
    }
}
