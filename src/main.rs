use minishell::config::ShellConfig;
use minishell::flags::Flags;
use minishell::shell::{self, Shell};
use std::env;

fn main() -> Result<(), minishell::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("minishell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags);
    config.init_logging();

    if let Some(line) = config.command.as_deref() {
        let outcome = shell::run_once(&config, line);
        log::debug!("one-shot command finished: {:?}", outcome);
        return Ok(());
    }

    let mut shell = Shell::new(config)?;
    shell.run()
}
