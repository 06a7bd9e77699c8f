use rustyline::{config::Configurer, history::FileHistory, Editor};
use std::thread;

mod interpreter;

pub use interpreter::{Interpreter, LineOutcome};

use crate::{
    config::ShellConfig,
    core::{commands::CommandExecutor, Session},
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{completer::CommandCompleter, ShellCompleter},
    output::TerminalSink,
};

/// Interactive host: a line editor standing in for the emulator window.
pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) interpreter: Interpreter,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let executor = CommandExecutor::new();
        let highlighter = SyntaxHighlighter::new(config.color, executor.command_names());
        let completer = ShellCompleter::new(
            CommandCompleter::new(executor.completions()),
            highlighter.clone(),
        );

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(false);

        let quiet = config.quiet;
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\nUse 'exit' to exit the shell");
            }
        })?;

        Ok(Shell {
            editor,
            interpreter: Interpreter::new(Session::new(), executor),
            highlighter,
            config,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.config.quiet {
            for line in self.interpreter.greeting() {
                println!("{}", line);
            }
        }

        loop {
            let prompt = self.interpreter.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            if !self.config.quiet {
                                eprintln!("Warning: Couldn't add to history: {}", e);
                            }
                        }
                    }

                    let mut sink = TerminalSink::new(&self.highlighter);
                    self.interpreter.submit(&line, &mut sink);

                    if self.interpreter.is_ended() {
                        // let the farewell stay on screen for a moment
                        thread::sleep(self.config.exit_delay);
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.config.quiet {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    if !self.config.quiet {
                        println!("CTRL-D");
                    }
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Runs a single line without a line editor and reports what happened.
pub fn run_once(config: &ShellConfig, line: &str) -> LineOutcome {
    let executor = CommandExecutor::new();
    let highlighter = SyntaxHighlighter::new(config.color, executor.command_names());
    let mut interpreter = Interpreter::new(Session::new(), executor);
    let mut sink = TerminalSink::new(&highlighter);
    interpreter.submit(line, &mut sink)
}
