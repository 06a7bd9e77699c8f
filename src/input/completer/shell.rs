use std::borrow::Cow;

use super::command::CommandCompleter;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// The rustyline helper for the shell prompt.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(command_completer: CommandCompleter, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer,
            highlighter,
        }
    }

    fn candidates(&self, line_up_to_cursor: &str, pos: usize) -> (usize, Vec<Pair>) {
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();
        if line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        match words.as_slice() {
            [] => (0, self.command_completer.complete_command("")),
            [word] => {
                let start = line_up_to_cursor.rfind(word).unwrap_or(0);
                (start, self.command_completer.complete_command(word))
            }
            [command, .., last] => {
                let start = if last.is_empty() {
                    pos
                } else {
                    line_up_to_cursor.rfind(last).unwrap_or(pos)
                };
                (start, self.command_completer.complete_flag(command, last))
            }
        }
    }
}

impl Helper for ShellCompleter {}
impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}
impl Hinter for ShellCompleter {
    type Hint = String;
}
impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos], pos))
    }
}
