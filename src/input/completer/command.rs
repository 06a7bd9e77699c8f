use std::collections::BTreeMap;

use rustyline::completion::Pair;

/// Completes built-in command names and the flags each one understands.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeMap<String, &'static [&'static str]>,
}

impl CommandCompleter {
    pub fn new<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = (String, &'static [&'static str])>,
    {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn complete_command(&self, word: &str) -> Vec<Pair> {
        let input = word.trim();
        self.commands
            .keys()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }

    pub fn complete_flag(&self, command: &str, word: &str) -> Vec<Pair> {
        let Some(flags) = self.commands.get(command) else {
            return Vec::new();
        };
        flags
            .iter()
            .filter(|flag| flag.starts_with(word))
            .map(|flag| Pair {
                display: flag.to_string(),
                replacement: format!("{} ", flag),
            })
            .collect()
    }
}
