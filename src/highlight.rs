use inksac::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
    commands: BTreeSet<String>,
}

impl SyntaxHighlighter {
    /// `enabled = false` turns every method into a pass-through.
    pub fn new(enabled: bool, commands: impl IntoIterator<Item = String>) -> Self {
        let color_support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support,
            commands: commands.into_iter().collect(),
        }
    }

    fn plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word of `input` and any `-flag` words, keeping the
    /// original spacing so the editor cursor stays aligned.
    pub fn highlight_command(&self, input: &str) -> String {
        if self.plain() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut first = true;
        let mut rest = input;
        while !rest.is_empty() {
            let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            out.push_str(&rest[..word_start]);
            rest = &rest[word_start..];
            if rest.is_empty() {
                break;
            }

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            if first {
                out.push_str(&self.style_command_word(word));
                first = false;
            } else if word.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                out.push_str(&word.style(flag_style).to_string());
            } else {
                out.push_str(word);
            }
            rest = &rest[word_end..];
        }
        out
    }

    fn style_command_word(&self, word: &str) -> String {
        let style = if self.commands.contains(word) {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };
        word.style(style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.plain() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder().foreground(Color::RGB(128, 128, 128)).build();
        hint.style(hint_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> SyntaxHighlighter {
        SyntaxHighlighter::new(false, vec!["ls".to_string()])
    }

    #[test]
    fn test_disabled_is_passthrough() {
        let highlighter = plain();
        assert_eq!(highlighter.highlight_command("ls  --real x"), "ls  --real x");
        assert_eq!(highlighter.highlight_error("boom"), "boom");
        assert_eq!(highlighter.highlight_hint("hint"), "hint");
    }

    #[test]
    fn test_blank_line_untouched() {
        assert_eq!(plain().highlight_command("   "), "   ");
        assert_eq!(plain().highlight_command(""), "");
    }
}
