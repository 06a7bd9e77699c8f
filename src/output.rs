use crate::highlight::SyntaxHighlighter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The prompt plus the submitted line, as typed.
    Echo,
    Output,
    Diagnostic,
}

/// Where the interpreter writes its scrollback. Lines are whole and only
/// ever appended.
pub trait OutputSink {
    fn write_line(&mut self, kind: LineKind, text: &str);

    fn output(&mut self, text: &str) {
        self.write_line(LineKind::Output, text);
    }

    fn diagnostic(&mut self, text: &str) {
        self.write_line(LineKind::Diagnostic, text);
    }
}

/// In-memory scrollback.
#[derive(Debug, Default, Clone)]
pub struct Scrollback {
    lines: Vec<(LineKind, String)>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(_, text)| text.as_str())
    }

    pub fn lines_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl OutputSink for Scrollback {
    fn write_line(&mut self, kind: LineKind, text: &str) {
        self.lines.push((kind, text.to_owned()));
    }
}

/// Prints to the terminal. Echo lines are dropped because the line editor
/// has already shown what was typed.
pub struct TerminalSink<'a> {
    highlighter: &'a SyntaxHighlighter,
}

impl<'a> TerminalSink<'a> {
    pub fn new(highlighter: &'a SyntaxHighlighter) -> Self {
        Self { highlighter }
    }
}

impl OutputSink for TerminalSink<'_> {
    fn write_line(&mut self, kind: LineKind, text: &str) {
        match kind {
            LineKind::Echo => {}
            LineKind::Output => println!("{}", text),
            LineKind::Diagnostic => eprintln!("{}", self.highlighter.highlight_error(text)),
        }
    }
}
