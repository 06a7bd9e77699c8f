use std::fmt;

mod tokenizer;

pub use tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnclosedQuote(char),
    DanglingEscape,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnclosedQuote(_) => write!(f, "No closing quotation"),
            ParseError::DanglingEscape => write!(f, "No escaped character"),
        }
    }
}

impl std::error::Error for ParseError {}
