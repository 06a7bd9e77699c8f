use super::ParseError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Between,
    Word,
    Single,
    Double,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Splits a command line into words using POSIX shell quoting.
///
/// Quoted pieces and bare text glue together into one word, so `a"b c"`
/// is the single word `ab c` and `''` is an empty word. Nothing is expanded.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = State::Between;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Between | State::Word => match c {
                c if is_blank(c) => {
                    if state == State::Word {
                        words.push(std::mem::take(&mut current));
                        state = State::Between;
                    }
                }
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '\\' => {
                    let escaped = chars.next().ok_or(ParseError::DanglingEscape)?;
                    current.push(escaped);
                    state = State::Word;
                }
                _ => {
                    current.push(c);
                    state = State::Word;
                }
            },
            State::Single => match c {
                '\'' => state = State::Word,
                _ => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Word,
                '\\' => {
                    let escaped = chars.next().ok_or(ParseError::DanglingEscape)?;
                    // only the quote and the backslash itself are escapable here
                    if escaped != '"' && escaped != '\\' {
                        current.push('\\');
                    }
                    current.push(escaped);
                }
                _ => current.push(c),
            },
        }
    }

    match state {
        State::Single => Err(ParseError::UnclosedQuote('\'')),
        State::Double => Err(ParseError::UnclosedQuote('"')),
        State::Word => {
            words.push(current);
            Ok(words)
        }
        State::Between => Ok(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input).unwrap()
    }

    #[test]
    fn test_mixed_quotes() {
        assert_eq!(words(r#"a "b c" 'd e'"#), vec!["a", "b c", "d e"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(words("echo  a   b"), vec!["echo", "a", "b"]);
        assert_eq!(words("\tls\t-l  "), vec!["ls", "-l"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(words("").is_empty());
        assert!(words("   \t ").is_empty());
    }

    #[test]
    fn test_adjacent_pieces_concatenate() {
        assert_eq!(words(r#"a"b c"d"#), vec!["ab cd"]);
        assert_eq!(words("'x'\"y\"z"), vec!["xyz"]);
    }

    #[test]
    fn test_empty_quotes_make_empty_word() {
        assert_eq!(words("echo '' \"\""), vec!["echo", "", ""]);
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(words(r#"'a\b "c"'"#), vec![r#"a\b "c""#]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(words(r"a\ b"), vec!["a b"]);
        assert_eq!(words(r"\'x"), vec!["'x"]);
        assert_eq!(words(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(words(r#""c:\dir""#), vec![r"c:\dir"]);
        assert_eq!(words(r#""a\\b""#), vec![r"a\b"]);
    }

    #[test]
    fn test_unclosed_quotes() {
        assert_eq!(
            tokenize("echo \"unterminated"),
            Err(ParseError::UnclosedQuote('"'))
        );
        assert_eq!(tokenize("echo 'half"), Err(ParseError::UnclosedQuote('\'')));
    }

    #[test]
    fn test_dangling_escape() {
        assert_eq!(tokenize(r"echo a\"), Err(ParseError::DanglingEscape));
        assert_eq!(tokenize(r#"echo "tail\"#), Err(ParseError::DanglingEscape));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::UnclosedQuote('"').to_string(), "No closing quotation");
        assert_eq!(ParseError::DanglingEscape.to_string(), "No escaped character");
    }
}
