use crate::core::commands::{CommandError, CommandExecutor};
use crate::core::Session;
use crate::output::{LineKind, OutputSink};
use crate::parse::tokenize;

/// What happened to one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank input: nothing recorded, nothing printed.
    Blank,
    /// Quoting was unbalanced; no handler ran.
    ParseFailed,
    Unknown(String),
    Ran(String),
    /// The session had already ended.
    Ignored,
}

/// Turns submitted lines into command invocations against one session.
pub struct Interpreter {
    session: Session,
    executor: CommandExecutor,
}

impl Interpreter {
    pub fn new(session: Session, executor: CommandExecutor) -> Self {
        Self { session, executor }
    }

    pub fn submit(&mut self, line: &str, out: &mut dyn OutputSink) -> LineOutcome {
        if self.session.is_ended() {
            return LineOutcome::Ignored;
        }
        if line.trim().is_empty() {
            return LineOutcome::Blank;
        }

        self.session.history_mut().push(line);
        out.write_line(LineKind::Echo, &format!("{}{}", self.session.prompt(), line));

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                log::debug!("rejected {:?}: {}", line, e);
                out.diagnostic(&format!("parser: failed to parse arguments: {}", e));
                return LineOutcome::ParseFailed;
            }
        };

        let Some((command, args)) = words.split_first() else {
            return LineOutcome::Blank;
        };

        log::debug!("dispatching {} with {} args", command, args.len());
        match self
            .executor
            .execute(command, args, &mut self.session, out)
        {
            Ok(()) => LineOutcome::Ran(command.clone()),
            Err(e @ CommandError::NotFound(_)) => {
                out.diagnostic(&e.to_string());
                LineOutcome::Unknown(command.clone())
            }
            Err(e) => {
                out.diagnostic(&e.to_string());
                LineOutcome::Ran(command.clone())
            }
        }
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn greeting(&self) -> Vec<String> {
        let identity = self.session.identity();
        vec![
            format!(
                "Mini shell emulator - [{}@{}]",
                identity.user(),
                identity.host()
            ),
            format!("Commands: {}", self.executor.command_names().join(", ")),
        ]
    }

    pub fn is_ended(&self) -> bool {
        self.session.is_ended()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::{CommandType, LsCommand, FAREWELL};
    use crate::core::env::UserIdentity;
    use crate::output::Scrollback;

    fn interpreter() -> Interpreter {
        let session = Session::with_identity(UserIdentity::new("tester", "box"));
        Interpreter::new(session, CommandExecutor::new())
    }

    fn submit_all(interp: &mut Interpreter, lines: &[&str]) -> Scrollback {
        let mut out = Scrollback::new();
        for line in lines {
            interp.submit(line, &mut out);
        }
        out
    }

    #[test]
    fn test_echo_line_then_output() {
        let mut interp = interpreter();
        let out = submit_all(&mut interp, &[r#"echo "b c" d"#]);
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![r#"/ $ echo "b c" d"#, "b c d"]
        );
    }

    #[test]
    fn test_echo_collapses_unquoted_whitespace() {
        let mut interp = interpreter();
        let out = submit_all(&mut interp, &["echo  a   b"]);
        assert_eq!(out.lines_of(LineKind::Output), vec!["a b"]);
    }

    #[test]
    fn test_unbalanced_quotes_run_nothing() {
        let mut interp = interpreter();
        let mut out = Scrollback::new();

        let outcome = interp.submit("cd \"/unterminated", &mut out);
        assert_eq!(outcome, LineOutcome::ParseFailed);
        assert!(interp.session().cwd().is_root());
        assert!(out.lines_of(LineKind::Output).is_empty());
        assert_eq!(
            out.lines_of(LineKind::Diagnostic),
            vec!["parser: failed to parse arguments: No closing quotation"]
        );
        // the raw line is still remembered
        assert_eq!(interp.session().history().len(), 1);
    }

    #[test]
    fn test_blank_lines_leave_no_trace() {
        let mut interp = interpreter();
        let mut out = Scrollback::new();

        assert_eq!(interp.submit("", &mut out), LineOutcome::Blank);
        assert_eq!(interp.submit("   \t", &mut out), LineOutcome::Blank);
        assert!(out.is_empty());
        assert!(interp.session().history().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut interp = interpreter();
        let mut out = Scrollback::new();

        let outcome = interp.submit("frobnicate --hard", &mut out);
        assert_eq!(outcome, LineOutcome::Unknown("frobnicate".to_string()));
        assert_eq!(
            out.lines_of(LineKind::Diagnostic),
            vec!["unknown command: frobnicate"]
        );
        assert!(out.lines_of(LineKind::Output).is_empty());
        assert!(interp.session().cwd().is_root());
    }

    #[test]
    fn test_empty_quoted_command_is_unknown() {
        let mut interp = interpreter();
        let mut out = Scrollback::new();
        assert_eq!(
            interp.submit("''", &mut out),
            LineOutcome::Unknown(String::new())
        );
    }

    #[test]
    fn test_cd_sequence_updates_prompt() {
        let mut interp = interpreter();
        let out = submit_all(&mut interp, &["cd /x", "cd y", "echo here"]);

        assert_eq!(interp.prompt(), "/x/y $ ");
        assert_eq!(
            out.lines_of(LineKind::Echo),
            vec!["/ $ cd /x", "/x $ cd y", "/x/y $ echo here"]
        );
    }

    #[test]
    fn test_cd_home_regardless_of_state() {
        let mut interp = interpreter();
        submit_all(&mut interp, &["cd /a/b/c", "cd ../..", "cd"]);
        assert_eq!(interp.session().cwd().to_string(), "/home/tester");
    }

    #[test]
    fn test_cd_parent() {
        let mut interp = interpreter();
        submit_all(&mut interp, &["cd /a/b", "cd .."]);
        assert_eq!(interp.session().cwd().to_string(), "/a");
    }

    #[test]
    fn test_history_records_raw_lines() {
        let mut interp = interpreter();
        submit_all(&mut interp, &["ls  -a", "", "nope", "echo 'x"]);

        let history = interp.session_mut().history_mut();
        assert_eq!(history.entries(), &["ls  -a", "nope", "echo 'x"]);
        assert_eq!(history.recall_previous(), Some("echo 'x"));
    }

    #[test]
    fn test_exit_ends_session() {
        let mut interp = interpreter();
        let mut out = Scrollback::new();

        assert_eq!(interp.submit("exit", &mut out), LineOutcome::Ran("exit".to_string()));
        assert!(interp.is_ended());
        assert_eq!(out.lines_of(LineKind::Output), vec![FAREWELL]);

        assert_eq!(interp.submit("echo late", &mut out), LineOutcome::Ignored);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_ls_real_failure_keeps_going() {
        let mut executor = CommandExecutor::new();
        executor.register(
            "ls",
            CommandType::Ls(LsCommand::with_real_dir("/path/that/does/not/exist")),
        );
        let session = Session::with_identity(UserIdentity::new("tester", "box"));
        let mut interp = Interpreter::new(session, executor);
        let mut out = Scrollback::new();

        assert_eq!(
            interp.submit("ls --real", &mut out),
            LineOutcome::Ran("ls".to_string())
        );
        assert_eq!(out.lines_of(LineKind::Diagnostic).len(), 1);
        assert_eq!(interp.submit("echo ok", &mut out), LineOutcome::Ran("echo".to_string()));
    }

    #[test]
    fn test_greeting() {
        let greeting = interpreter().greeting();
        assert_eq!(greeting[0], "Mini shell emulator - [tester@box]");
        assert_eq!(greeting[1], "Commands: cal, cd, date, echo, exit, ls");
    }
}
