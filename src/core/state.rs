use crate::core::env::UserIdentity;
use crate::input::History;
use crate::path::{PathExpander, VirtualDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// `exit` was run; the host should wind down.
    Ended,
}

/// Everything one interpreter instance remembers between lines.
pub struct Session {
    cwd: VirtualDir,
    history: History,
    identity: UserIdentity,
    expander: PathExpander,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        Self::with_identity(UserIdentity::current())
    }

    pub fn with_identity(identity: UserIdentity) -> Self {
        let expander = PathExpander::new(VirtualDir::home_for(identity.user()));
        Self {
            cwd: VirtualDir::root(),
            history: History::new(),
            identity,
            expander,
            status: SessionStatus::Running,
        }
    }

    pub fn cwd(&self) -> &VirtualDir {
        &self.cwd
    }

    pub fn set_cwd(&mut self, cwd: VirtualDir) {
        self.cwd = cwd;
    }

    pub fn home(&self) -> &VirtualDir {
        self.expander.home()
    }

    /// Where `target` would lead from the current directory.
    pub fn resolve(&self, target: &str) -> VirtualDir {
        self.expander.expand(&self.cwd, target)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn end(&mut self) {
        self.status = SessionStatus::Ended;
    }

    pub fn is_ended(&self) -> bool {
        self.status == SessionStatus::Ended
    }

    pub fn prompt(&self) -> String {
        format!("{} $ ", self.cwd)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
