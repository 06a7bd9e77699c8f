use super::VirtualDir;

/// Expands a leading `~` into the virtual home directory.
#[derive(Clone)]
pub struct PathExpander {
    home: VirtualDir,
}

impl PathExpander {
    pub fn new(home: VirtualDir) -> Self {
        Self { home }
    }

    /// Resolves `target` relative to `cwd`, expanding `~` and `~/path`.
    pub fn expand(&self, cwd: &VirtualDir, target: &str) -> VirtualDir {
        if target == "~" {
            return self.home.clone();
        }
        match target.strip_prefix("~/") {
            Some(rest) => self.home.join(rest),
            // "~username/path" is left alone and treated as a relative name
            None => cwd.join(target),
        }
    }

    pub fn home(&self) -> &VirtualDir {
        &self.home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> PathExpander {
        PathExpander::new(VirtualDir::home_for("tester"))
    }

    #[test]
    fn test_expand_tilde() {
        let cwd = VirtualDir::root().join("/var");
        assert_eq!(expander().expand(&cwd, "~").to_string(), "/home/tester");
        assert_eq!(
            expander().expand(&cwd, "~/docs/../src").to_string(),
            "/home/tester/src"
        );
    }

    #[test]
    fn test_expand_plain_paths() {
        let cwd = VirtualDir::root().join("/var");
        assert_eq!(expander().expand(&cwd, "log").to_string(), "/var/log");
        assert_eq!(expander().expand(&cwd, "/opt").to_string(), "/opt");
        assert_eq!(expander().expand(&cwd, "~bob").to_string(), "/var/~bob");
    }
}
