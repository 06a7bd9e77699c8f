use std::fmt;
use std::path::{Component, Path, PathBuf};

/// An absolute directory that exists only in memory.
///
/// Every value is lexically normalized: no `.` or `..` components and no
/// repeated separators. Nothing here ever consults the real filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDir {
    path: PathBuf,
}

impl Default for VirtualDir {
    fn default() -> Self {
        Self::root()
    }
}

impl VirtualDir {
    pub fn root() -> Self {
        Self {
            path: PathBuf::from("/"),
        }
    }

    /// The home-style directory for `user`, i.e. `/home/<user>`.
    pub fn home_for(user: &str) -> Self {
        Self::root().join("home").join(user)
    }

    /// Resolves `target` against this directory: absolute targets replace
    /// it, relative ones are appended. The result is normalized.
    pub fn join<P: AsRef<Path>>(&self, target: P) -> Self {
        let target = target.as_ref();
        let combined = if target.has_root() {
            target.to_path_buf()
        } else {
            self.path.join(target)
        };
        Self {
            path: normalize(&combined),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.parent().is_none()
    }
}

impl fmt::Display for VirtualDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            // `pop` is a no-op at the root, so `/..` stays `/`
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    normalized
}
