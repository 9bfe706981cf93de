//! The ordered list of directories searched for external executables.

use std::path::{Path, PathBuf};

/// Directory the shell searches before any `path` command has run.
pub const DEFAULT_PATH: &str = "/bin";

/// Ordered search path for external commands.
///
/// Directory order is significant: resolution stops at the first match.
/// The shell owns exactly one of these for its whole lifetime; only the
/// `path` built-in mutates it, and child processes never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl Default for SearchPath {
    fn default() -> Self {
        SearchPath::new(DEFAULT_PATH)
    }
}

impl SearchPath {
    /// Creates a search path containing a single directory.
    pub fn new(default_dir: impl Into<PathBuf>) -> Self {
        SearchPath {
            dirs: vec![default_dir.into()],
        }
    }

    /// The directories currently searched, in order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Removes every directory. Until [`SearchPath::replace`] is called
    /// again, all external command lookups fail.
    pub fn clear(&mut self) {
        self.dirs.clear();
    }

    /// Discards the current directories and installs `dirs` in the given
    /// order. Duplicates are kept as-is.
    pub fn replace<I, P>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs = dirs.into_iter().map(Into::into).collect();
    }

    /// Finds the first directory holding an executable called `name` and
    /// returns the full path to it.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
