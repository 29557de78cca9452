//! Mock system implementation for testing

use super::System;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// # Example
/// ```
/// use ahoy::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_current_dir("/project/sub")
///     .with_file("/project/.ahoy.yml", b"version: '2'\n");
///
/// assert!(system.exists(Path::new("/project/sub")));
/// assert!(system.is_file(Path::new("/project/.ahoy.yml")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty filesystem rooted at `/`
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                unreadable: HashSet::new(),
            })),
        }
    }

    /// Set the current working directory, creating it (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        {
            let mut state = self.write_state();
            Self::ensure_parent_dirs(&mut state.dirs, &dir);
            state.current_dir = dir;
        }
        self
    }

    /// Add a file with contents (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        {
            let mut state = self.write_state();
            if let Some(parent) = path_buf.parent() {
                Self::ensure_parent_dirs(&mut state.dirs, parent);
            }
            state.files.insert(path_buf, contents.to_vec());
        }
        self
    }

    /// Add a file that exists but fails every read (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_unreadable_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        let system = self.with_file(&path_buf, b"");
        system.write_state().unreadable.insert(path_buf);
        system
    }

    /// Add a directory (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        {
            let mut state = self.write_state();
            Self::ensure_parent_dirs(&mut state.dirs, path.as_ref());
        }
        self
    }

    /// Contents of a file, if present
    #[must_use]
    pub fn file_contents<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        self.read_state().files.get(path.as_ref()).cloned()
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, MockSystemState> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, MockSystemState> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.read_state().current_dir.join(path)
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.read_state().current_dir.clone())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = self.absolute(path);
        let state = self.read_state();
        if state.unreadable.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }
        let bytes = state.files.get(&path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        drop(state);
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = self.absolute(path);
        let mut state = self.write_state();

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path, contents.to_vec());
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        let path = self.absolute(path);
        let state = self.read_state();
        state.files.contains_key(&path) || state.dirs.contains(&path)
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        let path = self.absolute(path);
        self.read_state().files.contains_key(&path)
    }
}
