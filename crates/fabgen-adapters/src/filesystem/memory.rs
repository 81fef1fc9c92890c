//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use fabgen_core::{
    application::{ApplicationError, ports::ProjectFilesystem},
    error::FabgenResult,
};

/// In-memory filesystem for testing. Clones share the same backing store
/// so a test can keep a handle while the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Paths whose writes should fail, for fault-injection tests.
    fail_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all file paths, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Make every subsequent write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_writes.insert(path.into());
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FabgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FabgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.fail_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected write failure".into(),
            }
            .into());
        }

        // Ensure parent exists, mirroring the strictness of a real fs.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn injected_failures_fire() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.fail_writes_to("a/b.txt");
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/x"), "1").unwrap();
        assert_eq!(other.file_count(), 1);
    }
}
