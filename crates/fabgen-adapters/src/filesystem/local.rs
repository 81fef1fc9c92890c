//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use fabgen_core::{application::ports::ProjectFilesystem, error::FabgenResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes replace existing file content unconditionally, matching the
/// pipeline's last-write-wins contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FabgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FabgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> fabgen_core::error::FabgenError {
    use fabgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
