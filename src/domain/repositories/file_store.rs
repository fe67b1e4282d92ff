//! File store trait
//!
//! Defines the interface to the filesystem the restorer reads candidates
//! from and writes copies into.

use crate::domain::entities::SourceEntry;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when accessing the file store
#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileStoreError {
    /// Wraps an I/O error with the path it occurred on
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileStoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                FileStoreError::PermissionDenied(path.to_path_buf())
            }
            _ => FileStoreError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Trait for the storage holding candidate files and their restored copies
///
/// Every call acquires and releases its own handles; nothing stays open
/// between calls.
///
/// # Example
///
/// ```ignore
/// let store = LocalFileStore::new();
/// for entry in store.list_entries(Path::new("/data/lost"))? {
///     let prefix = store.read_prefix(entry.path(), 8)?;
///     println!("{:?}: {} bytes", entry.name(), prefix.len());
/// }
/// ```
pub trait FileStore {
    /// Returns whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the direct children of `dir`, sorted by file name
    fn list_entries(&self, dir: &Path) -> Result<Vec<SourceEntry>, FileStoreError>;

    /// Reads up to `max_len` leading bytes; fewer if the file is shorter
    fn read_prefix(&self, path: &Path, max_len: usize) -> Result<Vec<u8>, FileStoreError>;

    /// Creates `dir` and its parents; succeeds if it already exists
    fn ensure_dir(&self, dir: &Path) -> Result<(), FileStoreError>;

    /// Copies the full contents of `src` to `dst`, replacing any existing
    /// file, and returns the number of bytes copied
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, FileStoreError>;

    /// Lowercase hex SHA-256 of the file contents
    fn digest(&self, path: &Path) -> Result<String, FileStoreError>;
}

impl<T: FileStore + ?Sized> FileStore for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<SourceEntry>, FileStoreError> {
        (**self).list_entries(dir)
    }

    fn read_prefix(&self, path: &Path, max_len: usize) -> Result<Vec<u8>, FileStoreError> {
        (**self).read_prefix(path, max_len)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), FileStoreError> {
        (**self).ensure_dir(dir)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, FileStoreError> {
        (**self).copy_file(src, dst)
    }

    fn digest(&self, path: &Path) -> Result<String, FileStoreError> {
        (**self).digest(path)
    }
}
