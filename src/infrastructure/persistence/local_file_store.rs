//! Local file store implementation
//!
//! Reads candidates from and writes restored copies to the local filesystem.

use crate::domain::entities::{EntryKind, SourceEntry};
use crate::domain::repositories::{FileStore, FileStoreError};
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Local file system store
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Hidden sibling of `dst` used while a copy is in flight
    fn staging_path(dst: &Path) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(dst.file_name().unwrap_or_default());
        name.push(".partial");
        dst.with_file_name(name)
    }

    fn copy_contents(src: &Path, staging: &Path) -> Result<u64, FileStoreError> {
        let mut input = File::open(src).map_err(|e| FileStoreError::from_io(src, e))?;
        let mut output = File::create(staging).map_err(|e| FileStoreError::from_io(staging, e))?;

        let copied =
            io::copy(&mut input, &mut output).map_err(|e| FileStoreError::from_io(staging, e))?;
        output.flush().map_err(|e| FileStoreError::from_io(staging, e))?;

        Ok(copied)
    }

    /// Follows links so that a link to a regular file counts as a file
    fn entry_kind(path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            _ => EntryKind::Other,
        }
    }
}

impl FileStore for LocalFileStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<SourceEntry>, FileStoreError> {
        let read_dir = fs::read_dir(dir).map_err(|e| FileStoreError::from_io(dir, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FileStoreError::from_io(dir, e))?;
            let path = entry.path();
            let kind = Self::entry_kind(&path);
            entries.push(SourceEntry::new(path, entry.file_name(), kind));
        }

        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }

    fn read_prefix(&self, path: &Path, max_len: usize) -> Result<Vec<u8>, FileStoreError> {
        let file = File::open(path).map_err(|e| FileStoreError::from_io(path, e))?;

        let mut prefix = Vec::with_capacity(max_len);
        file.take(max_len as u64)
            .read_to_end(&mut prefix)
            .map_err(|e| FileStoreError::from_io(path, e))?;

        Ok(prefix)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), FileStoreError> {
        fs::create_dir_all(dir).map_err(|e| FileStoreError::from_io(dir, e))
    }

    /// Copies through a sibling staging file renamed over `dst`, so `dst` is
    /// never truncated while `src` may still resolve to it and a failed copy
    /// leaves no partial file behind.
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, FileStoreError> {
        let staging = Self::staging_path(dst);

        let result = Self::copy_contents(src, &staging)
            .and_then(|copied| {
                fs::rename(&staging, dst)
                    .map(|()| copied)
                    .map_err(|e| FileStoreError::from_io(dst, e))
            });

        if result.is_err() {
            let _ = fs::remove_file(&staging);
        }
        result
    }

    fn digest(&self, path: &Path) -> Result<String, FileStoreError> {
        let mut file = File::open(path).map_err(|e| FileStoreError::from_io(path, e))?;

        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| FileStoreError::from_io(path, e))?;

        Ok(hex::encode(hasher.finalize()))
    }
}
