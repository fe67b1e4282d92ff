//! Source entry entity
//!
//! A single directory entry found while enumerating the source directory.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// What kind of filesystem object an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file (or a link resolving to one)
    File,
    /// Directory, never descended into
    Directory,
    /// Sockets, fifos, dangling links and anything else
    Other,
}

/// A candidate entry in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    path: PathBuf,
    name: OsString,
    kind: EntryKind,
}

impl SourceEntry {
    /// Creates a new entry
    pub fn new(path: PathBuf, name: OsString, kind: EntryKind) -> Self {
        Self { path, name, kind }
    }

    /// Full path to the entry
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name within the source directory
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Destination file name for a matched entry: the label is appended as an
    /// extra suffix, even when the name already has an extension.
    pub fn tagged_name(&self, label: &str) -> OsString {
        let mut tagged = self.name.clone();
        tagged.push(".");
        tagged.push(label);
        tagged
    }
}
