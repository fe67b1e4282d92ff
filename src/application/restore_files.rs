//! Restore files use case
//!
//! Walks a source directory once, classifies every regular file by its
//! leading bytes and copies it into the matching destination bucket.
//! Per-file failures are recorded and the walk continues; only failures
//! affecting the whole directory abort the run.

use crate::application::dto::{EntryOutcome, RestoreOptions, RestoreSummary};
use crate::domain::entities::{Classification, SourceEntry};
use crate::domain::repositories::{FileStore, FileStoreError};
use crate::domain::services::Classifier;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Observer invoked with every entry outcome as soon as it is known
pub type EntryCallback<'a> = Box<dyn FnMut(&EntryOutcome) + 'a>;

/// Errors that abort a restore run
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot list {}: {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },

    #[error("Cannot create destination {}: {source}", .path.display())]
    DestinationRoot {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
}

/// Errors confined to a single entry
#[derive(Error, Debug)]
enum EntryError {
    #[error(transparent)]
    Store(#[from] FileStoreError),

    #[error("Copy verification failed for {}: expected {expected}, got {actual}", .path.display())]
    DigestMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

/// Restore files use case
pub struct RestoreFilesUseCase<'t, S: FileStore> {
    classifier: Classifier<'t>,
    store: S,
    options: RestoreOptions,
}

impl<'t, S: FileStore> RestoreFilesUseCase<'t, S> {
    /// Creates a new restore files use case
    pub fn new(classifier: Classifier<'t>, store: S, options: RestoreOptions) -> Self {
        Self {
            classifier,
            store,
            options,
        }
    }

    /// Root directory for identified copies under `source_dir`
    pub fn restored_root(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.options.restored_dir_name)
    }

    /// Root directory for unidentified copies under `source_dir`
    pub fn unidentified_root(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.options.unidentified_dir_name)
    }

    /// Executes the restore over `source_dir`
    pub fn execute(
        &self,
        source_dir: &Path,
        mut on_entry: Option<EntryCallback<'_>>,
    ) -> Result<RestoreSummary, RestoreError> {
        if !self.store.is_dir(source_dir) {
            return Err(RestoreError::NotADirectory(source_dir.to_path_buf()));
        }

        let start_time = Instant::now();
        let restored_root = self.restored_root(source_dir);
        let unidentified_root = self.unidentified_root(source_dir);

        if !self.options.dry_run {
            self.store
                .ensure_dir(&restored_root)
                .map_err(|source| RestoreError::DestinationRoot {
                    path: restored_root.clone(),
                    source,
                })?;
        }

        let entries =
            self.store
                .list_entries(source_dir)
                .map_err(|source| RestoreError::Enumeration {
                    path: source_dir.to_path_buf(),
                    source,
                })?;

        tracing::info!(
            source = %source_dir.display(),
            entries = entries.len(),
            dry_run = self.options.dry_run,
            "Starting restore"
        );

        let mut summary = RestoreSummary::new(
            source_dir.to_path_buf(),
            restored_root.clone(),
            self.options
                .copy_unidentified
                .then(|| unidentified_root.clone()),
            self.options.dry_run,
        );

        for entry in &entries {
            if !entry.is_file() {
                tracing::debug!(
                    path = %entry.path().display(),
                    kind = ?entry.kind(),
                    "Skipping non-file entry"
                );
                summary.record_skipped();
                continue;
            }

            let outcome = self
                .restore_entry(entry, &restored_root, &unidentified_root)
                .unwrap_or_else(|e| {
                    tracing::debug!(
                        path = %entry.path().display(),
                        error = %e,
                        "Failed to process file"
                    );
                    EntryOutcome::Failed {
                        source: entry.path().to_path_buf(),
                        error: e.to_string(),
                    }
                });

            summary.record(&outcome);
            if let Some(callback) = on_entry.as_mut() {
                callback(&outcome);
            }
        }

        summary.duration = start_time.elapsed();

        tracing::info!(
            restored = summary.restored,
            unidentified = summary.unidentified,
            failed = summary.failed,
            "Restore complete in {:.2}s",
            summary.duration.as_secs_f64()
        );

        Ok(summary)
    }

    /// Classifies and routes a single regular file
    fn restore_entry(
        &self,
        entry: &SourceEntry,
        restored_root: &Path,
        unidentified_root: &Path,
    ) -> Result<EntryOutcome, EntryError> {
        let prefix = self
            .store
            .read_prefix(entry.path(), self.classifier.prefix_len())?;

        match self.classifier.classify(&prefix) {
            Classification::Matched(signature) => {
                let label = signature.label();
                let label_dir = restored_root.join(label);
                let destination = label_dir.join(entry.tagged_name(label));

                tracing::debug!(path = %entry.path().display(), label, "Identified");

                let (bytes, digest) = self.copy_into(entry.path(), &label_dir, &destination)?;

                Ok(EntryOutcome::Restored {
                    source: entry.path().to_path_buf(),
                    destination,
                    label: label.to_string(),
                    bytes,
                    digest,
                })
            }
            Classification::Unidentified => {
                tracing::debug!(path = %entry.path().display(), "Unidentified");

                if !self.options.copy_unidentified {
                    return Ok(EntryOutcome::Unidentified {
                        source: entry.path().to_path_buf(),
                        copied_to: None,
                    });
                }

                let destination = unidentified_root.join(entry.name());
                self.copy_into(entry.path(), unidentified_root, &destination)?;

                Ok(EntryOutcome::Unidentified {
                    source: entry.path().to_path_buf(),
                    copied_to: Some(destination),
                })
            }
        }
    }

    /// Copies `source` to `destination`, creating `dir` first. Returns the
    /// byte count and, when verifying, the source digest.
    fn copy_into(
        &self,
        source: &Path,
        dir: &Path,
        destination: &Path,
    ) -> Result<(u64, Option<String>), EntryError> {
        if self.options.dry_run {
            return Ok((0, None));
        }

        self.store.ensure_dir(dir)?;
        let bytes = self.store.copy_file(source, destination)?;

        if !self.options.verify_copies {
            return Ok((bytes, None));
        }

        let expected = self.store.digest(source)?;
        let actual = self.store.digest(destination)?;
        if expected != actual {
            return Err(EntryError::DigestMismatch {
                path: destination.to_path_buf(),
                expected,
                actual,
            });
        }

        Ok((bytes, Some(expected)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EntryKind;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory store; paths ending in a name listed in `unreadable` fail
    /// on read.
    #[derive(Default)]
    struct MemoryStore {
        root: PathBuf,
        files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
        dirs: RefCell<BTreeSet<PathBuf>>,
        unreadable: Vec<&'static str>,
        /// Paths ending in this suffix cannot be created as directories
        ensure_dir_fails: Option<&'static str>,
        list_fails: bool,
        copy_fails: bool,
        corrupt_copies: bool,
    }

    impl MemoryStore {
        fn new() -> Self {
            let root = PathBuf::from("/src");
            let store = Self {
                root: root.clone(),
                ..Default::default()
            };
            store.dirs.borrow_mut().insert(root);
            store
        }

        fn with_file(self, name: &str, data: &[u8]) -> Self {
            self.files.borrow_mut().insert(self.root.join(name), data.to_vec());
            self
        }

        fn file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(Path::new(path)).cloned()
        }

        fn has_dir(&self, path: &str) -> bool {
            self.dirs.borrow().contains(Path::new(path))
        }

        fn fail(path: &Path) -> FileStoreError {
            FileStoreError::PermissionDenied(path.to_path_buf())
        }
    }

    impl FileStore for MemoryStore {
        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.borrow().contains(path)
        }

        fn list_entries(&self, dir: &Path) -> Result<Vec<SourceEntry>, FileStoreError> {
            if self.list_fails {
                return Err(Self::fail(dir));
            }
            let mut entries: Vec<SourceEntry> = self
                .files
                .borrow()
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .map(|p| {
                    SourceEntry::new(p.clone(), p.file_name().unwrap().into(), EntryKind::File)
                })
                .collect();
            entries.extend(
                self.dirs
                    .borrow()
                    .iter()
                    .filter(|p| p.parent() == Some(dir))
                    .map(|p| {
                        let name = p.file_name().unwrap().into();
                        SourceEntry::new(p.clone(), name, EntryKind::Directory)
                    }),
            );
            entries.sort_by(|a, b| a.name().cmp(b.name()));
            Ok(entries)
        }

        fn read_prefix(&self, path: &Path, max_len: usize) -> Result<Vec<u8>, FileStoreError> {
            if self.unreadable.iter().any(|n| path.ends_with(n)) {
                return Err(Self::fail(path));
            }
            let files = self.files.borrow();
            let data = files.get(path).ok_or_else(|| FileStoreError::NotFound(path.into()))?;
            Ok(data[..data.len().min(max_len)].to_vec())
        }

        fn ensure_dir(&self, dir: &Path) -> Result<(), FileStoreError> {
            if self.ensure_dir_fails.is_some_and(|suffix| dir.ends_with(suffix)) {
                return Err(Self::fail(dir));
            }
            self.dirs.borrow_mut().insert(dir.to_path_buf());
            Ok(())
        }

        fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, FileStoreError> {
            if self.copy_fails {
                return Err(Self::fail(dst));
            }
            let mut data = self
                .files
                .borrow()
                .get(src)
                .cloned()
                .ok_or_else(|| FileStoreError::NotFound(src.into()))?;
            if self.corrupt_copies {
                data.push(0);
            }
            let len = data.len() as u64;
            self.files.borrow_mut().insert(dst.to_path_buf(), data);
            Ok(len)
        }

        fn digest(&self, path: &Path) -> Result<String, FileStoreError> {
            let files = self.files.borrow();
            let data = files.get(path).ok_or_else(|| FileStoreError::NotFound(path.into()))?;
            Ok(hex::encode(data))
        }
    }

    fn run(store: &MemoryStore, options: RestoreOptions) -> Result<RestoreSummary, RestoreError> {
        let root = store.root.clone();
        RestoreFilesUseCase::new(Classifier::builtin(), store, options).execute(&root, None)
    }

    #[test]
    fn test_routes_matched_and_unidentified() {
        let store = MemoryStore::new()
            .with_file("photo", &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
            .with_file("blob.dat", &[0x00, 0x00, 0x00, 0x00]);

        let summary = run(&store, RestoreOptions::default()).unwrap();

        assert_eq!(summary.restored, 1);
        assert_eq!(summary.unidentified, 1);
        assert_eq!(
            store.file("/src/Restored_Files/jpg/photo.jpg"),
            Some(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        );
        assert_eq!(
            store.file("/src/Unidentified_Files/blob.dat"),
            Some(vec![0x00, 0x00, 0x00, 0x00])
        );
        assert!(store.file("/src/photo").is_some());
    }

    #[test]
    fn test_unidentified_bucket_disabled() {
        let store = MemoryStore::new().with_file("blob.dat", &[0x00, 0x00]);

        let summary = run(&store, RestoreOptions::new().with_unidentified_copies(false)).unwrap();

        assert_eq!(summary.unidentified, 1);
        assert!(summary.unidentified_root.is_none());
        assert!(!store.has_dir("/src/Unidentified_Files"));
        assert!(store.file("/src/Unidentified_Files/blob.dat").is_none());
    }

    #[test]
    fn test_unreadable_file_does_not_abort() {
        let mut store = MemoryStore::new()
            .with_file("a_locked", &[0xFF, 0xD8, 0xFF])
            .with_file("b_doc", b"%PDF-1.4");
        store.unreadable = vec!["a_locked"];

        let mut seen = Vec::new();
        let root = store.root.clone();
        let summary =
            RestoreFilesUseCase::new(Classifier::builtin(), &store, RestoreOptions::default())
                .execute(&root, Some(Box::new(|o: &EntryOutcome| seen.push(o.clone()))))
                .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.restored, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("a_locked"));
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_failure());
        assert!(store.file("/src/Restored_Files/pdf/b_doc.pdf").is_some());
    }

    #[test]
    fn test_copy_failure_does_not_abort() {
        let mut store = MemoryStore::new()
            .with_file("a_photo", &[0xFF, 0xD8, 0xFF, 0xE0])
            .with_file("b_blob", &[0x00, 0x01]);
        store.copy_fails = true;

        let summary = run(&store, RestoreOptions::default()).unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.restored, 0);
        assert!(summary.errors[0].contains("a_photo"));
        assert!(summary.errors[1].contains("b_blob"));
    }

    #[test]
    fn test_label_dir_failure_does_not_abort() {
        let mut store = MemoryStore::new()
            .with_file("a_photo", &[0xFF, 0xD8, 0xFF, 0xE0])
            .with_file("b_doc", b"%PDF-1.7");
        store.ensure_dir_fails = Some("jpg");

        let summary = run(&store, RestoreOptions::default()).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.restored, 1);
        assert!(summary.errors[0].contains("a_photo"));
        assert!(store.file("/src/Restored_Files/pdf/b_doc.pdf").is_some());
    }

    #[test]
    fn test_destination_root_failure_is_fatal() {
        let mut store = MemoryStore::new().with_file("a_photo", &[0xFF, 0xD8, 0xFF]);
        store.ensure_dir_fails = Some("Restored_Files");

        let err = run(&store, RestoreOptions::default()).unwrap_err();

        assert!(matches!(err, RestoreError::DestinationRoot { .. }));
        assert!(store.file("/src/Restored_Files/jpg/a_photo.jpg").is_none());
    }

    #[test]
    fn test_enumeration_failure_is_fatal() {
        let mut store = MemoryStore::new();
        store.list_fails = true;

        let err = run(&store, RestoreOptions::default()).unwrap_err();
        assert!(matches!(err, RestoreError::Enumeration { .. }));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let store = MemoryStore::new();
        let err = RestoreFilesUseCase::new(Classifier::builtin(), &store, RestoreOptions::default())
            .execute(Path::new("/elsewhere"), None)
            .unwrap_err();

        assert!(matches!(err, RestoreError::NotADirectory(_)));
        assert!(!store.has_dir("/elsewhere/Restored_Files"));
    }

    #[test]
    fn test_destination_dirs_are_skipped_on_rerun() {
        let store = MemoryStore::new().with_file("pic", b"GIF89a\x00\x00");

        let first = run(&store, RestoreOptions::default()).unwrap();
        let second = run(&store, RestoreOptions::default()).unwrap();

        assert_eq!(first.restored, 1);
        assert_eq!(second.restored, 1);
        assert_eq!(second.files_scanned, 1);
        assert_eq!(second.skipped, 1);
        assert!(store.file("/src/Restored_Files/gif/pic.gif").is_some());
    }

    #[test]
    fn test_verification_detects_mismatch() {
        let mut store = MemoryStore::new().with_file("zip", &[0x50, 0x4B, 0x03, 0x04]);
        store.corrupt_copies = true;

        let summary = run(&store, RestoreOptions::new().verified()).unwrap();

        assert_eq!(summary.failed, 1);
        assert!(summary.errors[0].contains("verification failed"));
    }

    #[test]
    fn test_verification_records_digest() {
        let store = MemoryStore::new().with_file("zip", &[0x50, 0x4B, 0x03, 0x04]);

        let mut digest = None;
        let root = store.root.clone();
        RestoreFilesUseCase::new(Classifier::builtin(), &store, RestoreOptions::new().verified())
            .execute(
                &root,
                Some(Box::new(|o: &EntryOutcome| {
                    if let EntryOutcome::Restored { digest: d, .. } = o {
                        digest = d.clone();
                    }
                })),
            )
            .unwrap();

        assert_eq!(digest.as_deref(), Some("504b0304"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let store = MemoryStore::new()
            .with_file("photo", &[0xFF, 0xD8, 0xFF])
            .with_file("blob", &[0x00]);

        let summary = run(&store, RestoreOptions::new().dry_run()).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.restored, 1);
        assert_eq!(summary.unidentified, 1);
        assert_eq!(summary.bytes_copied, 0);
        assert!(!store.has_dir("/src/Restored_Files"));
        assert_eq!(store.files.borrow().len(), 2);
    }
}
