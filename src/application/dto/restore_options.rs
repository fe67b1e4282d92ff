//! Restore options DTO

/// Default name of the directory holding identified copies
pub const RESTORED_DIR_NAME: &str = "Restored_Files";

/// Default name of the directory holding unidentified copies
pub const UNIDENTIFIED_DIR_NAME: &str = "Unidentified_Files";

/// Options for a restore run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Copy unidentified files into their own bucket instead of only
    /// reporting them
    pub copy_unidentified: bool,
    /// Compare SHA-256 of every copy against its source
    pub verify_copies: bool,
    /// Classify and report without creating directories or copying
    pub dry_run: bool,
    /// Name of the identified-files root, created inside the source directory
    pub restored_dir_name: String,
    /// Name of the unidentified-files root, created inside the source directory
    pub unidentified_dir_name: String,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            copy_unidentified: true,
            verify_copies: false,
            dry_run: false,
            restored_dir_name: RESTORED_DIR_NAME.to_string(),
            unidentified_dir_name: UNIDENTIFIED_DIR_NAME.to_string(),
        }
    }
}

impl RestoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unidentified files are copied
    pub fn with_unidentified_copies(mut self, enabled: bool) -> Self {
        self.copy_unidentified = enabled;
        self
    }

    /// Enables copy verification
    pub fn verified(mut self) -> Self {
        self.verify_copies = true;
        self
    }

    /// Enables dry-run mode
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}
