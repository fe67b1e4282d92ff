//! File signature entity
//!
//! Represents the magic bytes at the start of a file that identify its
//! format, and the outcome of matching a file's leading bytes against them.

use std::fmt;

/// A file signature: magic bytes expected at offset zero plus the type label
/// assigned to files that start with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileSignature {
    /// Short lowercase type label, used for routing and as the filename suffix
    label: &'static str,
    /// The header bytes (magic bytes at the start of the file)
    magic: &'static [u8],
    /// Human-readable format name
    description: &'static str,
}

impl FileSignature {
    /// Creates a new file signature
    pub const fn new(label: &'static str, magic: &'static [u8], description: &'static str) -> Self {
        Self {
            label,
            magic,
            description,
        }
    }

    /// Returns the type label
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the magic bytes
    pub fn magic(&self) -> &'static [u8] {
        self.magic
    }

    /// Returns the human-readable format name
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Length of the magic in bytes
    pub fn len(&self) -> usize {
        self.magic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magic.is_empty()
    }

    /// Checks if `prefix` starts with this signature's magic bytes.
    ///
    /// An empty magic never matches.
    pub fn matches(&self, prefix: &[u8]) -> bool {
        !self.magic.is_empty() && prefix.starts_with(self.magic)
    }

    /// Magic bytes as space-separated uppercase hex, e.g. `FF D8 FF`
    pub fn magic_hex(&self) -> String {
        self.magic
            .iter()
            .map(|b| hex::encode_upper([*b]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FileSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.magic_hex())
    }
}

/// Outcome of classifying a byte prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'t> {
    /// The longest registered signature that prefixes the input
    Matched(&'t FileSignature),
    /// No registered signature prefixes the input
    Unidentified,
}

impl Classification<'_> {
    /// Returns the matched type label, if any
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Classification::Matched(sig) => Some(sig.label()),
            Classification::Unidentified => None,
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Matched(sig) => write!(f, "{}", sig.label()),
            Classification::Unidentified => write!(f, "unidentified"),
        }
    }
}
