//! Signature table service
//!
//! Holds the collection of file signatures used for classification, kept in
//! match order: longest magic first, ties in registration order. A shorter
//! signature that happens to prefix a longer one can therefore never shadow
//! it.

use crate::domain::entities::FileSignature;
use std::sync::LazyLock;

/// Built-in signatures in registration order.
const BUILTIN_SIGNATURES: &[FileSignature] = &[
    FileSignature::new("jpg", &[0xFF, 0xD8, 0xFF], "JPEG image"),
    FileSignature::new(
        "png",
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        "PNG image",
    ),
    // GIF87a
    FileSignature::new("gif", &[0x47, 0x49, 0x46, 0x38, 0x37, 0x61], "GIF image"),
    // GIF89a
    FileSignature::new("gif", &[0x47, 0x49, 0x46, 0x38, 0x39, 0x61], "GIF image"),
    FileSignature::new("bmp", &[0x42, 0x4D], "BMP image"),
    // ID3v2 tag
    FileSignature::new("mp3", &[0x49, 0x44, 0x33], "MP3 audio"),
    FileSignature::new("pdf", &[0x25, 0x50, 0x44, 0x46, 0x2D], "PDF document"),
    FileSignature::new("zip", &[0x50, 0x4B, 0x03, 0x04], "ZIP archive"),
    // SGI image
    FileSignature::new("rgb", &[0x01, 0xDA], "SGI RGB image"),
    // Big-endian
    FileSignature::new("tif", &[0x4D, 0x4D, 0x00, 0x2A], "TIFF image"),
    // Little-endian
    FileSignature::new("tif", &[0x49, 0x49, 0x2A, 0x00], "TIFF image"),
];

static BUILTIN: LazyLock<SignatureTable> =
    LazyLock::new(|| SignatureTable::new(BUILTIN_SIGNATURES.iter().copied()));

/// Ordered, immutable table of file signatures
///
/// # Example
///
/// ```
/// use resift::domain::services::SignatureTable;
///
/// let table = SignatureTable::builtin();
/// assert_eq!(table.longest_magic(), 8);
/// assert_eq!(table.iter().next().unwrap().label(), "png");
/// ```
#[derive(Debug, Clone)]
pub struct SignatureTable {
    /// Signatures sorted by descending magic length
    signatures: Vec<FileSignature>,
    /// Distinct labels in first-registered order
    labels: Vec<&'static str>,
}

impl SignatureTable {
    /// Builds a table from signatures given in registration order
    pub fn new(signatures: impl IntoIterator<Item = FileSignature>) -> Self {
        let mut signatures: Vec<FileSignature> = signatures.into_iter().collect();

        let mut labels: Vec<&'static str> = Vec::new();
        for sig in &signatures {
            if !labels.contains(&sig.label()) {
                labels.push(sig.label());
            }
        }

        // Stable: equal lengths stay in registration order
        signatures.sort_by(|a, b| b.len().cmp(&a.len()));

        Self { signatures, labels }
    }

    /// The process-wide table of built-in signatures
    pub fn builtin() -> &'static SignatureTable {
        &BUILTIN
    }

    /// Signatures in match order
    pub fn iter(&self) -> impl Iterator<Item = &FileSignature> {
        self.signatures.iter()
    }

    /// Length of the longest registered magic
    pub fn longest_magic(&self) -> usize {
        self.signatures.first().map(FileSignature::len).unwrap_or(0)
    }

    /// Distinct type labels in first-registered order
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Returns the number of registered signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
