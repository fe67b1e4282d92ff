//! Classifier service
//!
//! Decides the type of a file from its leading bytes.

use super::SignatureTable;
use crate::domain::entities::Classification;

/// Matches byte prefixes against a [`SignatureTable`]
///
/// # Example
///
/// ```
/// use resift::domain::services::Classifier;
///
/// let classifier = Classifier::builtin();
/// let result = classifier.classify(&[0xFF, 0xD8, 0xFF, 0xE0]);
/// assert_eq!(result.label(), Some("jpg"));
/// assert!(!classifier.classify(&[]).is_identified());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    table: &'t SignatureTable,
}

impl<'t> Classifier<'t> {
    pub fn new(table: &'t SignatureTable) -> Self {
        Self { table }
    }

    /// Returns the table this classifier consults
    pub fn table(&self) -> &'t SignatureTable {
        self.table
    }

    /// Number of leading bytes worth reading from a candidate
    pub fn prefix_len(&self) -> usize {
        self.table.longest_magic()
    }

    /// Classifies the first bytes of a file.
    ///
    /// `prefix` may be shorter than [`prefix_len`](Self::prefix_len); a
    /// signature matches whenever the available bytes start with it. The
    /// first hit in table order is the longest matching signature.
    pub fn classify(&self, prefix: &[u8]) -> Classification<'t> {
        self.table
            .iter()
            .find(|sig| sig.matches(prefix))
            .map_or(Classification::Unidentified, Classification::Matched)
    }
}

impl Classifier<'static> {
    /// Classifier over the built-in signature table
    pub fn builtin() -> Self {
        Self::new(SignatureTable::builtin())
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
