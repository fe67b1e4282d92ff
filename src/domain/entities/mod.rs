//! Domain entities
//!
//! Core objects of the classification domain: signatures, classification
//! outcomes and the entries they are applied to.

mod file_signature;
mod source_entry;

pub use file_signature::{Classification, FileSignature};
pub use source_entry::{EntryKind, SourceEntry};
