//! Domain services
//!
//! Signature lookup and classification logic operating on domain entities.

mod classifier;
mod signature_table;

pub use classifier::Classifier;
pub use signature_table::SignatureTable;
