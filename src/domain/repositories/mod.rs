//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod file_store;

pub use file_store::{FileStore, FileStoreError};
