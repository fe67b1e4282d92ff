//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.
//! This layer contains all direct filesystem access.

pub mod persistence;
