//! Domain layer - Core business logic
//!
//! This module contains the signature entities, the classifier and the
//! file store contract. It performs no I/O of its own.

pub mod entities;
pub mod repositories;
pub mod services;
