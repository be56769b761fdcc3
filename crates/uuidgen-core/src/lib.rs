//! Core types for the uuidgen workspace.
//!
//! This crate provides the identifier, variant, namespace and batch types
//! shared by the generators and the command-line front end.

pub mod batch;
pub mod error;
pub mod identifier;
pub mod namespace;
pub mod variant;

pub use batch::{Batch, BatchSize, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
pub use error::CoreError;
pub use identifier::Identifier;
pub use namespace::Namespace;
pub use variant::Variant;
