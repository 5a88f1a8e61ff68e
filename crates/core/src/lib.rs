//! `akmdocs-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no clock, no IO):
//! document types and the error model used by the numbering and words crates.

pub mod document;
pub mod error;
pub mod value_object;

pub use document::DocumentType;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
