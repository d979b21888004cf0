//! `omnisuite-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no UI or storage concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod revision;

pub use entity::{Entity, next_id};
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use revision::Revision;
