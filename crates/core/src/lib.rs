//! `keystone-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives: the entity marker, the
//! capability contracts entities can conform to, and the shared error type.

pub mod audit;
pub mod entity;
pub mod error;
pub mod service;

pub use audit::Auditable;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use service::Service;
