//! `shelfsmart-core` — foundation building blocks for the replenishment core.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, RunId};
pub use value_object::ValueObject;
