//! Domain Layer
//!
//! Contains the todo entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod id;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use id::{ClockIds, IdSource, SequentialIds};
pub use todo::{Todo, TodoId};
