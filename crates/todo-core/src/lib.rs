//! Todo Core
//!
//! In-memory todo list state machine:
//! - domain: the todo entity, id generation and domain errors
//! - list: the controller owning the collection
//! - filter: views over the collection (filters and counters)

pub mod domain;
mod filter;
mod list;

#[cfg(test)]
mod tests;

pub use domain::{ClockIds, DomainError, DomainResult, Entity, IdSource, SequentialIds, Todo, TodoId};
pub use filter::{Filter, Stats};
pub use list::TodoList;
