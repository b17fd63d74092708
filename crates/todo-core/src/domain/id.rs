//! Id Generation
//!
//! Ids are handed out by an `IdSource` owned by the list.

use super::todo::TodoId;

/// Source of fresh todo ids
pub trait IdSource {
    /// Returns an id never returned before by this source
    fn next_id(&mut self) -> TodoId;
}

/// Monotonic counter starting at 1
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: TodoId,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        self.last += 1;
        self.last
    }
}

/// Timestamp ids from a millisecond clock
///
/// A clock reading that does not move past the last id (same millisecond,
/// or the clock stepping backwards) yields `last + 1` instead.
pub struct ClockIds<F> {
    clock: F,
    last: TodoId,
}

impl<F: FnMut() -> u64> ClockIds<F> {
    pub fn new(clock: F) -> Self {
        Self { clock, last: 0 }
    }
}

impl<F: FnMut() -> u64> IdSource for ClockIds<F> {
    fn next_id(&mut self) -> TodoId {
        let now = (self.clock)();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }
}

impl<F> std::fmt::Debug for ClockIds<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockIds").field("last", &self.last).finish()
    }
}
