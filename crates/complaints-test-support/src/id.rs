//! Test identifier generators.

use std::collections::VecDeque;
use std::sync::Mutex;

use complaints_core::id::IdGenerator;
use uuid::Uuid;

/// Hands out identifiers from a predetermined sequence. Panics if the
/// sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    ids: Mutex<VecDeque<Uuid>>,
}

impl SequenceIdGenerator {
    /// Create a generator that yields `ids` in order.
    #[must_use]
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self {
            ids: Mutex::new(ids.into()),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .expect("SequenceIdGenerator exhausted")
    }
}
