//! Identifier generation.
//!
//! Production code draws random version 4 UUIDs; tests inject a fixed
//! sequence so published payloads can be asserted exactly.

use uuid::Uuid;

/// Source of identifiers that are unique for all practical purposes.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> Uuid;
}

/// Generates 122-bit random UUIDs from the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
