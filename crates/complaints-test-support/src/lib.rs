//! Shared test doubles for the complaint intake service.

mod broker;
mod clock;
mod id;

pub use broker::{FailingBroker, RecordingBroker};
pub use clock::{FixedClock, SteppingClock};
pub use id::SequenceIdGenerator;
