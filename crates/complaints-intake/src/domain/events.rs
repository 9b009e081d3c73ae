//! Integration events emitted by the intake context.

use complaints_core::event::IntegrationEvent;

use crate::domain::complaint::Complaint;

/// Event type for a newly created complaint.
pub const COMPLAINT_CREATED: &str = "complaint.created";

/// Schema version of the `complaint.created` payload. Bump on any change to
/// the `Complaint` wire shape.
pub const COMPLAINT_CREATED_VERSION: u32 = 1;

impl IntegrationEvent for Complaint {
    const EVENT_TYPE: &'static str = COMPLAINT_CREATED;
    const EVENT_VERSION: u32 = COMPLAINT_CREATED_VERSION;
}
