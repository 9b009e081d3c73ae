//! Complaint intake bounded context.
//!
//! Turns a raw submission into a canonical `Complaint`, stamps it with a
//! server-assigned identity, status and creation time, and publishes it as a
//! `complaint.created` event.

pub mod application;
pub mod domain;
