//! Application layer for the intake context.

pub mod command_handlers;
pub mod publisher;
