//! Domain layer for the intake context.

pub mod commands;
pub mod complaint;
pub mod events;
