//! Complaints Core — shared abstractions.
//!
//! This crate defines the traits and types that the intake context, the
//! broker adapter and the HTTP layer agree on. It contains no
//! infrastructure code.

pub mod broker;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod id;
