//! HTTP routes.

pub mod complaints;
pub mod health;
