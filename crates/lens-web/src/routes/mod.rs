//! Route handlers.

pub mod dashboard;
pub mod health;
pub mod market;
