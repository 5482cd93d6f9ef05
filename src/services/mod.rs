//! Business logic services.

pub mod dashboard;
pub mod deals;
