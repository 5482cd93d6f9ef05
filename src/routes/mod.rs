//! Route definitions for the Esteira API.

pub mod dashboard;
pub mod health;
pub mod ui;
