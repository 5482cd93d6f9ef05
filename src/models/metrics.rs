//! Aggregated metrics served to the dashboard page.

use std::collections::BTreeMap;

use serde::Serialize;

/// Financial target for the 2030 goal, in BRL.
pub const GOAL_TARGET: f64 = 20_000_000.0;

/// Year the goal is due.
pub const GOAL_YEAR: i32 = 2030;

/// Derived metrics for one render of the dashboard.
///
/// Histograms use ordered maps so the serialized form is stable across
/// renders.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Every deal in the pipeline collection, named or not.
    pub total_deals: usize,
    pub by_status: BTreeMap<String, u32>,
    pub by_city: BTreeMap<String, u32>,
    /// Sum of deal values excluding contracted deals.
    pub open_value: f64,
    pub closed_count: u32,
    /// Realized money across closed goal entries.
    pub closed_value: f64,
    /// Projected money across entries that are not closed.
    pub potential_value: f64,
    pub remaining_to_goal: f64,
    /// Calendar years until the goal year; can reach zero or go
    /// negative once the deadline passes.
    pub years_remaining: i32,
    /// Pace needed to hit the target, floored to a one-year horizon.
    pub required_per_year: f64,
}
