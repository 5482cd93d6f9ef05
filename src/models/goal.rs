//! Financial-goal records and the closed/potential classification.

use serde::Serialize;

use crate::models::{SEM_STATUS, STATUS_CONTRATADO};
use crate::notion::{Page, Property};

const FIELD_STATUS: &str = "Status";
const FIELD_REALIZED: &str = "Realizado";
const FIELD_VALUE: &str = "Valor";
const FIELD_POTENTIAL: &str = "Potencial";

/// One row of the financial-goal collection.
///
/// `value` is the deal's own nominal amount. It is surfaced for
/// inspection but deliberately excluded from the aggregates, which count
/// realized money once (see `services::dashboard`).
#[derive(Debug, Clone, Serialize)]
pub struct GoalEntry {
    pub status: String,
    pub realized: f64,
    pub value: f64,
    pub potential: f64,
}

impl GoalEntry {
    /// Decode a goal entry from a queried page. The status arrives
    /// through a rollup over the linked deal.
    pub fn from_page(page: &Page) -> Self {
        Self {
            status: page
                .property(FIELD_STATUS)
                .and_then(Property::rollup_status)
                .unwrap_or(SEM_STATUS)
                .to_string(),
            realized: page.number(FIELD_REALIZED),
            value: page.number(FIELD_VALUE),
            potential: page.number(FIELD_POTENTIAL),
        }
    }

    /// Closed means contracted with realized money on the books. A
    /// contracted entry with nothing realized yet stays out of the
    /// closed totals.
    pub fn is_closed(&self) -> bool {
        self.status == STATUS_CONTRATADO && self.realized > 0.0
    }
}
