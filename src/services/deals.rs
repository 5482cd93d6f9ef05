//! Recent-deals table assembly.

use serde::Serialize;

use crate::models::deal::Deal;

/// Maximum rows shown in the recent-deals table.
const TABLE_LIMIT: usize = 15;

/// Longest name shown before truncation.
const NAME_LIMIT: usize = 30;

/// One row of the recent-deals table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealRow {
    pub name: String,
    pub status: String,
    pub city: String,
}

/// The first named deals in collection order, capped at the table limit,
/// with long names truncated for display.
pub fn recent_deals(deals: &[Deal]) -> Vec<DealRow> {
    deals
        .iter()
        .filter(|deal| deal.is_named())
        .take(TABLE_LIMIT)
        .map(|deal| DealRow {
            name: truncate_name(&deal.name),
            status: deal.status.clone(),
            city: deal.city.clone(),
        })
        .collect()
}

/// Keep the first 30 characters of an over-long name and mark the cut.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
