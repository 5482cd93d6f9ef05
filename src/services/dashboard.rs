//! Dashboard aggregation over the deal and goal collections.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::cache::Collection;
use crate::errors::AppError;
use crate::models::deal::Deal;
use crate::models::goal::GoalEntry;
use crate::models::metrics::{MetricsSnapshot, GOAL_TARGET, GOAL_YEAR};
use crate::notion::Page;
use crate::services::deals::{recent_deals, DealRow};
use crate::AppState;

/// Everything one render of the dashboard needs.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub metrics: MetricsSnapshot,
    pub recent_deals: Vec<DealRow>,
    pub goal_target: f64,
    pub goal_year: i32,
    pub generated_at: DateTime<Utc>,
}

/// Per-record extraction breakdown of the goal collection, for checking
/// what each entry contributed to the totals.
#[derive(Debug, Serialize)]
pub struct GoalBreakdown {
    pub total_records: usize,
    pub entries: Vec<GoalEntry>,
}

/// Assemble the full dashboard view: cached fetches of both collections,
/// decode, aggregate.
pub async fn get_view(state: &AppState) -> Result<DashboardView, AppError> {
    let (deal_pages, goal_pages) = tokio::try_join!(
        fetch_collection(state, Collection::Deals),
        fetch_collection(state, Collection::Goals),
    )?;

    let deals: Vec<Deal> = deal_pages.iter().map(Deal::from_page).collect();
    let goals: Vec<GoalEntry> = goal_pages.iter().map(GoalEntry::from_page).collect();

    let metrics = compute_metrics(&deals, &goals, Utc::now().year());
    let recent = recent_deals(&deals);

    Ok(DashboardView {
        metrics,
        recent_deals: recent,
        goal_target: GOAL_TARGET,
        goal_year: GOAL_YEAR,
        generated_at: Utc::now(),
    })
}

/// Decode every goal entry for the inspection endpoint.
pub async fn goal_breakdown(state: &AppState) -> Result<GoalBreakdown, AppError> {
    let pages = fetch_collection(state, Collection::Goals).await?;
    let entries: Vec<GoalEntry> = pages.iter().map(GoalEntry::from_page).collect();

    Ok(GoalBreakdown {
        total_records: entries.len(),
        entries,
    })
}

async fn fetch_collection(
    state: &AppState,
    collection: Collection,
) -> Result<Arc<Vec<Page>>, AppError> {
    let database_id = match collection {
        Collection::Deals => &state.config.deals_database_id,
        Collection::Goals => &state.config.goals_database_id,
    };

    state
        .cache
        .get_or_fetch(collection, state.notion.query_database(database_id))
        .await
        .map_err(AppError::from)
}

/// Aggregate both collections into one metrics snapshot.
///
/// Closed money comes from the goal collection alone: a closed entry
/// contributes its realized amount, a contracted deal's own value is
/// excluded from the open pipeline, and nothing is counted twice. A
/// goal entry that is not closed contributes its potential when that is
/// positive.
pub fn compute_metrics(deals: &[Deal], goals: &[GoalEntry], current_year: i32) -> MetricsSnapshot {
    let mut closed_count = 0u32;
    let mut closed_value = 0.0;
    let mut potential_value = 0.0;

    for goal in goals {
        if goal.is_closed() {
            closed_count += 1;
            closed_value += goal.realized;
        } else if goal.potential > 0.0 {
            potential_value += goal.potential;
        }
    }

    let mut by_status: BTreeMap<String, u32> = BTreeMap::new();
    let mut by_city: BTreeMap<String, u32> = BTreeMap::new();
    let mut open_value = 0.0;

    for deal in deals {
        *by_status.entry(deal.status.clone()).or_insert(0) += 1;
        *by_city.entry(deal.city.clone()).or_insert(0) += 1;
        if !deal.is_closed() {
            open_value += deal.value;
        }
    }

    let remaining_to_goal = GOAL_TARGET - closed_value;
    let years_remaining = GOAL_YEAR - current_year;
    let required_per_year = remaining_to_goal / f64::from(years_remaining.max(1));

    MetricsSnapshot {
        total_deals: deals.len(),
        by_status,
        by_city,
        open_value,
        closed_count,
        closed_value,
        potential_value,
        remaining_to_goal,
        years_remaining,
        required_per_year,
    }
}
