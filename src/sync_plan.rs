//! # Sync Plan Module
//!
//! Turns an aggregation result into the storage calls a caller has to make:
//! a PATCH for each surviving record whose quantity changed and a DELETE for
//! each record merged away. The calls are independent of each other and may
//! be issued concurrently; this module only decides what they are.

use crate::aggregator::{group_ingredients, subtract_pantry, AggregationResult};
use crate::ingredient_model::StructuredIngredient;
use crate::quantity_errors::ParseError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Storage changes produced by merging a list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPlan {
    /// The list as it should read afterwards, in first-seen order
    pub items: Vec<StructuredIngredient>,
    /// Persisted records whose quantity changed (PATCH)
    pub updates: Vec<StructuredIngredient>,
    /// Persisted records to remove (DELETE)
    pub deletions: Vec<StructuredIngredient>,
}

impl SyncPlan {
    /// Compare an aggregation result against the records it was built from
    ///
    /// Only records carrying an `id` produce storage calls; entries that were
    /// never persisted have nothing to patch or delete.
    pub fn from_aggregation(result: AggregationResult, originals: &[StructuredIngredient]) -> Self {
        let stored: HashMap<i64, &StructuredIngredient> = originals
            .iter()
            .filter_map(|original| original.id.map(|id| (id, original)))
            .collect();

        let (items, duplicates) = result.into_parts();

        let updates = items
            .iter()
            .filter(|item| match item.id.and_then(|id| stored.get(&id)) {
                Some(original) => original.quantity_value != item.quantity_value,
                None => {
                    if item.id.is_some() {
                        warn!(id = ?item.id, name = %item.name, "Merged record has no stored original");
                    }
                    false
                }
            })
            .cloned()
            .collect::<Vec<_>>();

        let deletions = duplicates
            .into_iter()
            .filter(|duplicate| {
                if duplicate.id.is_none() {
                    debug!(name = %duplicate.name, "Skipping delete of unsaved record");
                }
                duplicate.id.is_some()
            })
            .collect::<Vec<_>>();

        Self { items, updates, deletions }
    }

    /// Nothing to send to storage
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.deletions.is_empty()
    }
}

/// Merge duplicate entries of one shopping list
///
/// # Errors
///
/// Returns a [`ParseError`] when a stored quantity value is malformed.
pub fn plan_shopping_list_merge(list: &[StructuredIngredient]) -> Result<SyncPlan, ParseError> {
    let result = group_ingredients(list)?;
    let plan = SyncPlan::from_aggregation(result, list);

    info!(
        items = plan.items.len(),
        updates = plan.updates.len(),
        deletions = plan.deletions.len(),
        "Planned shopping list merge"
    );
    Ok(plan)
}

/// Merge a shopping list and take away what the pantry already holds
///
/// # Errors
///
/// Returns a [`ParseError`] when a stored quantity value is malformed.
pub fn plan_pantry_subtraction(
    list: &[StructuredIngredient],
    pantry: &[StructuredIngredient],
) -> Result<SyncPlan, ParseError> {
    let result = subtract_pantry(list, pantry)?;
    let plan = SyncPlan::from_aggregation(result, list);

    info!(
        pantry = pantry.len(),
        items = plan.items.len(),
        updates = plan.updates.len(),
        deletions = plan.deletions.len(),
        "Planned pantry subtraction"
    );
    Ok(plan)
}

/// Read a JSON array of ingredient records as the API layer returns them
pub fn load_ingredient_records(path: &Path) -> Result<Vec<StructuredIngredient>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ingredient records from {}", path.display()))?;
    let records: Vec<StructuredIngredient> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid ingredient records in {}", path.display()))?;

    debug!(count = records.len(), path = %path.display(), "Loaded ingredient records");
    Ok(records)
}
