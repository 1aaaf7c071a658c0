//! # Ingredient Aggregator
//!
//! Merges ingredients that share a name and unit into one entry with the
//! summed quantity, so a shopping list shows "500 g Mehl" rather than
//! "200 g Mehl" and "300 g Mehl".
//!
//! The first ingredient seen for a `name|unit` key survives (keeping its `id`
//! and `position`), and every later one is reported as a duplicate whose
//! amount has been folded into the survivor. Sums are exact fractions.
//!
//! An ingredient without an amount counts as one of itself: two "Ei" lines
//! merge into "2 Ei".
//!
//! ## Usage
//!
//! ```rust
//! use foodplanner::aggregator::group_ingredients;
//! use foodplanner::ingredient_model::StructuredIngredient;
//!
//! let items = vec![
//!     StructuredIngredient::new("Mehl").with_quantity("200", "g"),
//!     StructuredIngredient::new("Mehl").with_quantity("300", "g"),
//! ];
//! let result = group_ingredients(&items)?;
//!
//! assert_eq!(result.get("Mehl", "g").unwrap().quantity_value, "500");
//! assert_eq!(result.duplicates().len(), 1);
//! # Ok::<(), foodplanner::quantity_errors::ParseError>(())
//! ```

use crate::ingredient_model::StructuredIngredient;
use crate::quantity::Quantity;
use crate::quantity_errors::ParseError;
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};

/// The grouping key: `name + "|" + quantityUnit`
pub fn grouping_key(ingredient: &StructuredIngredient) -> String {
    key_for(&ingredient.name, &ingredient.quantity_unit)
}

fn key_for(name: &str, unit: &str) -> String {
    format!("{name}|{unit}")
}

/// Merged ingredients in first-seen order, plus the entries merged away
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    /// Insertion sequence -> (key, surviving entry)
    entries: BTreeMap<usize, (String, StructuredIngredient)>,
    /// Key -> insertion sequence
    index: HashMap<String, usize>,
    /// Key -> exact running total, once an entry has been summed
    totals: HashMap<String, Quantity>,
    next_sequence: usize,
    duplicates: Vec<StructuredIngredient>,
}

impl AggregationResult {
    /// Surviving entries in the order their keys were first seen
    pub fn grouped_ingredients(&self) -> impl Iterator<Item = &StructuredIngredient> {
        self.entries.values().map(|(_, ingredient)| ingredient)
    }

    /// Surviving entries with their keys
    pub fn groups(&self) -> impl Iterator<Item = (&str, &StructuredIngredient)> {
        self.entries
            .values()
            .map(|(key, ingredient)| (key.as_str(), ingredient))
    }

    pub fn get(&self, name: &str, unit: &str) -> Option<&StructuredIngredient> {
        self.get_by_key(&key_for(name, unit))
    }

    pub fn get_by_key(&self, key: &str) -> Option<&StructuredIngredient> {
        let sequence = self.index.get(key)?;
        self.entries.get(sequence).map(|(_, ingredient)| ingredient)
    }

    /// Number of surviving entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries made redundant by merging, for the caller to delete
    pub fn duplicates(&self) -> &[StructuredIngredient] {
        &self.duplicates
    }

    /// Split into (surviving entries, duplicates)
    pub fn into_parts(self) -> (Vec<StructuredIngredient>, Vec<StructuredIngredient>) {
        let grouped = self
            .entries
            .into_values()
            .map(|(_, ingredient)| ingredient)
            .collect();
        (grouped, self.duplicates)
    }

    fn insert(&mut self, key: String, ingredient: StructuredIngredient) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.index.insert(key.clone(), sequence);
        self.entries.insert(sequence, (key, ingredient));
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut StructuredIngredient> {
        let sequence = self.index.get(key)?;
        self.entries.get_mut(sequence).map(|(_, ingredient)| ingredient)
    }

    fn remove(&mut self, key: &str) -> Option<StructuredIngredient> {
        self.totals.remove(key);
        let sequence = self.index.remove(key)?;
        self.entries.remove(&sequence).map(|(_, ingredient)| ingredient)
    }

    /// The exact amount held under `key`
    ///
    /// The stored text is only read the first time an entry takes part in a
    /// sum; after that the running total is used, so a total that renders as
    /// `""` is still zero rather than one.
    fn current_amount(
        &self,
        key: &str,
        existing: &StructuredIngredient,
    ) -> Result<Quantity, ParseError> {
        match self.totals.get(key) {
            Some(total) => Ok(total.clone()),
            None => Quantity::implied_quantity_of(&existing.quantity_value),
        }
    }

    /// Set the total under `key` and write it back to the entry
    fn store_amount(&mut self, key: &str, total: Quantity) {
        if let Some(existing) = self.entry_mut(key) {
            existing.quantity_value = total.to_mixed_string();
        }
        self.totals.insert(key.to_string(), total);
    }

    /// Add `amount` to the entry under `key`
    fn fold_amount(&mut self, key: &str, amount: &Quantity) -> Result<(), ParseError> {
        let Some(existing) = self.get_by_key(key) else {
            return Ok(());
        };

        let total = self.current_amount(key, existing)?.add(amount);
        trace!("Folding {} into '{}' ({} -> {})", amount, key, existing.quantity_value, total);
        self.store_amount(key, total);
        Ok(())
    }
}

/// Merge ingredients sharing name and unit
///
/// The first ingredient for each key is copied into the result; every later
/// one is recorded as a duplicate and its amount added to the first.
///
/// # Errors
///
/// Returns a [`ParseError`] when a quantity value is not valid fraction text.
pub fn group_ingredients(items: &[StructuredIngredient]) -> Result<AggregationResult, ParseError> {
    let mut result = AggregationResult::default();

    for ingredient in items {
        let key = grouping_key(ingredient);

        if result.index.contains_key(&key) {
            let amount = Quantity::implied_quantity_of(&ingredient.quantity_value)?;
            result.fold_amount(&key, &amount)?;
            result.duplicates.push(ingredient.clone());
        } else {
            result.insert(key, ingredient.clone());
        }
    }

    debug!(
        "Grouped {} ingredients into {} entries, {} duplicates",
        items.len(),
        result.len(),
        result.duplicates.len()
    );
    Ok(result)
}

/// Merge a shopping list, then take away what the pantry already holds
///
/// Each pantry amount is subtracted from the shopping entry with the same
/// key (an empty pantry amount counts as one). When nothing is left to buy
/// the shopping entry is removed and reported in the duplicates. Pantry
/// entries without a matching shopping entry are ignored, and pantry entries
/// never appear in the result.
///
/// # Errors
///
/// Returns a [`ParseError`] when a quantity value is not valid fraction text.
pub fn subtract_pantry(
    shopping_list: &[StructuredIngredient],
    pantry: &[StructuredIngredient],
) -> Result<AggregationResult, ParseError> {
    let mut result = group_ingredients(shopping_list)?;

    for stock in pantry {
        let key = grouping_key(stock);
        let Some(entry) = result.get_by_key(&key) else {
            trace!("Pantry item '{}' is not on the shopping list", key);
            continue;
        };

        let available = Quantity::implied_quantity_of(&stock.quantity_value)?.negate();
        let remaining = result.current_amount(&key, entry)?.add(&available);

        if remaining.is_positive() {
            trace!("Pantry reduces '{}' from {} to {}", key, entry.quantity_value, remaining);
            result.store_amount(&key, remaining);
        } else if let Some(removed) = result.remove(&key) {
            debug!("Pantry covers '{}', removing it from the shopping list", key);
            result.duplicates.push(removed);
        }
    }

    debug!(
        "Subtracted {} pantry items: {} entries left, {} to remove",
        pantry.len(),
        result.len(),
        result.duplicates.len()
    );
    Ok(result)
}
