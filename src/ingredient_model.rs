//! # Structured Ingredient Model
//!
//! One line item of a recipe, shopping list or pantry. Quantities travel as
//! text (`"1 1/2"`, `""`) exactly as the storage layer holds them; they are
//! read into [`Quantity`](crate::quantity::Quantity) values only when lists are
//! merged.
//!
//! Records are exchanged with the storage/API layer as camelCase JSON:
//!
//! ```rust
//! use foodplanner::ingredient_model::StructuredIngredient;
//!
//! let json = r#"{"id": 7, "name": "Mehl", "quantityValue": "200", "quantityUnit": "g", "checked": false}"#;
//! let ingredient: StructuredIngredient = serde_json::from_str(json)?;
//!
//! assert_eq!(ingredient.id, Some(7));
//! assert_eq!(ingredient.quantity_unit, "g");
//! assert_eq!(ingredient.to_string(), "200 g Mehl");
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::ingredient_formatter::format_ingredient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed ingredient: name, textual quantity and unit, plus list metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredIngredient {
    /// Storage identifier, absent for records that were never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Freeform name with quantity and unit stripped (e.g. "Hackfleisch")
    #[serde(default)]
    pub name: String,

    /// Textual fraction (e.g. "400", "1 1/2"), empty when no amount was given
    #[serde(default)]
    pub quantity_value: String,

    /// Unit token (e.g. "g", "gehäufter TL"), empty when none was recognised
    #[serde(default)]
    pub quantity_unit: String,

    /// Position within its list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Checked-off state on a shopping list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl StructuredIngredient {
    /// Create an ingredient with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Set the textual quantity and unit
    pub fn with_quantity(mut self, quantity_value: &str, quantity_unit: &str) -> Self {
        self.quantity_value = quantity_value.to_string();
        self.quantity_unit = quantity_unit.to_string();
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Check if an amount was given
    pub fn has_quantity(&self) -> bool {
        !self.quantity_value.trim().is_empty()
    }

    /// Check if a unit was recognised
    pub fn has_unit(&self) -> bool {
        !self.quantity_unit.is_empty()
    }

    /// A bare number with neither unit nor name (e.g. the line "3")
    pub fn is_quantity_only(&self) -> bool {
        self.has_quantity() && !self.has_unit() && self.name.is_empty()
    }
}

impl fmt::Display for StructuredIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_ingredient(self))
    }
}
