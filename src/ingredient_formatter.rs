//! # Ingredient Formatter
//!
//! Renders structured ingredients back into the single-line text a user types
//! into the ingredients textarea. Formatting then re-parsing yields the same
//! structured record for lines whose unit is in the parser's vocabulary.

use crate::ingredient_model::StructuredIngredient;

/// Render "quantityValue quantityUnit name", skipping empty parts
///
/// ```rust
/// use foodplanner::ingredient_formatter::format_ingredient;
/// use foodplanner::ingredient_model::StructuredIngredient;
///
/// let mince = StructuredIngredient::new("Hackfleisch").with_quantity("400", "g");
/// assert_eq!(format_ingredient(&mince), "400 g Hackfleisch");
/// assert_eq!(format_ingredient(&StructuredIngredient::new("Salz")), "Salz");
/// ```
pub fn format_ingredient(ingredient: &StructuredIngredient) -> String {
    [
        ingredient.quantity_value.trim(),
        ingredient.quantity_unit.trim(),
        ingredient.name.trim(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<&str>>()
    .join(" ")
}

/// Format each ingredient on its own line, to prefill an edit textarea
pub fn join_lines(ingredients: &[StructuredIngredient]) -> String {
    ingredients
        .iter()
        .map(format_ingredient)
        .collect::<Vec<String>>()
        .join("\n")
}
