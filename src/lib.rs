//! # FoodPlanner Ingredients
//!
//! Ingredient parsing and aggregation for the FoodPlanner shopping list and
//! pantry screens: free-text lines become structured records, records are
//! merged with exact fraction arithmetic, and merged records are rendered back
//! into text.
//!
//! ```rust
//! use foodplanner::aggregator::group_ingredients;
//! use foodplanner::ingredient_formatter::join_lines;
//! use foodplanner::ingredient_parser::IngredientParser;
//!
//! let parser = IngredientParser::default();
//! let items = parser.parse_text("200 g Mehl\n1 Prise Salz\n300 g Mehl");
//! let (merged, duplicates) = group_ingredients(&items)?.into_parts();
//!
//! assert_eq!(join_lines(&merged), "500 g Mehl\n1 Prise Salz");
//! assert_eq!(duplicates.len(), 1);
//! # Ok::<(), foodplanner::quantity_errors::ParseError>(())
//! ```

pub mod aggregator;
pub mod config;
pub mod ingredient_formatter;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod quantity;
pub mod quantity_errors;
pub mod sync_plan;
pub mod unit_vocabulary;
