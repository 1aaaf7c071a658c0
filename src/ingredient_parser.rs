//! # Ingredient Parser
//!
//! Turns free-text ingredient lines, as typed into a recipe textarea, into
//! [`StructuredIngredient`] records.
//!
//! ## How a line is read
//!
//! 1. The leading run of digits, dots, slashes and whitespace is the quantity
//!    ("1 1/2", "400", "0.5"). It may be empty.
//! 2. If the rest of the line starts with a unit from the
//!    [`UnitVocabulary`] followed by whitespace (or nothing), that unit is
//!    split off; everything after it is the name.
//! 3. Otherwise the whole rest is the name and the unit is empty.
//!
//! Parsing never fails: text the heuristic cannot place ends up in the name.
//!
//! ## Usage
//!
//! ```rust
//! use foodplanner::ingredient_parser::IngredientParser;
//!
//! let parser = IngredientParser::default();
//! let mince = parser.parse_line("400 g Hackfleisch", None);
//!
//! assert_eq!(mince.quantity_value, "400");
//! assert_eq!(mince.quantity_unit, "g");
//! assert_eq!(mince.name, "Hackfleisch");
//! ```

use crate::ingredient_model::StructuredIngredient;
use crate::unit_vocabulary::UnitVocabulary;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

lazy_static! {
    /// A line made only of quantity characters, e.g. "3" or "1 1/2"
    static ref NUMERIC_LINE: Regex =
        Regex::new(r"^[\d./\s]+$").expect("numeric line pattern should be valid");
    /// Leading quantity run followed by unit and name
    static ref INGREDIENT_LINE: Regex = Regex::new(r"^(?P<qty>[\d./\s]*)(?P<rest>.*)$")
        .expect("ingredient line pattern should be valid");
}

/// Line parser over an injected unit vocabulary
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    vocabulary: UnitVocabulary,
}

impl IngredientParser {
    pub fn new(vocabulary: UnitVocabulary) -> Self {
        debug!("Creating IngredientParser with {} units", vocabulary.len());
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &UnitVocabulary {
        &self.vocabulary
    }

    /// Parse one textarea line
    ///
    /// A line that is only a number ("3") yields that number as the quantity
    /// with an empty unit and name; callers decide what such a line means.
    pub fn parse_line(&self, line: &str, position: Option<u32>) -> StructuredIngredient {
        let trimmed = line.trim();

        let (quantity_value, quantity_unit, name) = if NUMERIC_LINE.is_match(trimmed) {
            trace!("Line '{}' is quantity only", trimmed);
            (collapse_whitespace(trimmed), String::new(), String::new())
        } else {
            let (quantity_text, rest) = match INGREDIENT_LINE.captures(trimmed) {
                Some(captures) => (
                    captures.name("qty").map_or("", |m| m.as_str()),
                    captures.name("rest").map_or("", |m| m.as_str()),
                ),
                None => ("", trimmed),
            };
            let (unit, name) = self.split_unit(rest.trim());
            (collapse_whitespace(quantity_text), unit, collapse_whitespace(name))
        };

        debug!(
            "Parsed line '{}' -> quantity='{}', unit='{}', name='{}'",
            line, quantity_value, quantity_unit, name
        );

        StructuredIngredient {
            name,
            quantity_value,
            quantity_unit,
            position,
            ..Default::default()
        }
    }

    /// Parse a whole textarea, one ingredient per line
    ///
    /// Lines are split on `\n` or `\r\n`; blank lines are skipped and the
    /// remaining lines are numbered from 0 in order.
    pub fn parse_text(&self, text: &str) -> Vec<StructuredIngredient> {
        let ingredients: Vec<StructuredIngredient> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, line)| self.parse_line(line, u32::try_from(index).ok()))
            .collect();

        debug!("Parsed {} ingredients from {} lines", ingredients.len(), text.lines().count());
        ingredients
    }

    fn split_unit<'a>(&'a self, candidate: &'a str) -> (String, &'a str) {
        match self.vocabulary.match_prefix(candidate) {
            Some((unit, name)) => (unit.to_string(), name),
            None => (String::new(), candidate),
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> StructuredIngredient {
        IngredientParser::default().parse_line(line, None)
    }

    fn parts(ingredient: &StructuredIngredient) -> (&str, &str, &str) {
        (
            ingredient.quantity_value.as_str(),
            ingredient.quantity_unit.as_str(),
            ingredient.name.as_str(),
        )
    }

    #[test]
    fn test_parse_quantity_unit_and_name() {
        assert_eq!(parts(&parse("400 g Hackfleisch")), ("400", "g", "Hackfleisch"));
        assert_eq!(parts(&parse("1 Prise Salz")), ("1", "Prise", "Salz"));
        assert_eq!(parts(&parse("500 ml Milch")), ("500", "ml", "Milch"));
    }

    #[test]
    fn test_parse_without_unit() {
        assert_eq!(parts(&parse("2 Eier")), ("2", "", "Eier"));
        assert_eq!(parts(&parse("3 Zwiebeln")), ("3", "", "Zwiebeln"));
    }

    #[test]
    fn test_unit_must_be_a_whole_word() {
        assert_eq!(parts(&parse("4 Eier")), ("4", "", "Eier"));
        assert_eq!(parts(&parse("1 gelbe Paprika")), ("1", "", "gelbe Paprika"));
        assert_eq!(parts(&parse("2 Limetten")), ("2", "", "Limetten"));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parts(&parse("1 1/2 TL Salz")), ("1 1/2", "TL", "Salz"));
        assert_eq!(parts(&parse("3/4 l Wasser")), ("3/4", "l", "Wasser"));
        assert_eq!(parts(&parse("0.5 kg Kartoffeln")), ("0.5", "kg", "Kartoffeln"));
    }

    #[test]
    fn test_parse_multi_word_unit() {
        assert_eq!(parts(&parse("1 gehäufter TL Zucker")), ("1", "gehäufter TL", "Zucker"));
        assert_eq!(parts(&parse("2 gehäufte TL Zucker")), ("2", "gehäufte TL", "Zucker"));
    }

    #[test]
    fn test_parse_without_quantity() {
        assert_eq!(parts(&parse("Salz")), ("", "", "Salz"));
        assert_eq!(parts(&parse("Prise Salz")), ("", "Prise", "Salz"));
        assert_eq!(parts(&parse("Salz und Pfeffer")), ("", "", "Salz und Pfeffer"));
    }

    #[test]
    fn test_parse_quantity_only_line() {
        let ingredient = parse("3");
        assert_eq!(parts(&ingredient), ("3", "", ""));
        assert!(ingredient.is_quantity_only());
        assert_eq!(parts(&parse(" 1 1/2 ")), ("1 1/2", "", ""));
    }

    #[test]
    fn test_unit_without_name() {
        assert_eq!(parts(&parse("2 EL")), ("2", "EL", ""));
    }

    #[test]
    fn test_digits_later_in_the_name_are_kept() {
        assert_eq!(
            parts(&parse("1 Dose Tomaten (400 g)")),
            ("1", "Dose", "Tomaten (400 g)")
        );
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(parts(&parse("  400   g   Rinder   Hack  ")), ("400", "g", "Rinder Hack"));
        assert_eq!(parts(&parse("1  1/2 TL\tSalz")), ("1 1/2", "TL", "Salz"));
    }

    #[test]
    fn test_position_is_carried() {
        let ingredient = IngredientParser::default().parse_line("2 Eier", Some(4));
        assert_eq!(ingredient.position, Some(4));
        assert_eq!(ingredient.id, None);
        assert_eq!(ingredient.checked, None);
    }

    #[test]
    fn test_custom_vocabulary() {
        let parser = IngredientParser::new(UnitVocabulary::new(["cups", "tbsp"]));
        assert_eq!(parts(&parser.parse_line("2 cups flour", None)), ("2", "cups", "flour"));
        assert_eq!(parts(&parser.parse_line("400 g Hackfleisch", None)), ("400", "", "g Hackfleisch"));
    }

    #[test]
    fn test_parse_text_skips_blank_lines() {
        let text = "400 g Hackfleisch\r\n\r\n2 Eier\n   \n1 Prise Salz\n";
        let ingredients = IngredientParser::default().parse_text(text);

        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].name, "Hackfleisch");
        assert_eq!(ingredients[0].position, Some(0));
        assert_eq!(ingredients[1].name, "Eier");
        assert_eq!(ingredients[1].position, Some(1));
        assert_eq!(ingredients[2].quantity_unit, "Prise");
        assert_eq!(ingredients[2].position, Some(2));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(IngredientParser::default().parse_text("").is_empty());
        assert!(IngredientParser::default().parse_text("\n\r\n  \n").is_empty());
    }
}
