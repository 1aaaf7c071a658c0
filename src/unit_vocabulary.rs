//! # Unit Vocabulary Module
//!
//! The ordered list of culinary units the ingredient parser recognises. The
//! vocabulary is a plain value owned by the parser, so callers can swap in
//! their own list (tests, other languages) without touching global state.
//!
//! Matching is case-sensitive and takes the first entry, in list order, that
//! prefixes the candidate text and is followed by whitespace or the end of the
//! text. "Eier" therefore never matches "EL", and "gehäufter TL" is found as a
//! whole unit.

use log::trace;
use serde::{Deserialize, Serialize};

/// Default German vocabulary. Multi-word entries come before any shorter entry
/// they start with.
pub const DEFAULT_UNITS: &[&str] = &[
    // Spoon measures
    "gehäufter EL",
    "gehäufte EL",
    "gestrichener EL",
    "gestrichene EL",
    "gehäufter TL",
    "gehäufte TL",
    "gestrichener TL",
    "gestrichene TL",
    "EL",
    "TL",
    "Msp.",
    "Prise",
    "Prisen",
    // Weight
    "mg",
    "g",
    "kg",
    "Pfund",
    // Volume
    "ml",
    "cl",
    "dl",
    "l",
    "Tasse",
    "Tassen",
    // Containers
    "Packung",
    "Packungen",
    "Päckchen",
    "Dose",
    "Dosen",
    "Becher",
    "Glas",
    "Gläser",
    "Flasche",
    "Flaschen",
    "Tube",
    "Tuben",
    "Beutel",
    // Pieces
    "Bund",
    "Stück",
    "Scheibe",
    "Scheiben",
    "Zehe",
    "Zehen",
    "Stange",
    "Stangen",
    "Handvoll",
    "Würfel",
    "Zweig",
    "Zweige",
    "Blatt",
    "Blätter",
    "Kopf",
    "Köpfe",
    "Knolle",
    "Knollen",
];

/// An ordered list of unit strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitVocabulary {
    units: Vec<String>,
}

impl UnitVocabulary {
    /// Build a vocabulary from units in match order
    ///
    /// Blank entries are dropped and surrounding whitespace trimmed; the order
    /// is otherwise kept as given.
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let units = units
            .into_iter()
            .map(|unit| unit.as_ref().trim().to_string())
            .filter(|unit| !unit.is_empty())
            .collect();
        Self { units }
    }

    /// Append a unit, matched after every existing entry
    pub fn with_unit(mut self, unit: &str) -> Self {
        let unit = unit.trim();
        if !unit.is_empty() {
            self.units.push(unit.to_string());
        }
        self
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|known| known == unit)
    }

    /// Split a leading unit off the candidate text
    ///
    /// Returns the matched unit and the remaining text (untrimmed) when the
    /// candidate starts with a vocabulary entry followed by whitespace or the
    /// end of the candidate.
    ///
    /// ```rust
    /// use foodplanner::unit_vocabulary::UnitVocabulary;
    ///
    /// let vocabulary = UnitVocabulary::default();
    /// assert_eq!(vocabulary.match_prefix("Prise Salz"), Some(("Prise", " Salz")));
    /// assert_eq!(vocabulary.match_prefix("Eier"), None);
    /// ```
    pub fn match_prefix<'a>(&'a self, candidate: &'a str) -> Option<(&'a str, &'a str)> {
        for unit in &self.units {
            if let Some(rest) = candidate.strip_prefix(unit.as_str()) {
                if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                    trace!("Matched unit '{}' in '{}'", unit, candidate);
                    return Some((unit.as_str(), rest));
                }
            }
        }
        None
    }
}

impl Default for UnitVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_UNITS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(vocabulary.len(), DEFAULT_UNITS.len());
        assert!(vocabulary.contains("g"));
        assert!(vocabulary.contains("gehäufter TL"));
        assert!(!vocabulary.contains("Eier"));
        assert!(!vocabulary.contains("el"));
    }

    #[test]
    fn test_match_requires_word_boundary() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(vocabulary.match_prefix("Eier"), None);
        assert_eq!(vocabulary.match_prefix("gemahlener Pfeffer"), None);
        assert_eq!(vocabulary.match_prefix("EL Öl"), Some(("EL", " Öl")));
        assert_eq!(vocabulary.match_prefix("EL"), Some(("EL", "")));
        assert_eq!(vocabulary.match_prefix("g\tMehl"), Some(("g", "\tMehl")));
    }

    #[test]
    fn test_multi_word_units() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(
            vocabulary.match_prefix("gehäufter TL Zucker"),
            Some(("gehäufter TL", " Zucker"))
        );
        assert_eq!(
            vocabulary.match_prefix("gestrichene EL Mehl"),
            Some(("gestrichene EL", " Mehl"))
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(vocabulary.match_prefix("el Öl"), None);
        assert_eq!(vocabulary.match_prefix("prise Salz"), None);
    }

    #[test]
    fn test_first_entry_in_order_wins() {
        let vocabulary = UnitVocabulary::new(["cup", "cup of"]);
        assert_eq!(vocabulary.match_prefix("cup of sugar"), Some(("cup", " of sugar")));

        let vocabulary = UnitVocabulary::new(["cup of", "cup"]);
        assert_eq!(vocabulary.match_prefix("cup of sugar"), Some(("cup of", " sugar")));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = UnitVocabulary::new([" cups ", "", "tbsp"]).with_unit("pinch");
        assert_eq!(vocabulary.units(), &["cups", "tbsp", "pinch"]);
        assert_eq!(vocabulary.match_prefix("g Mehl"), None);
        assert!(UnitVocabulary::new(Vec::<String>::new()).is_empty());
    }
}
