//! # Configuration Module
//!
//! Settings for the command-line front end. The library itself never reads
//! the environment; the binary builds a [`Config`] here and hands the
//! resulting parser to the core.

use crate::ingredient_parser::IngredientParser;
use crate::unit_vocabulary::UnitVocabulary;
use log::info;
use std::env;

/// Comma-separated list replacing the default unit vocabulary
pub const UNITS_ENV_VAR: &str = "FOODPLANNER_UNITS";
/// Comma-separated list appended to the vocabulary
pub const EXTRA_UNITS_ENV_VAR: &str = "FOODPLANNER_EXTRA_UNITS";

/// Configuration structure for the front end
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Units recognised when parsing textarea lines
    pub vocabulary: UnitVocabulary,
}

impl Config {
    /// Build the configuration from `FOODPLANNER_UNITS` and `FOODPLANNER_EXTRA_UNITS`
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(UNITS_ENV_VAR).ok().as_deref(),
            env::var(EXTRA_UNITS_ENV_VAR).ok().as_deref(),
        )
    }

    /// Build the configuration from raw variable values
    pub fn from_values(units: Option<&str>, extra_units: Option<&str>) -> Self {
        let mut vocabulary = match units.filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                let vocabulary = UnitVocabulary::new(value.split(','));
                info!("Using {} units from {}", vocabulary.len(), UNITS_ENV_VAR);
                vocabulary
            }
            None => UnitVocabulary::default(),
        };

        if let Some(extra) = extra_units {
            for unit in extra.split(',') {
                vocabulary = vocabulary.with_unit(unit);
            }
        }

        Self { vocabulary }
    }

    pub fn parser(&self) -> IngredientParser {
        IngredientParser::new(self.vocabulary.clone())
    }
}
